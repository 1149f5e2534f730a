use std::io::{self, BufRead, IsTerminal, Write};

use crossterm::cursor::MoveToColumn;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::style::Print;
use crossterm::terminal::{self, Clear, ClearType};
use log::warn;
use roomsim_engine::AcquireError;
use roomsim_engine::sim::command::CommandSource;

/// Parse one line of prompt input into a command value.
pub fn parse_command(line: &str) -> Option<i64> {
    line.trim().parse().ok()
}

/// Put the terminal back into its normal mode.
///
/// Raw mode is tracked process wide, so this can be called from the main thread while a prompt
/// is still blocked waiting for keys on its own thread. It does nothing when no prompt switched
/// the terminal to raw mode. Call it before `std::process::exit`, which skips destructors.
pub fn restore_terminal() -> io::Result<()> {
    terminal::disable_raw_mode()
}

/// Result of feeding one key to a [`LineInput`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    /// The line is still being typed.
    Pending,
    /// Enter was pressed; the finished line.
    Submit(String),
    /// Ctrl-C.
    Interrupt,
    /// Ctrl-D on an empty line.
    Eof,
}

/// Single line editor state driven by key events.
#[derive(Debug, Default)]
pub struct LineInput {
    text: String,
}

impl LineInput {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn apply(&mut self, key: KeyEvent) -> Edit {
        if key.kind == KeyEventKind::Release {
            return Edit::Pending;
        }
        let control = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if control => Edit::Interrupt,
            KeyCode::Char('d') if control && self.text.is_empty() => Edit::Eof,
            KeyCode::Char(c) if !control => {
                self.text.push(c);
                Edit::Pending
            }
            KeyCode::Backspace => {
                self.text.pop();
                Edit::Pending
            }
            KeyCode::Enter => Edit::Submit(std::mem::take(&mut self.text)),
            _ => Edit::Pending,
        }
    }
}

/// Keeps the terminal in raw mode for the lifetime of the guard.
struct RawMode;

impl RawMode {
    fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

fn io_error(err: io::Error) -> AcquireError {
    AcquireError::Io(err.to_string())
}

/// Interactive command source reading integers from the terminal.
///
/// Lines that are not integers are rejected with a warning and the prompt is shown again.
/// Ctrl-C reports [`AcquireError::Interrupted`]; Ctrl-D or end of input closes the source. When
/// stdin is not a terminal, plain lines are read instead.
#[derive(Debug, Clone)]
pub struct PromptSource {
    label: String,
}

impl PromptSource {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    fn redraw(&self, out: &mut impl Write, text: &str) {
        let _ = execute!(
            out,
            MoveToColumn(0),
            Clear(ClearType::CurrentLine),
            Print(format!("{}: {}", self.label, text))
        );
    }

    fn acquire_interactive(&self) -> Result<i64, AcquireError> {
        let _raw = RawMode::enable().map_err(io_error)?;
        let mut out = io::stdout();
        let mut input = LineInput::default();
        self.redraw(&mut out, input.text());
        loop {
            let Event::Key(key) = event::read().map_err(io_error)? else {
                continue;
            };
            let edit = input.apply(key);
            if edit != Edit::Pending {
                let _ = write!(out, "\r\n");
            }
            match edit {
                Edit::Pending => self.redraw(&mut out, input.text()),
                Edit::Submit(line) => match parse_command(&line) {
                    Some(value) => return Ok(value),
                    None => {
                        warn!("Invalid number: {:?}", line.trim());
                        self.redraw(&mut out, input.text());
                    }
                },
                Edit::Interrupt => return Err(AcquireError::Interrupted),
                Edit::Eof => return Err(AcquireError::Closed),
            }
        }
    }

    fn acquire_lines(&self, input: &mut impl BufRead) -> Result<i64, AcquireError> {
        let mut line = String::new();
        loop {
            line.clear();
            if input.read_line(&mut line).map_err(io_error)? == 0 {
                return Err(AcquireError::Closed);
            }
            match parse_command(&line) {
                Some(value) => return Ok(value),
                None => warn!("Invalid number: {:?}", line.trim()),
            }
        }
    }
}

impl Default for PromptSource {
    fn default() -> Self {
        Self::new("Number")
    }
}

impl CommandSource for PromptSource {
    fn acquire(&self) -> Result<i64, AcquireError> {
        if io::stdin().is_terminal() {
            self.acquire_interactive()
        } else {
            self.acquire_lines(&mut io::stdin().lock())
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
    use roomsim_engine::AcquireError;

    use super::{Edit, LineInput, PromptSource, parse_command, restore_terminal};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn parse_integers() {
        assert_eq!(parse_command("0"), Some(0));
        assert_eq!(parse_command("  42 \n"), Some(42));
        assert_eq!(parse_command("-7"), Some(-7));
    }

    #[test]
    fn reject_non_integers() {
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("stop"), None);
        assert_eq!(parse_command("1.5"), None);
    }

    #[test]
    fn default_label() {
        let source = PromptSource::default();
        assert_eq!(source.label, "Number");
    }

    #[test]
    fn type_edit_and_submit() {
        // Given
        let mut input = LineInput::default();

        // When
        for code in [KeyCode::Char('4'), KeyCode::Char('9'), KeyCode::Backspace] {
            assert_eq!(input.apply(key(code)), Edit::Pending);
        }
        input.apply(key(KeyCode::Char('2')));

        // Then
        assert_eq!(input.text(), "42");
        assert_eq!(input.apply(key(KeyCode::Enter)), Edit::Submit("42".into()));
        assert_eq!(input.text(), "");
    }

    #[test]
    fn control_keys() {
        let mut input = LineInput::default();
        assert_eq!(input.apply(ctrl('c')), Edit::Interrupt);
        assert_eq!(input.apply(ctrl('d')), Edit::Eof);

        input.apply(key(KeyCode::Char('1')));
        assert_eq!(input.apply(ctrl('d')), Edit::Pending);
        assert_eq!(input.text(), "1");
    }

    #[test]
    fn key_releases_are_ignored() {
        let mut input = LineInput::default();
        let mut release = key(KeyCode::Char('5'));
        release.kind = KeyEventKind::Release;
        assert_eq!(input.apply(release), Edit::Pending);
        assert_eq!(input.text(), "");
    }

    #[test]
    fn plain_lines_skip_invalid_input() {
        // Given
        let source = PromptSource::default();
        let mut lines = Cursor::new("abc\n\n 17\n");

        // Then
        assert_eq!(source.acquire_lines(&mut lines), Ok(17));
        assert_eq!(source.acquire_lines(&mut lines), Err(AcquireError::Closed));
    }

    #[test]
    fn restore_without_raw_mode_is_harmless() {
        assert!(restore_terminal().is_ok());
    }
}
