//! Out-of-band integer commands and their delivery path into the tick loop.
//!
//! A [`CommandSource`] produces one value per request and may block for as long as it likes.
//! The [`CommandChannel`] runs each request on its own thread and hands the value over through a
//! single-slot channel that the scheduler polls without blocking once per tick.

mod channel;
mod source;

use std::fmt;

pub use channel::CommandChannel;
pub use source::{CommandSource, GatedSource, ScriptedSource};

/// Command value that requests termination unless configured otherwise.
pub const DEFAULT_STOP_VALUE: i64 = 0;

/// Value delivered when a source fails to produce a command. Must never equal the stop value.
pub const DEFAULT_FALLBACK_VALUE: i64 = -1;

/// An integer command consumed by the scheduler between ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Command(i64);

impl Command {
    #[inline]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn value(&self) -> i64 {
        self.0
    }

    /// Whether this command is the designated stop value.
    #[inline]
    pub const fn is_stop(&self, stop_value: i64) -> bool {
        self.0 == stop_value
    }
}

impl From<i64> for Command {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::Command;

    #[test]
    fn stop_matches_configured_value() {
        assert!(Command::new(0).is_stop(0));
        assert!(!Command::new(-1).is_stop(0));
        assert!(Command::new(99).is_stop(99));
    }

    #[test]
    fn display_honors_width() {
        assert_eq!(format!("[{:>3}]", Command::new(-1)), "[ -1]");
    }
}
