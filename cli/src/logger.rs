use std::io::Write;

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Writes log records to stdout as `LEVEL - message` lines.
pub struct ConsoleLogger {
    level: LevelFilter,
}

impl ConsoleLogger {
    pub fn new(level: LevelFilter) -> Self {
        Self { level }
    }

    /// Install a console logger as the global `log` backend.
    pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(Self::new(level)))?;
        log::set_max_level(level);
        Ok(())
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            // Prompt input runs in raw mode on another thread, so lines end in \r\n.
            let mut out = std::io::stdout().lock();
            let _ = write!(out, "{} - {}\r\n", record.level(), record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stdout().flush();
    }
}

#[cfg(test)]
mod tests {
    use log::{Level, LevelFilter, Log, Metadata};

    use super::ConsoleLogger;

    #[test]
    fn filters_by_level() {
        // Given
        let logger = ConsoleLogger::new(LevelFilter::Info);

        // Then
        let at = |level| Metadata::builder().level(level).build();
        assert!(logger.enabled(&at(Level::Error)));
        assert!(logger.enabled(&at(Level::Info)));
        assert!(!logger.enabled(&at(Level::Debug)));
    }

    #[test]
    fn off_disables_everything() {
        let logger = ConsoleLogger::new(LevelFilter::Off);
        let metadata = Metadata::builder().level(Level::Error).build();
        assert!(!logger.enabled(&metadata));
    }
}
