use std::io::Write;
use std::sync::OnceLock;

use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogSink {
    Stdout,
    Stderr,
}

pub struct Logger {
    prefix: Option<String>,
    sink: LogSink,
}

impl Logger {
    fn new(prefix: Option<String>, sink: LogSink) -> Self {
        Self { prefix, sink }
    }

    fn format_line(&self, file: &str, line: u32, message: &str) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let file_name = file.rsplit(['/', '\\']).next().unwrap_or(file);
        match self.prefix {
            Some(ref prefix) => format!(
                "[{}][{}][{}:{}] {}",
                timestamp, prefix, file_name, line, message
            ),
            None => format!("[{}][{}:{}] {}", timestamp, file_name, line, message),
        }
    }

    pub fn log(&self, file: &str, line: u32, message: &str) {
        let formatted = self.format_line(file, line, message);
        // Write errors are ignored.
        let _ = match self.sink {
            LogSink::Stdout => writeln!(std::io::stdout().lock(), "{}", formatted),
            LogSink::Stderr => writeln!(std::io::stderr().lock(), "{}", formatted),
        };
    }
}

/// First call wins; later calls are ignored.
pub fn init_logger(prefix: Option<String>, sink: LogSink) {
    LOGGER.get_or_init(|| Logger::new(prefix, sink));
}

/// Messages logged before `init_logger` are dropped.
pub fn log(file: &str, line: u32, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(file, line, message);
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(file!(), line!(), &format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_strips_directories() {
        let logger = Logger::new(None, LogSink::Stderr);
        let line = logger.format_line("common/src/games/tictactoe/engine.rs", 42, "hello");
        assert!(line.ends_with("[engine.rs:42] hello"));
    }

    #[test]
    fn test_format_includes_prefix() {
        let logger = Logger::new(Some("Client".to_string()), LogSink::Stdout);
        let line = logger.format_line("C:\\src\\main.rs", 7, "started");
        assert!(line.ends_with("[Client][main.rs:7] started"));
    }
}
