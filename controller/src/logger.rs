use std::sync::OnceLock;
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

pub struct Logger {
    prefix: Option<String>,
    verbose: bool,
}

impl Logger {
    fn new(prefix: Option<String>, verbose: bool) -> Self {
        Self { prefix, verbose }
    }

    pub fn log(&self, message: &str) {
        println!("{}", self.format_line(message));
    }

    pub fn log_debug(&self, message: &str) {
        if self.verbose {
            self.log(message);
        }
    }

    fn format_line(&self, message: &str) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        match self.prefix {
            Some(ref prefix) => format!("[{}][{}] {}", timestamp, prefix, message),
            None => format!("[{}] {}", timestamp, message),
        }
    }
}

/// Installs the process-wide logger. Later calls are ignored.
pub fn init_logger(prefix: Option<String>, verbose: bool) {
    LOGGER.get_or_init(|| Logger::new(prefix, verbose));
}

// Library code logs freely; nothing is printed until a binary installs the logger.
pub fn log(message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(message);
    }
}

pub fn log_debug(message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log_debug(message);
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(&format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        $crate::logger::log_debug(&format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line_with_prefix() {
        let logger = Logger::new(Some("Runner".to_string()), false);
        let line = logger.format_line("hello");
        assert!(line.ends_with("[Runner] hello"));
        assert!(line.starts_with('['));
    }

    #[test]
    fn test_format_line_without_prefix() {
        let logger = Logger::new(None, true);
        let line = logger.format_line("tick");
        assert!(line.ends_with("] tick"));
        assert!(!line.contains("]["));
    }
}
