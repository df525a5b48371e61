//! Logging macros for ergonomic message formatting.
//!
//! Positional arguments are substituted at the call site with `format!`,
//! matching `println!` semantics.
//!
//! # Examples
//!
//! ```
//! use miraveja_log::prelude::*;
//! use miraveja_log::info;
//!
//! let logger = miraveja_log::testing::MockLogger::new();
//!
//! info!(logger, "Server started");
//!
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! ```

/// Log a message at an explicit level with automatic formatting.
///
/// # Examples
///
/// ```
/// # use miraveja_log::prelude::*;
/// # let logger = miraveja_log::testing::MockLogger::new();
/// use miraveja_log::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, &format!($($arg)+))
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warning, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a critical-level message.
#[macro_export]
macro_rules! critical {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Critical, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{Log, LogLevel};
    use crate::testing::MockLogger;

    #[test]
    fn test_log_macro() {
        let logger = MockLogger::new();
        log!(logger, LogLevel::Info, "Test message");
        log!(logger, LogLevel::Info, "Formatted: {}", 42);
        assert_eq!(logger.messages(None), vec!["Test message", "Formatted: 42"]);
    }

    #[test]
    fn test_level_macros() {
        let logger = MockLogger::new();
        debug!(logger, "d");
        info!(logger, "i {}", 1);
        warning!(logger, "w");
        error!(logger, "e {}", "msg");
        critical!(logger, "c");

        assert_eq!(logger.messages(Some(LogLevel::Debug)), vec!["d"]);
        assert_eq!(logger.messages(Some(LogLevel::Info)), vec!["i 1"]);
        assert_eq!(logger.messages(Some(LogLevel::Warning)), vec!["w"]);
        assert_eq!(logger.messages(Some(LogLevel::Error)), vec!["e msg"]);
        assert_eq!(logger.messages(Some(LogLevel::Critical)), vec!["c"]);
    }
}
