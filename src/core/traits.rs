//! Logger traits
//!
//! `Log` and `AsyncLog` are the seams the rest of an application depends on;
//! the registry hands out concrete adapters, but consumers and tests can hold
//! a `&dyn Log` (see `testing::MockLogger`).

use crate::core::level::LogLevel;
use crate::core::options::LogOptions;

/// Synchronous logging operations
pub trait Log: Send + Sync {
    /// Write one record at the given level with structured options.
    ///
    /// All other methods funnel into this one.
    fn log_with(&self, level: LogLevel, message: &str, options: LogOptions);

    fn log(&self, level: LogLevel, message: &str) {
        self.log_with(level, message, LogOptions::default());
    }

    fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    fn warning(&self, message: &str) {
        self.log(LogLevel::Warning, message);
    }

    fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }

    fn critical(&self, message: &str) {
        self.log(LogLevel::Critical, message);
    }

    fn debug_with(&self, message: &str, options: LogOptions) {
        self.log_with(LogLevel::Debug, message, options);
    }

    fn info_with(&self, message: &str, options: LogOptions) {
        self.log_with(LogLevel::Info, message, options);
    }

    fn warning_with(&self, message: &str, options: LogOptions) {
        self.log_with(LogLevel::Warning, message, options);
    }

    fn error_with(&self, message: &str, options: LogOptions) {
        self.log_with(LogLevel::Error, message, options);
    }

    fn critical_with(&self, message: &str, options: LogOptions) {
        self.log_with(LogLevel::Critical, message, options);
    }
}

/// Asynchronous logging operations
///
/// Each call suspends the task until the equivalent synchronous write has
/// completed on a worker; it never blocks the cooperative scheduler.
#[cfg(feature = "async")]
#[async_trait::async_trait]
pub trait AsyncLog: Send + Sync {
    async fn log_with(&self, level: LogLevel, message: &str, options: LogOptions);

    async fn log(&self, level: LogLevel, message: &str) {
        self.log_with(level, message, LogOptions::default()).await;
    }

    async fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message).await;
    }

    async fn info(&self, message: &str) {
        self.log(LogLevel::Info, message).await;
    }

    async fn warning(&self, message: &str) {
        self.log(LogLevel::Warning, message).await;
    }

    async fn error(&self, message: &str) {
        self.log(LogLevel::Error, message).await;
    }

    async fn critical(&self, message: &str) {
        self.log(LogLevel::Critical, message).await;
    }

    async fn debug_with(&self, message: &str, options: LogOptions) {
        self.log_with(LogLevel::Debug, message, options).await;
    }

    async fn info_with(&self, message: &str, options: LogOptions) {
        self.log_with(LogLevel::Info, message, options).await;
    }

    async fn warning_with(&self, message: &str, options: LogOptions) {
        self.log_with(LogLevel::Warning, message, options).await;
    }

    async fn error_with(&self, message: &str, options: LogOptions) {
        self.log_with(LogLevel::Error, message, options).await;
    }

    async fn critical_with(&self, message: &str, options: LogOptions) {
        self.log_with(LogLevel::Critical, message, options).await;
    }
}
