//! Asynchronous output adapter
//!
//! A mechanical decorator over [`LoggerAdapter`]: each operation offloads the
//! equivalent synchronous call to the blocking-task pool and suspends the
//! caller until the write completes, without blocking other tasks on the
//! scheduler. Calls awaited in sequence from one task keep program order; no
//! ordering holds between concurrent tasks. Once dispatched, a write runs to
//! completion; there is no cancellation.

use super::sync::LoggerAdapter;
use crate::config::LoggerConfig;
use crate::core::{AsyncLog, Log, LogLevel, LogOptions, Result};
use async_trait::async_trait;
use std::sync::Arc;

pub struct AsyncLoggerAdapter {
    inner: Arc<LoggerAdapter>,
}

impl AsyncLoggerAdapter {
    /// Build an async adapter around a freshly constructed synchronous one.
    ///
    /// # Errors
    ///
    /// Propagates [`LoggerAdapter::new`] failures unchanged.
    pub fn new(config: LoggerConfig) -> Result<Self> {
        Ok(Self {
            inner: Arc::new(LoggerAdapter::new(config)?),
        })
    }

    /// Wrap an existing synchronous adapter
    pub fn from_adapter(inner: Arc<LoggerAdapter>) -> Self {
        Self { inner }
    }

    pub fn name(&self) -> &str {
        self.inner.name()
    }

    /// The wrapped synchronous adapter
    pub fn inner(&self) -> &Arc<LoggerAdapter> {
        &self.inner
    }

    async fn offload(&self, level: LogLevel, message: String, options: LogOptions) {
        // Stack context is call-stack-local; materialize it here, before the
        // work moves to a pool thread.
        let options = options.capture();
        let inner = Arc::clone(&self.inner);

        let joined =
            tokio::task::spawn_blocking(move || inner.log_with(level, &message, options)).await;
        if joined.is_err() {
            eprintln!("[miraveja-log ERROR] async log worker failed");
        }
    }
}

#[async_trait]
impl AsyncLog for AsyncLoggerAdapter {
    async fn log_with(&self, level: LogLevel, message: &str, options: LogOptions) {
        self.offload(level, message.to_string(), options).await;
    }
}
