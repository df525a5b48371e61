//! Test utilities
//!
//! `MemorySink` captures formatted output in memory for assertions;
//! `MockLogger` records calls without any formatting or I/O. Both are part
//! of the public API so downstream crates can test their logging without
//! touching the filesystem.

use crate::core::{Log, LogLevel, LogOptions};
use parking_lot::Mutex;
use std::io::Write;
use std::sync::Arc;

/// Shared in-memory buffer usable as an injected adapter writer
///
/// Clone-able handle; all clones observe the same buffer.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A writer for [`LoggerAdapter::with_writer`]
    ///
    /// [`LoggerAdapter::with_writer`]: crate::adapters::LoggerAdapter::with_writer
    pub fn handle(&self) -> Box<dyn Write + Send> {
        Box::new(MemoryWriter {
            buffer: Arc::clone(&self.buffer),
        })
    }

    /// Everything written so far, lossily decoded
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock()).into_owned()
    }

    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

struct MemoryWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl Write for MemoryWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// One call recorded by [`MockLogger`]
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub level: LogLevel,
    pub message: String,
    pub options: LogOptions,
}

/// Logger double that records calls instead of writing anywhere
#[derive(Debug, Default)]
pub struct MockLogger {
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().clone()
    }

    /// Recorded messages, optionally filtered by level
    pub fn messages(&self, level: Option<LogLevel>) -> Vec<String> {
        self.calls
            .lock()
            .iter()
            .filter(|call| level.map_or(true, |l| call.level == l))
            .map(|call| call.message.clone())
            .collect()
    }

    pub fn clear(&self) {
        self.calls.lock().clear();
    }
}

impl Log for MockLogger {
    fn log_with(&self, level: LogLevel, message: &str, options: LogOptions) {
        self.calls.lock().push(RecordedCall {
            level,
            message: message.to_string(),
            options,
        });
    }
}
