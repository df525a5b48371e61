//! Log record structure

use crate::core::level::LogLevel;
use crate::core::options::LogOptions;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One log event, ready for formatting
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogRecord {
    pub timestamp: DateTime<Utc>,
    pub level: LogLevel,
    pub name: String,
    pub message: String,
    #[serde(skip)]
    pub options: LogOptions,
}

impl LogRecord {
    /// Sanitize log message to prevent log injection attacks.
    ///
    /// Replaces newlines, carriage returns, and tabs with escape sequences
    /// so a crafted message cannot fake additional records.
    fn sanitize_message(message: &str) -> String {
        message
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    pub fn new(level: LogLevel, name: impl Into<String>, message: &str, options: LogOptions) -> Self {
        Self {
            timestamp: Utc::now(),
            level,
            name: name.into(),
            message: Self::sanitize_message(message),
            options,
        }
    }
}
