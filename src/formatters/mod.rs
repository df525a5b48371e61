//! Record formatters
//!
//! A formatter is a stateless transform from a [`LogRecord`] to one output
//! string. The adapter picks one at construction time: JSON for the JSON
//! target, text otherwise.

pub mod json;
pub mod text;

use crate::core::{LogRecord, Result};

pub use json::JsonFormatter;
pub use text::TextFormatter;

pub trait Format: Send + Sync {
    /// Render one record to its output line (without trailing newline)
    fn format(&self, record: &LogRecord) -> Result<String>;
}
