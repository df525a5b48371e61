//! Core types and traits

pub mod error;
pub mod fields;
pub mod level;
pub mod metrics;
pub mod options;
pub mod record;
pub mod target;
pub mod traits;

pub use error::{LogError, Result};
pub use fields::{Extra, FieldValue};
pub use level::LogLevel;
pub use metrics::AdapterMetrics;
pub use options::LogOptions;
pub use record::LogRecord;
pub use target::OutputTarget;
#[cfg(feature = "async")]
pub use traits::AsyncLog;
pub use traits::Log;
