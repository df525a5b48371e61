//! # miraveja-log
//!
//! Lightweight, dependency-injected logging library with validated
//! configuration, structured output and both blocking and non-blocking call
//! styles.
//!
//! ## Features
//!
//! - **Validated configuration**: options (or `LOGGER_*` environment
//!   variables) become an immutable [`LoggerConfig`] or fail atomically
//! - **One logger per name**: a [`LoggerRegistry`] caches exactly one adapter
//!   per logical name, safely under concurrency
//! - **Console, text file and JSON targets** with `%(key)s` message
//!   templates and flat structured fields
//! - **Async call style**: the same five operations as non-blocking
//!   task-offloaded calls (feature `async`, on by default)
//!
//! ## Example
//!
//! ```
//! use miraveja_log::prelude::*;
//!
//! # fn main() -> miraveja_log::Result<()> {
//! let registry = LoggerRegistry::new();
//! let config = LoggerConfig::builder("svc")
//!     .level(LogLevel::Warning)
//!     .build()?;
//!
//! let logger = registry.get_or_create(&config)?;
//! logger.debug("below threshold, ignored");
//! logger.warning("this one is written");
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod config;
pub mod core;
pub mod formatters;
pub mod macros;
pub mod registry;
pub mod testing;

pub mod prelude {
    #[cfg(feature = "async")]
    pub use crate::adapters::AsyncLoggerAdapter;
    pub use crate::adapters::LoggerAdapter;
    pub use crate::config::{ConfigBuilder, LoggerConfig};
    #[cfg(feature = "async")]
    pub use crate::core::AsyncLog;
    pub use crate::core::{
        AdapterMetrics, Extra, FieldValue, Log, LogError, LogLevel, LogOptions, LogRecord,
        OutputTarget, Result,
    };
    pub use crate::formatters::{Format, JsonFormatter, TextFormatter};
    pub use crate::registry::LoggerRegistry;
}

#[cfg(feature = "async")]
pub use crate::adapters::AsyncLoggerAdapter;
pub use crate::adapters::LoggerAdapter;
pub use crate::config::{ConfigBuilder, LoggerConfig};
#[cfg(feature = "async")]
pub use crate::core::AsyncLog;
pub use crate::core::{
    AdapterMetrics, Extra, FieldValue, Log, LogError, LogLevel, LogOptions, LogRecord,
    OutputTarget, Result,
};
pub use crate::formatters::{Format, JsonFormatter, TextFormatter};
pub use crate::registry::LoggerRegistry;
