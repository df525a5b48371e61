//! Output adapters binding configurations to sinks

#[cfg(feature = "async")]
pub mod async_adapter;
pub mod sync;

#[cfg(feature = "async")]
pub use async_adapter::AsyncLoggerAdapter;
pub use sync::LoggerAdapter;
