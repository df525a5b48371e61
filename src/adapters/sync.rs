//! Synchronous output adapter
//!
//! `LoggerAdapter` binds one validated [`LoggerConfig`] to a concrete sink
//! and formatter, chosen once at construction time. Severity methods never
//! raise: a failing sink write is reported on stderr and counted in the
//! adapter metrics, because logging must not take the application down.

use crate::config::LoggerConfig;
use crate::core::{
    AdapterMetrics, Log, LogError, LogLevel, LogOptions, LogRecord, OutputTarget, Result,
};
use crate::formatters::{Format, JsonFormatter, TextFormatter};
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};

/// Output destination owned by one adapter
enum Sink {
    /// Console stream (stderr)
    Console,
    /// Open file handle, append mode
    File(BufWriter<File>),
    /// Injected writer, used by tests and embedders
    Writer(Box<dyn Write + Send>),
}

impl Sink {
    fn write_line(&mut self, line: &str) -> Result<()> {
        match self {
            Sink::Console => {
                let stderr = std::io::stderr();
                let mut handle = stderr.lock();
                handle.write_all(line.as_bytes())?;
                handle.write_all(b"\n")?;
                handle.flush()?;
            }
            Sink::File(writer) => {
                writer.write_all(line.as_bytes())?;
                writer.write_all(b"\n")?;
                writer.flush()?;
            }
            Sink::Writer(writer) => {
                writer.write_all(line.as_bytes())?;
                writer.write_all(b"\n")?;
                writer.flush()?;
            }
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        match self {
            Sink::Console => std::io::stderr().flush()?,
            Sink::File(writer) => writer.flush()?,
            Sink::Writer(writer) => writer.flush()?,
        }
        Ok(())
    }
}

pub struct LoggerAdapter {
    config: LoggerConfig,
    formatter: Box<dyn Format>,
    sink: Mutex<Sink>,
    metrics: AdapterMetrics,
}

impl std::fmt::Debug for LoggerAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoggerAdapter")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl LoggerAdapter {
    /// Build an adapter for the configuration's target.
    ///
    /// # Errors
    ///
    /// `LogError::Configuration` if a FILE or JSON target has no resolvable
    /// path (validation upstream should already prevent this), or a handler
    /// error if the log file cannot be opened.
    pub fn new(config: LoggerConfig) -> Result<Self> {
        let sink = match config.output_target() {
            OutputTarget::Console => Sink::Console,
            OutputTarget::File | OutputTarget::Json => {
                let path = config.full_path().ok_or_else(|| {
                    LogError::config(
                        "directory",
                        "no file path resolved for FILE and JSON targets",
                    )
                })?;
                let file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(&path)
                    .map_err(|e| {
                        LogError::io_operation("opening log file", path.display().to_string(), e)
                    })?;
                Sink::File(BufWriter::new(file))
            }
        };

        Ok(Self::with_sink(config, sink))
    }

    /// Build an adapter that writes to an injected writer instead of the
    /// configured target. The formatter still follows the configuration.
    pub fn with_writer(config: LoggerConfig, writer: Box<dyn Write + Send>) -> Self {
        Self::with_sink(config, Sink::Writer(writer))
    }

    fn with_sink(config: LoggerConfig, sink: Sink) -> Self {
        let formatter: Box<dyn Format> = match config.output_target() {
            OutputTarget::Json => Box::new(JsonFormatter::new()),
            OutputTarget::Console | OutputTarget::File => Box::new(TextFormatter::new(
                config.log_format(),
                config.date_format(),
            )),
        };

        Self {
            config,
            formatter,
            sink: Mutex::new(sink),
            metrics: AdapterMetrics::new(),
        }
    }

    pub fn name(&self) -> &str {
        self.config.name()
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    pub fn metrics(&self) -> &AdapterMetrics {
        &self.metrics
    }

    pub fn flush(&self) -> Result<()> {
        self.sink.lock().flush()
    }

    fn write(&self, level: LogLevel, message: &str, options: LogOptions) {
        if level < self.config.level() {
            self.metrics.record_suppressed();
            return;
        }

        let options = options.capture();
        let record = LogRecord::new(level, self.config.name(), message, options);

        let line = match self.formatter.format(&record) {
            Ok(line) => line,
            Err(e) => {
                eprintln!("[miraveja-log ERROR] formatting failed: {}", e);
                self.metrics.record_failed();
                return;
            }
        };

        // Formatting happens outside the sink lock; only the write is
        // serialized, so calls from one thread reach the sink in program
        // order.
        if let Err(e) = self.sink.lock().write_line(&line) {
            eprintln!("[miraveja-log ERROR] write failed: {}", e);
            self.metrics.record_failed();
            return;
        }
        self.metrics.record_written();
    }
}

impl Log for LoggerAdapter {
    fn log_with(&self, level: LogLevel, message: &str, options: LogOptions) {
        self.write(level, message, options);
    }
}

impl Drop for LoggerAdapter {
    fn drop(&mut self) {
        let _ = self.sink.lock().flush();
    }
}
