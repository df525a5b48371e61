//! Environment-variable configuration loader
//!
//! Reads the `LOGGER_*` variables into a [`LoggerConfig`], falling back to
//! caller-supplied defaults for anything unset. This is the only place in the
//! crate allowed to touch the filesystem while loading configuration: when
//! the resolved target writes to a file, the log directory is created before
//! the configuration is built.

use super::{ConfigBuilder, LoggerConfig, DEFAULT_NAME};
use crate::core::{LogError, LogLevel, OutputTarget, Result};
use std::env;
use std::path::PathBuf;

pub const ENV_NAME: &str = "LOGGER_NAME";
pub const ENV_LEVEL: &str = "LOGGER_LEVEL";
pub const ENV_TARGET: &str = "LOGGER_TARGET";
pub const ENV_FORMAT: &str = "LOGGER_FORMAT";
pub const ENV_DATEFMT: &str = "LOGGER_DATEFMT";
pub const ENV_DIR: &str = "LOGGER_DIR";
pub const ENV_FILENAME: &str = "LOGGER_FILENAME";

impl LoggerConfig {
    /// Load configuration from environment variables with built-in defaults
    /// (name "miraveja", level INFO, target CONSOLE).
    ///
    /// # Errors
    ///
    /// `LogError::Configuration` for unparsable values or a missing
    /// directory/filename on FILE and JSON targets; IO errors from creating
    /// the log directory.
    pub fn from_env() -> Result<LoggerConfig> {
        let defaults = LoggerConfig::builder(DEFAULT_NAME).build()?;
        Self::from_env_or(&defaults)
    }

    /// Load configuration from environment variables, falling back to the
    /// given defaults for every unset variable.
    pub fn from_env_or(defaults: &LoggerConfig) -> Result<LoggerConfig> {
        let name = env_var(ENV_NAME).unwrap_or_else(|| defaults.name().to_string());

        let level = match env_var(ENV_LEVEL) {
            Some(raw) => raw.parse::<LogLevel>()?,
            None => defaults.level(),
        };

        let target = match env_var(ENV_TARGET) {
            Some(raw) => raw.parse::<OutputTarget>()?,
            None => defaults.output_target(),
        };

        let directory = env_var(ENV_DIR)
            .map(PathBuf::from)
            .or_else(|| defaults.directory().map(PathBuf::from));

        // The loader, not the validator, owns this side effect.
        if target.needs_path() {
            if let Some(dir) = &directory {
                std::fs::create_dir_all(dir).map_err(|e| {
                    LogError::io_operation("creating log directory", dir.display().to_string(), e)
                })?;
            }
        }

        let mut builder = ConfigBuilder::new(name)
            .level(level)
            .output_target(target)
            .log_format(
                env_var(ENV_FORMAT).unwrap_or_else(|| defaults.log_format().to_string()),
            )
            .date_format(
                env_var(ENV_DATEFMT).unwrap_or_else(|| defaults.date_format().to_string()),
            );

        if let Some(dir) = directory {
            builder = builder.directory(dir);
        }
        if let Some(file) =
            env_var(ENV_FILENAME).or_else(|| defaults.filename().map(str::to_string))
        {
            builder = builder.filename(file);
        }

        builder.build()
    }
}

fn env_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.is_empty())
}

// Tests that manipulate the process environment live in
// tests/integration_tests.rs behind a shared lock, since unit tests here
// would race with each other over the same variables.
