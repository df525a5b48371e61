//! Logger configuration
//!
//! `LoggerConfig` is the canonical, immutable description of one logger.
//! Construction goes through [`ConfigBuilder`], which applies defaults and
//! validates the cross-field rule atomically: a `LoggerConfig` that exists is
//! always fully valid.

pub mod env;

use crate::core::{LogError, LogLevel, OutputTarget, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default message format, `%(key)s` template syntax
pub const DEFAULT_LOG_FORMAT: &str = "%(asctime)s - %(name)s - %(levelname)s - %(message)s";

/// Default timestamp format, strftime syntax
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Default logger name used by the environment loader
pub const DEFAULT_NAME: &str = "miraveja";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ConfigBuilder")]
pub struct LoggerConfig {
    name: String,
    level: LogLevel,
    output_target: OutputTarget,
    log_format: String,
    date_format: String,
    directory: Option<PathBuf>,
    filename: Option<String>,
}

impl LoggerConfig {
    /// Start building a configuration for the given logger name
    pub fn builder(name: impl Into<String>) -> ConfigBuilder {
        ConfigBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn output_target(&self) -> OutputTarget {
        self.output_target
    }

    pub fn log_format(&self) -> &str {
        &self.log_format
    }

    pub fn date_format(&self) -> &str {
        &self.date_format
    }

    pub fn directory(&self) -> Option<&Path> {
        self.directory.as_deref()
    }

    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    /// Full path to the log file, present only for FILE and JSON targets
    pub fn full_path(&self) -> Option<PathBuf> {
        match (&self.directory, &self.filename) {
            (Some(dir), Some(file)) if self.output_target.needs_path() => Some(dir.join(file)),
            _ => None,
        }
    }
}

/// Builder applying defaults and validating into a [`LoggerConfig`]
///
/// Also the deserialization surface: a `LoggerConfig` deserializes through
/// the builder, so stored configurations pass the same validation as
/// hand-built ones.
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigBuilder {
    name: String,
    #[serde(default)]
    level: LogLevel,
    #[serde(default)]
    output_target: OutputTarget,
    #[serde(default = "default_log_format")]
    log_format: String,
    #[serde(default = "default_date_format")]
    date_format: String,
    #[serde(default)]
    directory: Option<PathBuf>,
    #[serde(default)]
    filename: Option<String>,
}

fn default_log_format() -> String {
    DEFAULT_LOG_FORMAT.to_string()
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

impl TryFrom<ConfigBuilder> for LoggerConfig {
    type Error = LogError;

    fn try_from(builder: ConfigBuilder) -> Result<Self> {
        builder.build()
    }
}

impl ConfigBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level: LogLevel::default(),
            output_target: OutputTarget::default(),
            log_format: DEFAULT_LOG_FORMAT.to_string(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            directory: None,
            filename: None,
        }
    }

    #[must_use]
    pub fn level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub fn output_target(mut self, target: OutputTarget) -> Self {
        self.output_target = target;
        self
    }

    #[must_use]
    pub fn log_format(mut self, format: impl Into<String>) -> Self {
        self.log_format = format.into();
        self
    }

    #[must_use]
    pub fn date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = format.into();
        self
    }

    #[must_use]
    pub fn directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.directory = Some(directory.into());
        self
    }

    #[must_use]
    pub fn filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    /// Validate and freeze the configuration.
    ///
    /// # Errors
    ///
    /// `LogError::Configuration` when `name` is empty, or when the target is
    /// FILE or JSON and `directory` or `filename` is missing. No partially
    /// valid configuration is ever observable.
    pub fn build(self) -> Result<LoggerConfig> {
        if self.name.is_empty() {
            return Err(LogError::config("name", "must not be empty"));
        }

        if self.output_target.needs_path() {
            if self.directory.is_none() {
                return Err(LogError::config(
                    "directory",
                    "required for FILE and JSON targets",
                ));
            }
            match self.filename.as_deref() {
                None | Some("") => {
                    return Err(LogError::config(
                        "filename",
                        "required for FILE and JSON targets",
                    ));
                }
                Some(_) => {}
            }
        }

        Ok(LoggerConfig {
            name: self.name,
            level: self.level,
            output_target: self.output_target,
            log_format: self.log_format,
            date_format: self.date_format,
            directory: self.directory,
            filename: self.filename,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_config_minimal() {
        let config = LoggerConfig::builder("app").build().unwrap();
        assert_eq!(config.name(), "app");
        assert_eq!(config.level(), LogLevel::Info);
        assert_eq!(config.output_target(), OutputTarget::Console);
        assert_eq!(config.log_format(), DEFAULT_LOG_FORMAT);
        assert_eq!(config.date_format(), DEFAULT_DATE_FORMAT);
        assert!(config.full_path().is_none());
    }

    #[test]
    fn test_empty_name_rejected() {
        let err = LoggerConfig::builder("").build().unwrap_err();
        match err {
            LogError::Configuration { field, .. } => assert_eq!(field, "name"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_file_target_requires_directory() {
        let err = LoggerConfig::builder("app")
            .output_target(OutputTarget::File)
            .filename("app.log")
            .build()
            .unwrap_err();
        match err {
            LogError::Configuration { field, reason } => {
                assert_eq!(field, "directory");
                assert_eq!(reason, "required for FILE and JSON targets");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_json_target_requires_filename() {
        let err = LoggerConfig::builder("app")
            .output_target(OutputTarget::Json)
            .directory("/tmp/logs")
            .build()
            .unwrap_err();
        match err {
            LogError::Configuration { field, .. } => assert_eq!(field, "filename"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_filename_rejected() {
        let err = LoggerConfig::builder("app")
            .output_target(OutputTarget::File)
            .directory("/tmp/logs")
            .filename("")
            .build()
            .unwrap_err();
        match err {
            LogError::Configuration { field, .. } => assert_eq!(field, "filename"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_full_path() {
        let config = LoggerConfig::builder("app")
            .output_target(OutputTarget::File)
            .directory("/var/log/miraveja")
            .filename("app.log")
            .build()
            .unwrap();
        assert_eq!(
            config.full_path(),
            Some(PathBuf::from("/var/log/miraveja/app.log"))
        );
    }

    #[test]
    fn test_deserialization_runs_validation() {
        // Deserialization goes through the builder, so an invalid stored
        // configuration can never become a live LoggerConfig.
        let json = r#"{"name":"","output_target":"File","directory":null,"filename":null}"#;
        let result: std::result::Result<LoggerConfig, _> = serde_json::from_str(json);
        let message = result.unwrap_err().to_string();
        assert!(message.contains("name"), "error must name the field: {message}");

        let json = r#"{"name":"svc","output_target":"File"}"#;
        let result: std::result::Result<LoggerConfig, _> = serde_json::from_str(json);
        let message = result.unwrap_err().to_string();
        assert!(message.contains("directory"), "error must name the field: {message}");
    }

    #[test]
    fn test_serialization_round_trip() {
        let config = LoggerConfig::builder("app")
            .output_target(OutputTarget::File)
            .directory("/var/log/miraveja")
            .filename("app.log")
            .build()
            .unwrap();

        let json = serde_json::to_string(&config).unwrap();
        let restored: LoggerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, config);
    }

    #[test]
    fn test_console_ignores_path_fields() {
        // directory/filename are allowed but unused for console targets
        let config = LoggerConfig::builder("app")
            .directory("/tmp/logs")
            .filename("app.log")
            .build()
            .unwrap();
        assert!(config.full_path().is_none());
    }
}
