//! Error types for miraveja-log

pub type Result<T> = std::result::Result<T, LogError>;

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    /// Configuration validation or construction error
    #[error("Configuration error in field '{field}': {reason}")]
    Configuration { field: String, reason: String },

    /// Error while setting up or driving an output sink
    #[error("Handler error in '{kind}': {reason}")]
    Handler { kind: String, reason: String },

    /// IO error with context
    #[error("IO error while {operation} '{path}': {source}")]
    IoOperation {
        operation: String,
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl LogError {
    /// Create a configuration error naming the offending field
    pub fn config(field: impl Into<String>, reason: impl Into<String>) -> Self {
        LogError::Configuration {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Create a handler error for a sink or formatter
    pub fn handler(kind: impl Into<String>, reason: impl Into<String>) -> Self {
        LogError::Handler {
            kind: kind.into(),
            reason: reason.into(),
        }
    }

    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        path: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LogError::IoOperation {
            operation: operation.into(),
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = LogError::config("directory", "required for FILE and JSON targets");
        assert!(matches!(err, LogError::Configuration { .. }));

        let err = LogError::handler("file", "cannot open log file");
        assert!(matches!(err, LogError::Handler { .. }));
    }

    #[test]
    fn test_error_display() {
        let err = LogError::config("filename", "required for FILE and JSON targets");
        assert_eq!(
            err.to_string(),
            "Configuration error in field 'filename': required for FILE and JSON targets"
        );

        let err = LogError::handler("json", "invalid field type");
        assert_eq!(err.to_string(), "Handler error in 'json': invalid field type");
    }

    #[test]
    fn test_io_operation_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = LogError::io_operation("creating log directory", "/var/log/app", io_err);

        assert!(matches!(err, LogError::IoOperation { .. }));
        assert!(err.to_string().contains("creating log directory"));
        assert!(err.to_string().contains("/var/log/app"));
    }
}
