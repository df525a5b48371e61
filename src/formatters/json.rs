//! JSON formatter
//!
//! Emits one self-contained JSON object per record (JSONL), compatible with
//! log aggregation tools. Extra fields are merged flat at the top level of
//! the object; a collision with one of the reserved keys (`timestamp`,
//! `level`, `name`, `message`) is resolved last-write-wins in favor of the
//! extra field. That overwrite is a documented sharp edge, not an error.

use super::Format;
use crate::core::{LogRecord, Result};
use chrono::SecondsFormat;
use serde_json::{Map, Value};

#[derive(Debug, Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Format for JsonFormatter {
    fn format(&self, record: &LogRecord) -> Result<String> {
        let mut object = Map::new();
        object.insert(
            "timestamp".to_string(),
            Value::String(record.timestamp.to_rfc3339_opts(SecondsFormat::Micros, true)),
        );
        object.insert(
            "level".to_string(),
            Value::String(record.level.to_str().to_string()),
        );
        object.insert("name".to_string(), Value::String(record.name.clone()));
        object.insert("message".to_string(), Value::String(record.message.clone()));

        for (key, value) in record.options.extra().fields() {
            object.insert(key.clone(), value.to_json_value());
        }

        if let Some(exc) = record.options.exc_info() {
            object.insert("excInfo".to_string(), Value::String(exc.to_string()));
        }
        if let Some(stack) = record.options.stack() {
            object.insert("stackInfo".to_string(), Value::String(stack.to_string()));
        }

        Ok(serde_json::to_string(&Value::Object(object))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LogLevel, LogOptions};

    fn parse(line: &str) -> serde_json::Value {
        serde_json::from_str(line).expect("formatter must emit valid JSON")
    }

    #[test]
    fn test_reserved_keys_present() {
        let record = LogRecord::new(LogLevel::Info, "svc", "hello", LogOptions::default());
        let value = parse(&JsonFormatter::new().format(&record).unwrap());

        assert_eq!(value["level"], "INFO");
        assert_eq!(value["name"], "svc");
        assert_eq!(value["message"], "hello");
        let timestamp = value["timestamp"].as_str().unwrap();
        assert!(timestamp.contains('T'));
        assert!(timestamp.ends_with('Z'));
    }

    #[test]
    fn test_extra_merged_flat() {
        let options = LogOptions::new()
            .with_field("user_id", 123)
            .with_field("action", "login");
        let record = LogRecord::new(LogLevel::Info, "svc", "hello", options);
        let value = parse(&JsonFormatter::new().format(&record).unwrap());

        assert_eq!(value["user_id"], 123);
        assert_eq!(value["action"], "login");
        assert!(value.get("extra").is_none(), "fields must not be nested");
    }

    #[test]
    fn test_extra_overwrites_reserved_key() {
        let options = LogOptions::new().with_field("message", "overridden");
        let record = LogRecord::new(LogLevel::Info, "svc", "original", options);
        let value = parse(&JsonFormatter::new().format(&record).unwrap());

        assert_eq!(value["message"], "overridden");
    }

    #[test]
    fn test_stack_info_key() {
        let options = LogOptions::new().with_stack_info(true).capture();
        let record = LogRecord::new(LogLevel::Error, "svc", "failed", options);
        let line = JsonFormatter::new().format(&record).unwrap();

        assert!(!line.contains('\n'), "one object per line");
        let value = parse(&line);
        let stack = value["stackInfo"].as_str().expect("stackInfo must be a string");
        assert!(!stack.is_empty());
    }

    #[test]
    fn test_no_stack_info_key_without_request() {
        let record = LogRecord::new(LogLevel::Error, "svc", "failed", LogOptions::default());
        let value = parse(&JsonFormatter::new().format(&record).unwrap());
        assert!(value.get("stackInfo").is_none());
    }

    #[test]
    fn test_exc_info_key() {
        let options = LogOptions::new().with_exc_text("boom\nCaused by: disk full");
        let record = LogRecord::new(LogLevel::Error, "svc", "failed", options);
        let line = JsonFormatter::new().format(&record).unwrap();

        assert!(!line.contains('\n'), "one object per line");
        let value = parse(&line);
        assert_eq!(value["excInfo"], "boom\nCaused by: disk full");
    }
}
