//! Text formatter
//!
//! Interpolates a `%(key)s` message template against the record. Recognized
//! keys are `asctime`, `name`, `levelname` and `message`, plus any key in the
//! record's extra fields; unknown keys are left verbatim. `%%` renders a
//! literal percent. `asctime` is rendered with the configured strftime date
//! format, in UTC.

use super::Format;
use crate::core::{LogRecord, Result};
use chrono::SecondsFormat;
use std::fmt::Write as _;

pub struct TextFormatter {
    log_format: String,
    date_format: String,
}

impl TextFormatter {
    pub fn new(log_format: impl Into<String>, date_format: impl Into<String>) -> Self {
        Self {
            log_format: log_format.into(),
            date_format: date_format.into(),
        }
    }
}

impl Format for TextFormatter {
    fn format(&self, record: &LogRecord) -> Result<String> {
        // An invalid strftime specifier surfaces as a fmt error when the
        // delayed format is rendered; fall back to RFC 3339 rather than
        // letting the error escape a severity call.
        let mut asctime = String::new();
        if write!(asctime, "{}", record.timestamp.format(&self.date_format)).is_err() {
            asctime = record.timestamp.to_rfc3339_opts(SecondsFormat::Secs, true);
        }
        let mut out = interpolate(&self.log_format, record, &asctime);

        // Exception and stack context go on following lines, after the
        // formatted record itself.
        if let Some(exc) = record.options.exc_info() {
            out.push('\n');
            out.push_str(exc);
        }
        if let Some(stack) = record.options.stack() {
            out.push('\n');
            out.push_str(stack);
        }

        Ok(out)
    }
}

fn interpolate(template: &str, record: &LogRecord, asctime: &str) -> String {
    let mut out = String::with_capacity(template.len() + 32);
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        match chars.peek() {
            Some('%') => {
                chars.next();
                out.push('%');
            }
            Some('(') => {
                chars.next();
                let mut key = String::new();
                let mut closed = false;
                for k in chars.by_ref() {
                    if k == ')' {
                        closed = true;
                        break;
                    }
                    key.push(k);
                }
                // Only the 's' conversion is recognized; %(key)d and friends
                // are not placeholders and stay verbatim.
                let is_placeholder = closed && chars.peek() == Some(&'s');

                match lookup(record, &key, asctime) {
                    Some(value) if is_placeholder => {
                        chars.next();
                        out.push_str(&value);
                    }
                    _ => {
                        out.push_str("%(");
                        out.push_str(&key);
                        if closed {
                            out.push(')');
                        }
                    }
                }
            }
            _ => out.push('%'),
        }
    }

    out
}

fn lookup(record: &LogRecord, key: &str, asctime: &str) -> Option<String> {
    match key {
        "asctime" => Some(asctime.to_string()),
        "name" => Some(record.name.clone()),
        "levelname" => Some(record.level.to_str().to_string()),
        "message" => Some(record.message.clone()),
        _ => record.options.extra().get(key).map(|v| v.to_string()),
    }
}
