//! Structured per-call options
//!
//! `LogOptions` is the fixed record of optional parameters recognized by
//! every severity method: `extra` fields, rendered exception context, an
//! optional stack trace and a frame offset for trimming it.

use crate::core::fields::{Extra, FieldValue};
use std::backtrace::Backtrace;
use std::error::Error;
use std::fmt::Write as _;

#[derive(Debug, Clone, Default)]
pub struct LogOptions {
    extra: Extra,
    exc_info: Option<String>,
    stack_info: bool,
    stack: Option<String>,
    stack_level: u32,
}

impl LogOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach structured fields
    #[must_use]
    pub fn with_extra(mut self, extra: Extra) -> Self {
        self.extra = extra;
        self
    }

    /// Attach a single structured field
    #[must_use]
    pub fn with_field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.extra.add_field(key, value);
        self
    }

    /// Capture exception context from an error, rendering its source chain.
    ///
    /// Must be called at the original call site; the async adapter relies on
    /// the rendered text travelling with the options into the worker.
    #[must_use]
    pub fn with_error(mut self, err: &(dyn Error + 'static)) -> Self {
        self.exc_info = Some(render_error_chain(err));
        self
    }

    /// Attach pre-rendered exception context
    #[must_use]
    pub fn with_exc_text(mut self, text: impl Into<String>) -> Self {
        self.exc_info = Some(text.into());
        self
    }

    /// Request a stack trace in the output
    #[must_use]
    pub fn with_stack_info(mut self, stack_info: bool) -> Self {
        self.stack_info = stack_info;
        self
    }

    /// Number of leading frames to trim from the rendered stack,
    /// so the trace starts at the real log site rather than inside
    /// logging helpers.
    #[must_use]
    pub fn with_stack_level(mut self, stack_level: u32) -> Self {
        self.stack_level = stack_level;
        self
    }

    pub fn extra(&self) -> &Extra {
        &self.extra
    }

    pub fn exc_info(&self) -> Option<&str> {
        self.exc_info.as_deref()
    }

    pub fn stack(&self) -> Option<&str> {
        self.stack.as_deref()
    }

    /// Materialize deferred captures at the call site.
    ///
    /// Stack traces are call-stack-local; the async wrapper calls this before
    /// offloading so the trace reflects the caller, not the worker thread.
    /// Idempotent: an already-captured stack is kept.
    #[must_use]
    pub fn capture(mut self) -> Self {
        if self.stack_info && self.stack.is_none() {
            let rendered = Backtrace::force_capture().to_string();
            self.stack = Some(trim_frames(&rendered, self.stack_level));
        }
        self
    }
}

fn render_error_chain(err: &(dyn Error + 'static)) -> String {
    let mut rendered = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let _ = write!(rendered, "\nCaused by: {}", cause);
        source = cause.source();
    }
    rendered
}

/// Drop the first `level` frames from a rendered backtrace.
///
/// Frame headers look like "  N: symbol"; continuation lines ("at file:line")
/// belong to the preceding header.
fn trim_frames(rendered: &str, level: u32) -> String {
    if level == 0 {
        return rendered.to_string();
    }

    let mut seen = 0u32;
    let mut kept = Vec::new();
    for line in rendered.lines() {
        let trimmed = line.trim_start();
        let is_header = trimmed
            .split_once(": ")
            .map(|(idx, _)| idx.chars().all(|c| c.is_ascii_digit()))
            .unwrap_or(false);
        if is_header {
            seen += 1;
        }
        if !is_header && seen == 0 {
            // Preamble before the first frame
            kept.push(line);
            continue;
        }
        if seen > level {
            kept.push(line);
        }
    }
    kept.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    #[derive(Debug)]
    struct Inner;

    impl fmt::Display for Inner {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "connection refused")
        }
    }

    impl Error for Inner {}

    #[derive(Debug)]
    struct Outer(Inner);

    impl fmt::Display for Outer {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "request failed")
        }
    }

    impl Error for Outer {
        fn source(&self) -> Option<&(dyn Error + 'static)> {
            Some(&self.0)
        }
    }

    #[test]
    fn test_with_error_renders_chain() {
        let opts = LogOptions::new().with_error(&Outer(Inner));
        let exc = opts.exc_info().unwrap();
        assert!(exc.contains("request failed"));
        assert!(exc.contains("Caused by: connection refused"));
    }

    #[test]
    fn test_capture_without_stack_info_is_noop() {
        let opts = LogOptions::new().capture();
        assert!(opts.stack().is_none());
    }

    #[test]
    fn test_capture_with_stack_info() {
        let opts = LogOptions::new().with_stack_info(true).capture();
        // Whether frames resolve depends on build settings, but the field
        // must be populated once requested.
        assert!(opts.stack().is_some());
    }

    #[test]
    fn test_capture_is_idempotent() {
        let opts = LogOptions::new().with_stack_info(true).capture();
        let first = opts.stack().map(str::to_string);
        let again = opts.capture();
        assert_eq!(again.stack().map(str::to_string), first);
    }

    #[test]
    fn test_trim_frames() {
        let rendered = "   0: alpha\n             at src/a.rs:1\n   1: beta\n             at src/b.rs:2\n   2: gamma";
        let trimmed = trim_frames(rendered, 1);
        assert!(!trimmed.contains("alpha"));
        assert!(trimmed.contains("beta"));
        assert!(trimmed.contains("gamma"));
    }

    #[test]
    fn test_with_field() {
        let opts = LogOptions::new()
            .with_field("user_id", 123)
            .with_field("action", "login");
        assert_eq!(opts.extra().len(), 2);
    }
}
