//! Adapter write counters
//!
//! Sink failures are not raised back to callers of the severity methods, so
//! these counters are the way to notice a misbehaving sink.

use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct AdapterMetrics {
    written: AtomicU64,
    failed: AtomicU64,
    suppressed: AtomicU64,
}

impl AdapterMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_written(&self) {
        self.written.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_failed(&self) {
        self.failed.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_suppressed(&self) {
        self.suppressed.fetch_add(1, Ordering::Relaxed);
    }

    /// Records successfully written to the sink
    pub fn written(&self) -> u64 {
        self.written.load(Ordering::Relaxed)
    }

    /// Records lost to sink or formatter failures
    pub fn failed(&self) -> u64 {
        self.failed.load(Ordering::Relaxed)
    }

    /// Records skipped because they were below the severity threshold
    pub fn suppressed(&self) -> u64 {
        self.suppressed.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters() {
        let metrics = AdapterMetrics::new();
        assert_eq!(metrics.written(), 0);

        metrics.record_written();
        metrics.record_written();
        metrics.record_failed();
        metrics.record_suppressed();

        assert_eq!(metrics.written(), 2);
        assert_eq!(metrics.failed(), 1);
        assert_eq!(metrics.suppressed(), 1);
    }
}
