//! Logger registry
//!
//! Process-wide (or application-scoped) cache enforcing one adapter per
//! logical name. The registry is an explicit object with an injectable
//! lifetime: the hosting application constructs one and passes it around, so
//! tests can build a fresh registry instead of resetting global state.
//!
//! Cache policy: the first caller to register a name wins. A second request
//! for the same name returns the cached instance and silently ignores any
//! configuration differences; there is no "already exists" error and no
//! merge. `clear_cache` is the only way to force reconstruction.

#[cfg(feature = "async")]
use crate::adapters::AsyncLoggerAdapter;
use crate::adapters::LoggerAdapter;
use crate::config::LoggerConfig;
use crate::core::Result;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Default)]
struct Caches {
    sync: HashMap<String, Arc<LoggerAdapter>>,
    #[cfg(feature = "async")]
    async_: HashMap<String, Arc<AsyncLoggerAdapter>>,
}

#[derive(Default)]
pub struct LoggerRegistry {
    // One lock over both maps; check-then-insert must be atomic, and
    // construction stays inside the critical section for simplicity
    // (contention on first-time builds is expected to be negligible).
    caches: Mutex<Caches>,
}

impl LoggerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached synchronous adapter for the configuration's name,
    /// constructing it on first request.
    ///
    /// # Errors
    ///
    /// Construction failures propagate unchanged; nothing is cached under
    /// the name in that case.
    pub fn get_or_create(&self, config: &LoggerConfig) -> Result<Arc<LoggerAdapter>> {
        let mut caches = self.caches.lock();
        if let Some(adapter) = caches.sync.get(config.name()) {
            return Ok(Arc::clone(adapter));
        }

        let adapter = Arc::new(LoggerAdapter::new(config.clone())?);
        caches
            .sync
            .insert(config.name().to_string(), Arc::clone(&adapter));
        Ok(adapter)
    }

    /// Return the cached asynchronous adapter for the configuration's name,
    /// constructing it (around a freshly built synchronous adapter) on first
    /// request. Sync and async entries for the same name are independent.
    #[cfg(feature = "async")]
    pub fn get_or_create_async(&self, config: &LoggerConfig) -> Result<Arc<AsyncLoggerAdapter>> {
        let mut caches = self.caches.lock();
        if let Some(adapter) = caches.async_.get(config.name()) {
            return Ok(Arc::clone(adapter));
        }

        let adapter = Arc::new(AsyncLoggerAdapter::new(config.clone())?);
        caches
            .async_
            .insert(config.name().to_string(), Arc::clone(&adapter));
        Ok(adapter)
    }

    /// Drop all cached entries, both variants. Subsequent requests rebuild
    /// from scratch.
    pub fn clear_cache(&self) {
        let mut caches = self.caches.lock();
        caches.sync.clear();
        #[cfg(feature = "async")]
        caches.async_.clear();
    }
}
