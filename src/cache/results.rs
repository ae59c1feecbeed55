//! Keyed result cache for application list pages.
//!
//! Maps a canonical descriptor key to the last successful page fetched for
//! it. The fast path only serves an entry when the key matches the key of
//! the immediately preceding fetch; everything else goes to the network.
//! Invalidation is deliberately coarse: any successful mutation drops the
//! whole map, trading hit-rate for correctness.

use std::num::NonZeroUsize;
use std::sync::{Mutex, MutexGuard};

use lru::LruCache;

use crate::model::{Application, ResultPage};

struct CacheState {
    pages: LruCache<String, ResultPage<Application>>,
    last_key: Option<String>,
}

/// Explicitly constructed, injection-friendly page cache.
///
/// The cache never hands out shared mutable state; lookups clone the stored
/// page and callers treat it as read-only view data.
pub struct ResultCache {
    inner: Mutex<CacheState>,
}

impl ResultCache {
    /// Create a cache bounded to `capacity` pages (clamped to at least 1).
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity)
            .or_else(|| NonZeroUsize::new(1))
            .expect("non-zero capacity");
        Self {
            inner: Mutex::new(CacheState {
                pages: LruCache::new(capacity),
                last_key: None,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, CacheState> {
        match self.inner.lock() {
            Ok(g) => g,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// What: Serve a page without a network call when allowed.
    ///
    /// Inputs:
    /// - `key`: Canonical cache key of the descriptor being fetched.
    ///
    /// Output:
    /// - The cached page when `key` equals the previous fetch's key and an
    ///   entry exists; `None` otherwise.
    pub fn lookup_fast(&self, key: &str) -> Option<ResultPage<Application>> {
        let mut state = self.lock();
        if state.last_key.as_deref() != Some(key) {
            return None;
        }
        let hit = state.pages.get(key).cloned();
        if hit.is_some() {
            tracing::debug!(key, "result cache hit");
        }
        hit
    }

    /// Record a successful fetch: store the page and move the last-key
    /// pointer to it.
    pub fn store(&self, key: &str, page: ResultPage<Application>) {
        let mut state = self.lock();
        state.pages.put(key.to_string(), page);
        state.last_key = Some(key.to_string());
        tracing::trace!(key, entries = state.pages.len(), "result cache updated");
    }

    /// What: Drop every entry.
    ///
    /// Details:
    /// - Called after any successful mutation and by explicit refresh
    ///   triggers; the next fetch for any descriptor hits the network.
    pub fn invalidate_all(&self) {
        let mut state = self.lock();
        let dropped = state.pages.len();
        state.pages.clear();
        state.last_key = None;
        tracing::debug!(dropped, "result cache invalidated");
    }

    /// Number of cached pages.
    pub fn len(&self) -> usize {
        self.lock().pages.len()
    }

    /// Whether the cache holds no pages.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
