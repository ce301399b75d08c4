use std::num::NonZeroUsize;
use std::sync::{Mutex, MutexGuard, PoisonError};

use lru::LruCache;

/// Bounded memo of related-word expansions, keyed by the exact query.
///
/// The least recently used entry is evicted once `capacity` is reached.
/// A capacity of zero disables caching.
pub struct RelatedWordsCache {
    inner: Mutex<Option<LruCache<String, Vec<String>>>>,
}

impl Default for RelatedWordsCache {
    fn default() -> Self {
        Self::new(0)
    }
}

impl RelatedWordsCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Mutex::new(NonZeroUsize::new(capacity).map(LruCache::new)),
        }
    }

    /// Cached expansion for `key`; a hit marks it most recently used
    pub fn get(&self, key: &str) -> Option<Vec<String>> {
        self.lock().as_mut()?.get(key).cloned()
    }

    pub fn insert(&self, key: String, words: Vec<String>) {
        if let Some(cache) = self.lock().as_mut() {
            cache.put(key, words);
        }
    }

    pub fn clear(&self) {
        if let Some(cache) = self.lock().as_mut() {
            cache.clear();
        }
    }

    pub fn len(&self) -> usize {
        self.lock().as_ref().map_or(0, LruCache::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, Option<LruCache<String, Vec<String>>>> {
        // Poisoning leaves plain data intact
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
