//! Shared Cache Module
//!
//! Async, clonable handle that serializes access to an [`LruCache`].
//!
//! The core cache has no locking of its own. `SharedCache` holds a tokio
//! mutex for exactly one cache operation per call, so eviction callbacks run
//! while the lock is held and must not call back into the same handle.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::debug;

use crate::cache::{CacheStats, LruCache, OnEvict, Value};

// == Shared Cache ==
/// Thread-safe wrapper around a lazily created [`LruCache`].
#[derive(Clone)]
pub struct SharedCache<V> {
    inner: Arc<Mutex<Inner<V>>>,
}

struct Inner<V> {
    max_bytes: usize,
    /// Consumed when the cache is first created
    on_evict: Option<OnEvict<V>>,
    cache: Option<LruCache<V>>,
}

impl<V: Value + Clone + Send + 'static> SharedCache<V> {
    // == Constructor ==
    /// Creates a handle; the underlying cache is allocated on the first add.
    pub fn new(max_bytes: usize, on_evict: Option<OnEvict<V>>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                max_bytes,
                on_evict,
                cache: None,
            })),
        }
    }

    // == Add ==
    pub async fn add(&self, key: impl Into<String>, value: V) {
        let mut inner = self.inner.lock().await;
        let Inner {
            max_bytes,
            on_evict,
            cache,
        } = &mut *inner;

        let cache = cache.get_or_insert_with(|| {
            debug!(max_bytes = *max_bytes, "Initializing shared cache");
            LruCache::new(*max_bytes, on_evict.take())
        });
        cache.add(key, value);
    }

    // == Get ==
    /// Looks up a key, returning a clone of the value.
    ///
    /// Before the first add this is always a miss.
    pub async fn get(&self, key: &str) -> Option<V> {
        let mut inner = self.inner.lock().await;
        inner.cache.as_mut()?.get(key).cloned()
    }

    // == Length ==
    pub async fn len(&self) -> usize {
        let inner = self.inner.lock().await;
        inner.cache.as_ref().map_or(0, LruCache::len)
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    // == Stats ==
    /// Returns a statistics snapshot.
    ///
    /// Lookups made before the cache was created are not counted.
    pub async fn stats(&self) -> CacheStats {
        let inner = self.inner.lock().await;
        match inner.cache.as_ref() {
            Some(cache) => cache.stats(),
            None => CacheStats {
                max_bytes: inner.max_bytes,
                ..CacheStats::default()
            },
        }
    }
}
