//! Cache Store Module
//!
//! Main cache engine combining a key index with the recency list and byte
//! accounting.

use std::collections::HashMap;
use std::fmt;

use tracing::debug;

use crate::cache::lru::{LruList, NodeId};
use crate::cache::{CacheStats, Entry, Value};

/// Callback invoked with each evicted key and value.
pub type OnEvict<V> = Box<dyn FnMut(String, V) + Send>;

// == LRU Cache ==
/// Byte-bounded LRU cache.
///
/// Not synchronized. Callers sharing a cache across threads must serialize
/// access themselves, e.g. through [`SharedCache`](crate::shared::SharedCache).
pub struct LruCache<V> {
    /// Budget in bytes, 0 = unbounded
    max_bytes: usize,
    /// Sum of `Entry::size` over all live entries
    used_bytes: usize,
    /// Entries ordered from least to most recently used
    order: LruList<Entry<V>>,
    /// Key to node handle in `order`
    index: HashMap<String, NodeId>,
    /// Optional eviction hook
    on_evict: Option<OnEvict<V>>,
    stats: CacheStats,
}

impl<V: Value> LruCache<V> {
    // == Constructor ==
    /// Creates an empty cache.
    ///
    /// # Arguments
    /// * `max_bytes` - Byte budget; 0 disables eviction entirely
    /// * `on_evict` - Called after an entry has been evicted
    pub fn new(max_bytes: usize, on_evict: Option<OnEvict<V>>) -> Self {
        Self {
            max_bytes,
            used_bytes: 0,
            order: LruList::new(),
            index: HashMap::new(),
            on_evict,
            stats: CacheStats::new(),
        }
    }

    /// Creates a cache that never evicts.
    pub fn unbounded() -> Self {
        Self::new(0, None)
    }

    // == Get ==
    /// Looks up a key and marks it as most recently used.
    pub fn get(&mut self, key: &str) -> Option<&V> {
        let Some(&id) = self.index.get(key) else {
            self.stats.record_miss();
            return None;
        };

        let moved = self.order.move_to_back(id);
        debug_assert!(moved, "index points at a vacant node");
        self.stats.record_hit();
        self.order.get(id).map(|entry| &entry.value)
    }

    // == Add ==
    /// Inserts or replaces a value.
    ///
    /// Replacing keeps the entry's current position; only new keys go to the
    /// most recently used end. If the budget is exceeded afterwards, the
    /// single oldest entry is evicted.
    pub fn add(&mut self, key: impl Into<String>, value: V) {
        let key = key.into();

        match self.index.get(&key).copied() {
            Some(id) => {
                if let Some(entry) = self.order.get_mut(id) {
                    let new_size = value.size();
                    let old_size = entry.value.size();
                    entry.value = value;
                    self.used_bytes = self.used_bytes + new_size - old_size;
                    debug!(key = %key, old_size, new_size, "Cache entry updated");
                }
            }
            None => {
                let entry = Entry::new(key.clone(), value);
                self.used_bytes += entry.size();
                let id = self.order.push_back(entry);
                self.index.insert(key, id);
            }
        }

        if self.max_bytes != 0 && self.used_bytes > self.max_bytes {
            self.remove_oldest();
        }
    }

    // == Remove Oldest ==
    /// Evicts the least recently used entry, if any.
    ///
    /// The eviction callback runs after the entry is gone from the cache.
    pub fn remove_oldest(&mut self) {
        let Some(entry) = self.order.pop_front() else {
            return;
        };

        self.index.remove(&entry.key);
        self.used_bytes -= entry.size();
        self.stats.record_eviction();
        debug!(
            key = %entry.key,
            size = entry.size(),
            used_bytes = self.used_bytes,
            "Evicted least recently used entry"
        );

        if let Some(on_evict) = self.on_evict.as_mut() {
            on_evict(entry.key, entry.value);
        }
    }

    // == Contains ==
    /// Checks for a key without touching its recency.
    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    // == Keys ==
    /// Keys from least to most recently used, without touching recency.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(|entry| entry.key.as_str())
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn used_bytes(&self) -> usize {
        self.used_bytes
    }

    pub fn max_bytes(&self) -> usize {
        self.max_bytes
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.total_entries = self.len();
        stats.used_bytes = self.used_bytes;
        stats.max_bytes = self.max_bytes;
        stats
    }
}

impl<V: fmt::Debug> fmt::Debug for LruCache<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCache")
            .field("max_bytes", &self.max_bytes)
            .field("used_bytes", &self.used_bytes)
            .field("order", &self.order)
            .field("on_evict", &self.on_evict.is_some())
            .finish()
    }
}
