//! Cache Entry Module
//!
//! Defines the key/value pair held in the recency list.

use crate::cache::Value;

// == Cache Entry ==
/// A single cached key/value pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<V> {
    /// Lookup key
    pub key: String,
    /// The stored value
    pub value: V,
}

impl<V: Value> Entry<V> {
    // == Constructor ==
    pub fn new(key: String, value: V) -> Self {
        Self { key, value }
    }

    // == Size ==
    /// Bytes charged against the cache budget: key length plus the value's
    /// logical size.
    pub fn size(&self) -> usize {
        self.key.len() + self.value.size()
    }
}
