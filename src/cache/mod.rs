//! Cache Module
//!
//! Provides a byte-bounded in-memory cache with LRU eviction.

mod entry;
mod lru;
mod stats;
mod store;
mod value;


// Re-export public types
pub use entry::Entry;
pub use lru::{LruList, NodeId};
pub use stats::CacheStats;
pub use store::{LruCache, OnEvict};
pub use value::{ByteView, Value};
