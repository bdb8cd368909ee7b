//! Byte LRU - A byte-bounded in-process LRU cache
//!
//! Evicts the least recently used entry once the configured byte budget is
//! exceeded. The core [`LruCache`] is unsynchronized; [`SharedCache`] wraps it
//! for use from concurrent tasks.

pub mod cache;
pub mod config;
pub mod error;
pub mod shared;

pub use cache::{ByteView, CacheStats, LruCache, OnEvict, Value};
pub use config::Config;
pub use error::{CacheError, Result};
pub use shared::SharedCache;
