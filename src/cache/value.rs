//! Cache Value Module
//!
//! Defines the sizing capability every cached value must provide, plus
//! `ByteView`, an immutable byte buffer suited for sharing cached payloads.

use std::fmt;
use std::sync::Arc;

use serde::{Serialize, Serializer};

// == Value Trait ==
/// A value that can be stored in an [`LruCache`](crate::cache::LruCache).
///
/// The reported size is a logical weight charged against the cache budget;
/// it does not have to match the real memory footprint.
pub trait Value {
    /// Logical size of the value in bytes.
    fn size(&self) -> usize;
}

impl Value for String {
    fn size(&self) -> usize {
        self.len()
    }
}

impl Value for &str {
    fn size(&self) -> usize {
        self.len()
    }
}

impl Value for Vec<u8> {
    fn size(&self) -> usize {
        self.len()
    }
}

// == Byte View ==
/// Read-only view over a cached byte payload.
///
/// Clones share the underlying buffer, so handing a value out of the cache
/// never copies the bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ByteView {
    bytes: Arc<[u8]>,
}

impl ByteView {
    pub fn new(bytes: impl Into<Arc<[u8]>>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns an owned copy of the bytes.
    pub fn to_vec(&self) -> Vec<u8> {
        self.bytes.to_vec()
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl Value for ByteView {
    fn size(&self) -> usize {
        self.len()
    }
}

impl fmt::Display for ByteView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.bytes))
    }
}

impl From<&str> for ByteView {
    fn from(value: &str) -> Self {
        Self::new(value.as_bytes())
    }
}

impl From<String> for ByteView {
    fn from(value: String) -> Self {
        Self::new(value.into_bytes())
    }
}

impl From<Vec<u8>> for ByteView {
    fn from(value: Vec<u8>) -> Self {
        Self::new(value)
    }
}

/// Serializes as a string. Invalid UTF-8 sequences are replaced with
/// U+FFFD, so binary payloads do not survive a round trip.
impl Serialize for ByteView {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&String::from_utf8_lossy(&self.bytes))
    }
}
