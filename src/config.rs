//! Configuration Module
//!
//! Handles loading cache and demo parameters from environment variables.

use std::env;
use std::str::FromStr;

use crate::error::{CacheError, Result};

/// Cache configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Byte budget for the cache, 0 = unbounded
    pub max_bytes: usize,
    /// Number of concurrent tasks driving the demo cache
    pub demo_workers: usize,
    /// Number of keys each demo task inserts
    pub demo_keys: usize,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_MAX_BYTES` - Byte budget (default: 0, unbounded)
    /// - `CACHE_DEMO_WORKERS` - Demo task count (default: 4)
    /// - `CACHE_DEMO_KEYS` - Keys inserted per demo task (default: 32)
    ///
    /// Unset variables fall back to their defaults; set but unparsable ones
    /// are reported as [`CacheError::InvalidConfig`].
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            max_bytes: env_or("CACHE_MAX_BYTES", defaults.max_bytes)?,
            demo_workers: env_or("CACHE_DEMO_WORKERS", defaults.demo_workers)?,
            demo_keys: env_or("CACHE_DEMO_KEYS", defaults.demo_keys)?,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_bytes: 0,
            demo_workers: 4,
            demo_keys: 32,
        }
    }
}

fn env_or<T: FromStr>(var: &'static str, default: T) -> Result<T> {
    match env::var(var) {
        Ok(raw) => parse_var(var, &raw),
        Err(_) => Ok(default),
    }
}

fn parse_var<T: FromStr>(var: &'static str, raw: &str) -> Result<T> {
    raw.trim().parse().map_err(|_| CacheError::InvalidConfig {
        var,
        value: raw.to_string(),
    })
}
