//! Byte LRU demo
//!
//! Exercises the cache the way an embedding process would: a single-threaded
//! round trip against an unbounded cache, then concurrent tasks sharing a
//! budgeted cache.

use anyhow::{bail, Context};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use byte_lru::{ByteView, Config, LruCache, OnEvict, SharedCache};

/// Main entry point for the demo.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Check hit and miss behaviour on an unbounded cache
/// 4. Drive a shared, budgeted cache from several tasks
/// 5. Log the final statistics
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "byte_lru=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().context("Failed to load configuration")?;
    info!(
        "Configuration loaded: max_bytes={}, demo_workers={}, demo_keys={}",
        config.max_bytes, config.demo_workers, config.demo_keys
    );

    round_trip()?;
    run_shared(&config).await?;

    info!("Demo complete");
    Ok(())
}

/// Inserts one key into an unbounded cache and checks a hit and a miss.
fn round_trip() -> anyhow::Result<()> {
    let mut cache = LruCache::unbounded();
    cache.add("key1", ByteView::from("1234"));

    match cache.get("key1") {
        Some(value) if value.as_slice() == b"1234" => {
            info!("Cache hit: key1={}", value);
        }
        other => bail!("cache hit key1=1234 failed, got {:?}", other),
    }

    if cache.get("key2").is_some() {
        bail!("cache miss key2 failed");
    }
    info!("Cache miss: key2");
    Ok(())
}

/// Spawns `demo_workers` tasks that each insert `demo_keys` entries.
async fn run_shared(config: &Config) -> anyhow::Result<()> {
    let on_evict: OnEvict<ByteView> = Box::new(|key: String, value: ByteView| {
        info!(key = %key, size = value.len(), "Evicted");
    });
    let shared = SharedCache::new(config.max_bytes, Some(on_evict));

    let mut handles = Vec::with_capacity(config.demo_workers);
    for worker in 0..config.demo_workers {
        let shared = shared.clone();
        let keys = config.demo_keys;
        handles.push(tokio::spawn(async move {
            for i in 0..keys {
                let key = format!("worker{worker}:key{i}");
                shared.add(key.clone(), ByteView::from(format!("value-{i}"))).await;
                if shared.get(&key).await.is_none() {
                    warn!(key = %key, "Freshly added key already evicted");
                }
            }
        }));
    }

    for handle in handles {
        handle.await.context("Demo task panicked")?;
    }

    let stats = shared.stats().await;
    info!(
        "Cache stats: {}",
        serde_json::to_string(&stats).context("Failed to serialize stats")?
    );
    Ok(())
}
