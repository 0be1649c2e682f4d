use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use async_trait::async_trait;
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use tokio::task::JoinHandle;

use super::{Cache, CacheStats};

const SWEEP_INTERVAL: Duration = Duration::from_secs(60);

#[derive(Debug, Clone)]
struct Entry {
    /// bincode encoded value
    data: Vec<u8>,
    expires_at: Instant,
}

impl Entry {
    fn new(data: Vec<u8>, ttl: Duration) -> Self {
        Self {
            data,
            expires_at: Instant::now() + ttl,
        }
    }

    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// In-process cache on a sharded `DashMap` with per-entry TTL
#[derive(Debug)]
pub struct LocalCache {
    store: Arc<DashMap<String, Entry>>,
    hits: AtomicU64,
    misses: AtomicU64,
    evictions: Arc<AtomicU64>,
    sweeper: Option<JoinHandle<()>>,
}

impl LocalCache {
    pub fn new() -> Self {
        Self::with_shard_count(num_cpus::get() * 4)
    }

    /// `shard_count` must be a power of two greater than one, other values
    /// are rounded up.
    pub fn with_shard_count(shard_count: usize) -> Self {
        let shard_count = shard_count.max(2).next_power_of_two();
        let store = Arc::new(DashMap::with_shard_amount(shard_count));
        let evictions = Arc::new(AtomicU64::new(0));

        let sweeper = tokio::runtime::Handle::try_current()
            .ok()
            .map(|handle| handle.spawn(Self::sweep(Arc::clone(&store), Arc::clone(&evictions))));

        Self {
            store,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            evictions,
            sweeper,
        }
    }

    /// Periodically drop expired entries nobody read again
    async fn sweep(store: Arc<DashMap<String, Entry>>, evictions: Arc<AtomicU64>) {
        let mut interval = tokio::time::interval(SWEEP_INTERVAL);

        loop {
            interval.tick().await;

            let before = store.len();
            store.retain(|_, entry| !entry.is_expired());
            let removed = before.saturating_sub(store.len());

            if removed > 0 {
                evictions.fetch_add(removed as u64, Ordering::Relaxed);
                tracing::debug!(removed, "expired cache entries swept");
            }
        }
    }
}

impl Default for LocalCache {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for LocalCache {
    fn drop(&mut self) {
        if let Some(handle) = self.sweeper.take() {
            handle.abort();
        }
    }
}

#[async_trait]
impl Cache for LocalCache {
    async fn get<V>(&self, key: &str) -> Result<Option<V>>
    where
        V: for<'de> Deserialize<'de> + Send,
    {
        let Some(entry) = self.store.get(key) else {
            self.misses.fetch_add(1, Ordering::Relaxed);
            return Ok(None);
        };

        if entry.is_expired() {
            drop(entry);
            self.store.remove(key);
            self.evictions.fetch_add(1, Ordering::Relaxed);
            self.misses.fetch_add(1, Ordering::Relaxed);
            return Ok(None);
        }

        let value: V = bincode::deserialize(&entry.data)
            .with_context(|| format!("Failed to deserialize cached value for {key}"))?;

        self.hits.fetch_add(1, Ordering::Relaxed);
        Ok(Some(value))
    }

    async fn set<V>(&self, key: &str, value: &V, ttl: Duration) -> Result<()>
    where
        V: Serialize + Send + Sync,
    {
        let data = bincode::serialize(value)
            .with_context(|| format!("Failed to serialize value for {key}"))?;

        self.store.insert(key.to_string(), Entry::new(data, ttl));

        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        self.store.remove(key);
        Ok(())
    }

    async fn delete_prefix(&self, prefix: &str) -> Result<usize> {
        let before = self.store.len();
        self.store.retain(|key, _| !key.starts_with(prefix));
        let removed = before.saturating_sub(self.store.len());

        self.evictions.fetch_add(removed as u64, Ordering::Relaxed);
        Ok(removed)
    }

    async fn clear(&self) -> Result<()> {
        self.store.clear();
        Ok(())
    }

    async fn stats(&self) -> Result<CacheStats> {
        let mut stats = CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            evictions: self.evictions.load(Ordering::Relaxed),
            size: self.store.len(),
            hit_rate: 0.0,
        };

        stats.calculate_hit_rate();

        Ok(stats)
    }
}
