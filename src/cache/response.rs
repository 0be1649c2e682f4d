use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use serde::{Serialize, de::DeserializeOwned};

use super::{Cache, CacheBackend, CacheKey, CacheStats};
use crate::config::CacheConfig;
use crate::errors::Error;
use crate::metrics::AppMetrics;

/// Memoizes successful read results under namespaced keys.
///
/// Cache failures never fail a request: a broken read falls through to the
/// loader and a broken write is only logged. Errors from the loader are
/// returned as is and never stored.
///
/// A value loaded while an invalidation runs is never kept: every
/// invalidation bumps the generation and `remember` drops results loaded
/// under an older one.
#[derive(Debug, Clone)]
pub struct ResponseCache {
    backend: Arc<CacheBackend>,
    ttl: Duration,
    generation: Arc<AtomicU64>,
    metrics: Option<AppMetrics>,
}

impl ResponseCache {
    pub fn new(backend: CacheBackend, ttl: Duration) -> Self {
        Self {
            backend: Arc::new(backend),
            ttl,
            generation: Arc::new(AtomicU64::new(0)),
            metrics: None,
        }
    }

    pub fn from_config(config: &CacheConfig) -> Self {
        Self::new(CacheBackend::from_config(config), config.ttl())
    }

    pub fn with_metrics(mut self, metrics: AppMetrics) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Shared handle on the underlying store, used by the session cache
    pub fn backend(&self) -> Arc<CacheBackend> {
        Arc::clone(&self.backend)
    }

    /// Return the cached value for `key`, or run `load` and cache its result
    pub async fn remember<T, F, Fut>(&self, key: String, load: F) -> Result<T, Error>
    where
        T: Serialize + DeserializeOwned + Send + Sync,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, Error>>,
    {
        let namespace = namespace(&key);

        match self.backend.get::<T>(&key).await {
            Ok(Some(value)) => {
                ::tracing::debug!(key = %key, "Cache hit");
                if let Some(metrics) = &self.metrics {
                    metrics.record_cache_hit(namespace);
                }

                return Ok(value);
            }
            Ok(None) => {}
            Err(e) => ::tracing::warn!(key = %key, "Cache read failed: {:#}", e),
        }

        if let Some(metrics) = &self.metrics {
            metrics.record_cache_miss(namespace);
        }

        let generation = self.generation.load(Ordering::SeqCst);
        let value = load().await?;

        if self.generation.load(Ordering::SeqCst) != generation {
            ::tracing::debug!(key = %key, "Invalidated while loading, not cached");
            return Ok(value);
        }

        if let Err(e) = self.backend.set(&key, &value, self.ttl).await {
            ::tracing::warn!(key = %key, "Cache write failed: {:#}", e);
        }

        // an invalidation that started after the check above may have missed the write
        if self.generation.load(Ordering::SeqCst) != generation {
            self.forget(&key).await;
        }

        Ok(value)
    }

    /// Drop every memoized movie read
    pub async fn invalidate_movies(&self) {
        self.invalidate(CacheKey::MOVIES).await;
    }

    pub async fn invalidate(&self, prefix: &str) {
        self.generation.fetch_add(1, Ordering::SeqCst);

        match self.backend.delete_prefix(prefix).await {
            Ok(removed) => {
                ::tracing::debug!(prefix, removed, "Cache namespace invalidated");
                if let Some(metrics) = &self.metrics {
                    metrics.record_cache_invalidation(namespace(prefix));
                }
            }
            Err(e) => ::tracing::warn!(prefix, "Cache invalidation failed: {:#}", e),
        }
    }

    async fn forget(&self, key: &str) {
        if let Err(e) = self.backend.delete(key).await {
            ::tracing::warn!(key, "Cache delete failed: {:#}", e);
        }
    }

    pub async fn is_available(&self) -> bool {
        self.backend.stats().await.is_ok()
    }

    pub async fn stats(&self) -> Option<CacheStats> {
        self.backend.stats().await.ok()
    }
}

fn namespace(key: &str) -> &str {
    key.split(':').next().unwrap_or(key)
}
