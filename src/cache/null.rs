use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{Cache, CacheStats};

/// Cache that stores nothing, used when `cache.enabled = false`
#[derive(Debug, Clone, Default)]
pub struct NullCache;

#[async_trait]
impl Cache for NullCache {
    async fn get<V>(&self, _key: &str) -> Result<Option<V>>
    where
        V: for<'de> Deserialize<'de> + Send,
    {
        Ok(None)
    }

    async fn set<V>(&self, _key: &str, _value: &V, _ttl: Duration) -> Result<()>
    where
        V: Serialize + Send + Sync,
    {
        Ok(())
    }

    async fn delete(&self, _key: &str) -> Result<()> {
        Ok(())
    }

    async fn delete_prefix(&self, _prefix: &str) -> Result<usize> {
        Ok(0)
    }

    async fn clear(&self) -> Result<()> {
        Ok(())
    }

    async fn stats(&self) -> Result<CacheStats> {
        Ok(CacheStats::default())
    }
}
