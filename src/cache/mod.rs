//! Response and session caching
//!
//! [`Cache`] is the storage seam, [`LocalCache`] and [`NullCache`] implement
//! it and [`CacheBackend`] picks one from configuration. [`ResponseCache`]
//! memoizes read results on top of it.

use std::fmt::{Debug, Display};
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

mod local;
mod null;
mod response;

pub use local::LocalCache;
pub use null::NullCache;
pub use response::ResponseCache;

use crate::config::CacheConfig;

#[async_trait]
pub trait Cache: Send + Sync + Debug {
    /// Returns None if the key doesn't exist or has expired
    async fn get<V>(&self, key: &str) -> Result<Option<V>>
    where
        V: for<'de> Deserialize<'de> + Send;

    async fn set<V>(&self, key: &str, value: &V, ttl: Duration) -> Result<()>
    where
        V: Serialize + Send + Sync;

    async fn delete(&self, key: &str) -> Result<()>;

    /// Remove every key starting with `prefix`, returns how many were dropped
    async fn delete_prefix(&self, prefix: &str) -> Result<usize>;

    async fn clear(&self) -> Result<()>;

    async fn stats(&self) -> Result<CacheStats>;
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    /// Entries dropped because they expired or were invalidated
    pub evictions: u64,
    pub size: usize,
    /// Between 0.0 and 1.0
    pub hit_rate: f64,
}

impl CacheStats {
    pub fn calculate_hit_rate(&mut self) {
        let total = self.hits + self.misses;
        self.hit_rate = if total > 0 {
            self.hits as f64 / total as f64
        } else {
            0.0
        };
    }
}

/// Cache backend selected by `cache.enabled`
#[derive(Debug)]
pub enum CacheBackend {
    Local(LocalCache),
    Null(NullCache),
}

impl CacheBackend {
    pub fn from_config(config: &CacheConfig) -> Self {
        if config.enabled {
            Self::Local(LocalCache::with_shard_count(config.shard_count()))
        } else {
            Self::Null(NullCache)
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Local(_) => "local",
            Self::Null(_) => "null",
        }
    }
}

#[async_trait]
impl Cache for CacheBackend {
    async fn get<V>(&self, key: &str) -> Result<Option<V>>
    where
        V: for<'de> Deserialize<'de> + Send,
    {
        match self {
            Self::Local(cache) => cache.get(key).await,
            Self::Null(cache) => cache.get(key).await,
        }
    }

    async fn set<V>(&self, key: &str, value: &V, ttl: Duration) -> Result<()>
    where
        V: Serialize + Send + Sync,
    {
        match self {
            Self::Local(cache) => cache.set(key, value, ttl).await,
            Self::Null(cache) => cache.set(key, value, ttl).await,
        }
    }

    async fn delete(&self, key: &str) -> Result<()> {
        match self {
            Self::Local(cache) => cache.delete(key).await,
            Self::Null(cache) => cache.delete(key).await,
        }
    }

    async fn delete_prefix(&self, prefix: &str) -> Result<usize> {
        match self {
            Self::Local(cache) => cache.delete_prefix(prefix).await,
            Self::Null(cache) => cache.delete_prefix(prefix).await,
        }
    }

    async fn clear(&self) -> Result<()> {
        match self {
            Self::Local(cache) => cache.clear().await,
            Self::Null(cache) => cache.clear().await,
        }
    }

    async fn stats(&self) -> Result<CacheStats> {
        match self {
            Self::Local(cache) => cache.stats().await,
            Self::Null(cache) => cache.stats().await,
        }
    }
}

/// Builder for consistent cache key naming
pub struct CacheKey;

impl CacheKey {
    /// Prefix shared by every memoized movie read
    pub const MOVIES: &'static str = "movie:";
    pub const TOKENS: &'static str = "token:";

    pub fn movies_all() -> String {
        format!("{}all", Self::MOVIES)
    }

    pub fn movie_title(title: impl Display) -> String {
        format!("{}title:{}", Self::MOVIES, title)
    }

    pub fn movie_released(date: impl Display) -> String {
        format!("{}released:{}", Self::MOVIES, date)
    }

    pub fn movie_genre(genre: impl Display) -> String {
        format!("{}genre:{}", Self::MOVIES, genre)
    }

    pub fn movie_duration(duration: impl Display) -> String {
        format!("{}duration:{}", Self::MOVIES, duration)
    }

    pub fn token(id: impl Display) -> String {
        format!("{}{}", Self::TOKENS, id)
    }
}
