use std::sync::Arc;
use std::time::Duration;

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::cache::{Cache, CacheBackend, CacheKey};
use crate::entities::v1::tokens;
use crate::errors::Error;
use crate::prelude::now;
use crate::security::Identity;

/// Resolves bearer tokens into identities, caching them per token
#[derive(Clone, Debug)]
pub struct Sessions {
    cache: Arc<CacheBackend>,
    ttl: Duration,
}

impl Sessions {
    pub fn new(cache: Arc<CacheBackend>, ttl: Duration) -> Self {
        Self { cache, ttl }
    }

    /// `None` when the token is unknown or expired
    #[::tracing::instrument(skip(self, db))]
    pub async fn resolve(
        &self,
        db: &DatabaseConnection,
        token: Uuid,
    ) -> Result<Option<Identity>, Error> {
        if let Some(identity) = self.get(token).await {
            return Ok(Some(identity));
        }

        let Some((token, user)) = tokens::Model::find_active_with_user(db, token).await? else {
            ::tracing::debug!("Token not found or expired");
            return Ok(None);
        };

        let identity = Identity::new(&user, token.id);
        self.set(&identity, self.ttl_for(&token)).await;

        Ok(Some(identity))
    }

    /// Cache a freshly issued session
    pub async fn remember(&self, identity: &Identity, token: &tokens::Model) {
        self.set(identity, self.ttl_for(token)).await;
    }

    async fn get(&self, token: Uuid) -> Option<Identity> {
        match self.cache.get::<Identity>(&CacheKey::token(token.simple())).await {
            Ok(identity) => identity,
            Err(e) => {
                ::tracing::error!("Failed to read session from cache: {:#}", e);
                None
            }
        }
    }

    async fn set(&self, identity: &Identity, ttl: Duration) {
        if ttl.is_zero() {
            return;
        }

        let key = CacheKey::token(identity.token.simple());

        if let Err(e) = self.cache.set(&key, identity, ttl).await {
            ::tracing::error!("Failed to cache session: {:#}", e);
        }
    }

    /// Never keep an identity cached past the expiry of its token
    fn ttl_for(&self, token: &tokens::Model) -> Duration {
        match token.expired_at {
            None => self.ttl,
            Some(expired_at) => {
                let remaining = (expired_at - now()).to_std().unwrap_or(Duration::ZERO);
                remaining.min(self.ttl)
            }
        }
    }

    #[::tracing::instrument(skip(self))]
    pub async fn evict(&self, token: Uuid) {
        if let Err(e) = self.cache.delete(&CacheKey::token(token.simple())).await {
            ::tracing::error!("Failed to evict session: {:#}", e);
        }
    }
}
