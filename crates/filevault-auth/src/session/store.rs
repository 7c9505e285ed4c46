//! Session token persistence in the key-value store.

use std::sync::Arc;
use std::time::Duration;

use filevault_cache::keys;
use filevault_core::result::AppResult;
use filevault_core::traits::CacheProvider;
use filevault_core::types::UserId;

/// Maps `auth_<token>` keys to user ids in the key-value store.
#[derive(Debug, Clone)]
pub struct SessionStore {
    cache: Arc<dyn CacheProvider>,
}

impl SessionStore {
    /// Creates a new session store.
    pub fn new(cache: Arc<dyn CacheProvider>) -> Self {
        Self { cache }
    }

    /// Stores a new token. Returns `false` if the token is already taken.
    pub async fn put(&self, token: &str, user_id: UserId, ttl: Duration) -> AppResult<bool> {
        self.cache
            .set_nx(&keys::auth_token(token), &user_id.to_string(), ttl)
            .await
    }

    /// Returns the raw user id stored for a live token.
    pub async fn lookup(&self, token: &str) -> AppResult<Option<String>> {
        self.cache.get(&keys::auth_token(token)).await
    }

    /// Removes a token. Returns `false` if no live token was stored.
    pub async fn remove(&self, token: &str) -> AppResult<bool> {
        self.cache.delete(&keys::auth_token(token)).await
    }

    /// Checks that the key-value store is reachable.
    pub async fn health_check(&self) -> AppResult<bool> {
        self.cache.health_check().await
    }
}
