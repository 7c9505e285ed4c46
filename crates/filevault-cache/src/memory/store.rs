//! In-memory key-value store using the moka crate.

use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use moka::Expiry;
use moka::future::Cache;
use tracing::debug;

use filevault_core::clock::Clock;
use filevault_core::config::cache::MemoryCacheConfig;
use filevault_core::result::AppResult;
use filevault_core::traits::cache::CacheProvider;

#[derive(Debug, Clone)]
struct Entry {
    value: String,
    ttl: Duration,
    expires_at: DateTime<Utc>,
}

/// Evicts each entry after its own TTL.
struct EntryExpiry;

impl Expiry<String, Entry> for EntryExpiry {
    fn expire_after_create(&self, _key: &String, value: &Entry, _created_at: Instant) -> Option<Duration> {
        Some(value.ttl)
    }

    fn expire_after_update(
        &self,
        _key: &String,
        value: &Entry,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        Some(value.ttl)
    }
}

/// In-memory key-value provider using moka.
///
/// moka evicts entries on wall-clock time. Reads additionally compare each
/// entry's deadline against the injected [`Clock`], so a manual clock can
/// expire entries in tests.
#[derive(Debug, Clone)]
pub struct MemoryCacheProvider {
    cache: Cache<String, Entry>,
    clock: Arc<dyn Clock>,
}

impl MemoryCacheProvider {
    /// Create a new in-memory store from configuration.
    ///
    /// With no `max_capacity` the store is unbounded and entries leave only
    /// through expiry or deletion. A bound makes moka evict by size, which
    /// can drop sessions before their TTL.
    pub fn new(config: &MemoryCacheConfig, clock: Arc<dyn Clock>) -> Self {
        let mut builder = Cache::builder().expire_after(EntryExpiry);
        if let Some(capacity) = config.max_capacity {
            builder = builder.max_capacity(capacity);
        }
        let cache = builder.build();

        Self { cache, clock }
    }

    fn entry(&self, value: &str, ttl: Duration) -> Entry {
        let ttl_chrono = chrono::Duration::from_std(ttl).unwrap_or(chrono::Duration::MAX);
        Entry {
            value: value.to_string(),
            ttl,
            expires_at: self
                .clock
                .now()
                .checked_add_signed(ttl_chrono)
                .unwrap_or(DateTime::<Utc>::MAX_UTC),
        }
    }

    fn is_live(&self, entry: &Entry) -> bool {
        self.clock.now() < entry.expires_at
    }

    /// Return the live entry for `key`, dropping it if its deadline passed.
    async fn live_entry(&self, key: &str) -> Option<Entry> {
        let entry = self.cache.get(key).await?;
        if self.is_live(&entry) {
            return Some(entry);
        }
        self.cache.invalidate(key).await;
        debug!(key, "Dropped expired entry");
        None
    }
}

#[async_trait]
impl CacheProvider for MemoryCacheProvider {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.live_entry(key).await.map(|e| e.value))
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> AppResult<()> {
        self.cache
            .insert(key.to_string(), self.entry(value, ttl))
            .await;
        Ok(())
    }

    async fn set_nx(&self, key: &str, value: &str, ttl: Duration) -> AppResult<bool> {
        // Clears a stale entry so the insert below can claim the key.
        self.live_entry(key).await;

        let entry = self.entry(value, ttl);
        let result = self
            .cache
            .entry(key.to_string())
            .or_insert_with(async move { entry })
            .await;
        Ok(result.is_fresh())
    }

    async fn delete(&self, key: &str) -> AppResult<bool> {
        Ok(self
            .cache
            .remove(key)
            .await
            .is_some_and(|entry| self.is_live(&entry)))
    }

    async fn exists(&self, key: &str) -> AppResult<bool> {
        Ok(self.live_entry(key).await.is_some())
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}
