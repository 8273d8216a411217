use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;

use super::errors::StorageError;
use super::types::{InMemoryKvStore, KvStore, MemoryEntry, namespaced_key, validate_ttl};

impl InMemoryKvStore {
    pub fn new() -> Self {
        Self::with_prefix("")
    }

    pub fn with_prefix(key_prefix: impl Into<String>) -> Self {
        tracing::info!("Creating new in-memory key-value store");
        Self {
            key_prefix: key_prefix.into(),
            entries: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryKvStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryEntry {
    fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|at| at <= now)
    }
}

#[async_trait]
impl KvStore for InMemoryKvStore {
    async fn init(&self) -> Result<(), StorageError> {
        Ok(()) // Nothing to initialize for in-memory store
    }

    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let key = namespaced_key(&self.key_prefix, key);
        let mut entries = self.entries.lock().await;

        match entries.get(&key) {
            Some(entry) if entry.is_expired(Instant::now()) => {
                entries.remove(&key);
                Ok(None)
            }
            Some(entry) => Ok(Some(entry.value.clone())),
            None => Ok(None),
        }
    }

    async fn set_with_expiry(
        &self,
        key: &str,
        value: &str,
        ttl_secs: u64,
    ) -> Result<(), StorageError> {
        validate_ttl(ttl_secs)?;
        let key = namespaced_key(&self.key_prefix, key);
        let entry = MemoryEntry {
            value: value.to_string(),
            expires_at: Some(Instant::now() + Duration::from_secs(ttl_secs)),
        };
        self.entries.lock().await.insert(key, entry);
        Ok(())
    }

    async fn incr(&self, key: &str) -> Result<i64, StorageError> {
        let key = namespaced_key(&self.key_prefix, key);
        let mut entries = self.entries.lock().await;
        let now = Instant::now();

        // Like Redis INCR, an existing TTL survives the increment.
        let (current, expires_at) = match entries.get(&key) {
            Some(entry) if !entry.is_expired(now) => {
                let current = entry.value.parse::<i64>().map_err(|_| {
                    StorageError::Command("value is not an integer or out of range".to_string())
                })?;
                (current, entry.expires_at)
            }
            _ => (0, None),
        };

        let next = current.checked_add(1).ok_or_else(|| {
            StorageError::Command("increment or decrement would overflow".to_string())
        })?;

        entries.insert(
            key,
            MemoryEntry {
                value: next.to_string(),
                expires_at,
            },
        );
        Ok(next)
    }
}
