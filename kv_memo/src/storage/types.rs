use async_trait::async_trait;
use redis::aio::ConnectionManager;
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::{Mutex, OnceCell};
use tokio::time::Instant;

use super::errors::StorageError;

pub struct InMemoryKvStore {
    pub(super) key_prefix: String,
    pub(super) entries: Mutex<HashMap<String, MemoryEntry>>,
}

/// A value plus the instant it stops being visible, if it was written with a TTL.
#[derive(Debug, Clone)]
pub(super) struct MemoryEntry {
    pub(super) value: String,
    pub(super) expires_at: Option<Instant>,
}

pub struct RedisKvStore {
    pub(super) client: redis::Client,
    pub(super) key_prefix: String,
    pub(super) timeout: Option<Duration>,
    pub(super) conn: OnceCell<ConnectionManager>,
}

#[async_trait]
pub trait KvStore: Send + Sync + 'static {
    /// Initialize the store. Backends that talk to a server verify connectivity here.
    async fn init(&self) -> Result<(), StorageError>;

    /// Get the current value for `key`, `None` if absent or expired.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any existing entry, expiring after `ttl_secs`.
    async fn set_with_expiry(
        &self,
        key: &str,
        value: &str,
        ttl_secs: u64,
    ) -> Result<(), StorageError>;

    /// Atomically increment the integer at `key` by one and return the new value.
    /// An absent key counts as zero.
    async fn incr(&self, key: &str) -> Result<i64, StorageError>;
}

pub(super) fn namespaced_key(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}:{key}")
    }
}

pub(crate) fn validate_ttl(ttl_secs: u64) -> Result<(), StorageError> {
    if ttl_secs == 0 {
        return Err(StorageError::InvalidInput(
            "TTL must be at least one second".to_string(),
        ));
    }
    Ok(())
}
