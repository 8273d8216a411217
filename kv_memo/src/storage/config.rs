use std::sync::Arc;
use std::time::Duration;

use crate::config::{KV_KEY_PREFIX, KV_STORE_TIMEOUT_MS, KV_STORE_TYPE, KV_STORE_URL};

use super::errors::StorageError;
use super::types::{InMemoryKvStore, KvStore, RedisKvStore};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoreType {
    Memory,
    Redis { url: String },
}

/// Validated settings for building a [`KvStore`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreConfig {
    pub store_type: StoreType,
    pub key_prefix: String,
    pub timeout: Option<Duration>,
}

impl StoreConfig {
    /// Read `KV_STORE_TYPE`, `KV_STORE_URL`, `KV_KEY_PREFIX` and `KV_STORE_TIMEOUT_MS`.
    pub fn from_env() -> Result<Self, StorageError> {
        Self::parse(
            KV_STORE_TYPE.as_str(),
            KV_STORE_URL.as_str(),
            KV_KEY_PREFIX.as_str(),
            KV_STORE_TIMEOUT_MS.as_deref(),
        )
    }

    pub fn parse(
        store_type: &str,
        url: &str,
        key_prefix: &str,
        timeout_ms: Option<&str>,
    ) -> Result<Self, StorageError> {
        let store_type = match store_type {
            "memory" => StoreType::Memory,
            "redis" => {
                if url.is_empty() {
                    return Err(StorageError::Config("Redis requires a URL".into()));
                }
                StoreType::Redis {
                    url: url.to_string(),
                }
            }
            t => {
                return Err(StorageError::Config(format!(
                    "Unsupported store type: {t}. Supported types are 'memory' and 'redis'"
                )));
            }
        };

        let timeout = match timeout_ms {
            None => None,
            Some(ms) => {
                let ms = ms.trim().parse::<u64>().map_err(|e| {
                    StorageError::Config(format!("Invalid KV_STORE_TIMEOUT_MS {ms:?}: {e}"))
                })?;
                (ms > 0).then(|| Duration::from_millis(ms))
            }
        };

        Ok(Self {
            store_type,
            key_prefix: key_prefix.to_string(),
            timeout,
        })
    }

    /// Build the configured store and verify it is reachable.
    pub async fn init_store(&self) -> Result<Arc<dyn KvStore>, StorageError> {
        let store: Arc<dyn KvStore> = match &self.store_type {
            StoreType::Memory => Arc::new(InMemoryKvStore::with_prefix(self.key_prefix.as_str())),
            StoreType::Redis { url } => {
                let mut store = RedisKvStore::open(url, self.key_prefix.as_str())?;
                if let Some(timeout) = self.timeout {
                    store = store.with_timeout(timeout);
                }
                Arc::new(store)
            }
        };

        tracing::info!(
            "Initializing key-value store: type={:?}, prefix={:?}",
            self.store_type,
            self.key_prefix
        );

        if let Err(e) = store.init().await {
            tracing::error!("Failed to connect to key-value store: {}", e);
            return Err(e);
        }

        tracing::info!("Connected to key-value store");
        Ok(store)
    }
}
