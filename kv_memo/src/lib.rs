//! kv_memo - cache-aside memoization and atomic counters over a key-value store
//!
//! A [`CacheAside`] wraps an expensive asynchronous operation behind one cache key
//! with a time-to-live, and a [`ViewCounter`] increments named counters atomically.
//! Both sit on a [`KvStore`], backed by Redis or by process memory.

mod cache;
mod config;
mod counter;
mod storage;

#[cfg(test)]
mod test_utils;

pub use cache::{CacheAside, CacheError, Producer};
pub use config::{KV_KEY_PREFIX, KV_STORE_TIMEOUT_MS, KV_STORE_TYPE, KV_STORE_URL};
pub use counter::ViewCounter;
pub use storage::{InMemoryKvStore, KvStore, RedisKvStore, StorageError, StoreConfig, StoreType};

/// Build the store described by the `KV_*` environment variables and check it is reachable.
pub async fn init_store() -> Result<std::sync::Arc<dyn KvStore>, StorageError> {
    StoreConfig::from_env()?.init_store().await
}
