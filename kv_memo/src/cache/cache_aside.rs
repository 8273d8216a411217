use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::time::Instant;

use crate::storage::{KvStore, StorageError, validate_ttl};

use super::errors::CacheError;
use super::producer::Producer;

/// Cache-aside memoization of one expensive operation under one key.
///
/// The key, TTL and producer are fixed at construction and never change, so a
/// single instance can be shared by reference across concurrent requests.
/// Expiry is left to the store: a hit is returned as stored, a miss runs the
/// producer and writes its result back with the configured TTL.
///
/// Concurrent misses each run the producer and the last write wins, unless
/// [`with_single_flight`](Self::with_single_flight) is enabled.
pub struct CacheAside<P> {
    store: Arc<dyn KvStore>,
    key: String,
    ttl_secs: u64,
    producer: P,
    miss_lock: Option<Mutex<()>>,
}

impl<P> CacheAside<P> {
    pub fn new(
        store: Arc<dyn KvStore>,
        key: impl Into<String>,
        ttl_secs: u64,
        producer: P,
    ) -> Result<Self, StorageError> {
        let key = key.into();
        if key.is_empty() {
            return Err(StorageError::InvalidInput("Cache key must not be empty".to_string()));
        }
        validate_ttl(ttl_secs)?;

        Ok(Self {
            store,
            key,
            ttl_secs,
            producer,
            miss_lock: None,
        })
    }

    /// Collapse concurrent misses in this process into one producer run.
    pub fn with_single_flight(mut self) -> Self {
        self.miss_lock = Some(Mutex::new(()));
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn ttl_secs(&self) -> u64 {
        self.ttl_secs
    }

    pub fn is_single_flight(&self) -> bool {
        self.miss_lock.is_some()
    }

    /// Return the cached value, or run the producer with `args` and cache its result.
    ///
    /// A store failure on read is returned as [`CacheError::Store`]; the producer is
    /// not run in that case. A producer failure is returned as
    /// [`CacheError::Producer`] and nothing is written. A failed write after a
    /// successful producer run is a [`CacheError::Store`]; the computed value is dropped.
    pub async fn invoke<A>(&self, args: A) -> Result<String, CacheError<P::Error>>
    where
        P: Producer<A>,
        A: Send,
    {
        if let Some(value) = self.lookup().await? {
            return Ok(value);
        }

        let Some(lock) = &self.miss_lock else {
            return self.compute_and_store(args).await;
        };

        let _guard = lock.lock().await;
        // Another caller may have filled the entry while we waited.
        if let Some(value) = self.lookup().await? {
            return Ok(value);
        }
        self.compute_and_store(args).await
    }

    async fn lookup(&self) -> Result<Option<String>, StorageError> {
        let cached = self.store.get(&self.key).await.inspect_err(|e| {
            tracing::error!("Failed to read cache key {}: {}", self.key, e);
        })?;

        if cached.is_some() {
            tracing::debug!("Cache hit for key {}", self.key);
        }
        Ok(cached)
    }

    async fn compute_and_store<A>(&self, args: A) -> Result<String, CacheError<P::Error>>
    where
        P: Producer<A>,
        A: Send,
    {
        tracing::info!("Cache miss for key {}, running producer", self.key);
        let started = Instant::now();

        let value = match self.producer.produce(args).await {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("Producer for key {} failed: {}", self.key, e);
                return Err(CacheError::Producer(e));
            }
        };

        tracing::info!(
            "Producer for key {} finished in {:?}",
            self.key,
            started.elapsed()
        );

        self.store
            .set_with_expiry(&self.key, &value, self.ttl_secs)
            .await
            .inspect_err(|e| {
                tracing::error!("Failed to write cache key {}: {}", self.key, e);
            })?;

        Ok(value)
    }
}
