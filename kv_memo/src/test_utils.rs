//! Test helpers shared by the unit tests in this crate.

use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use crate::cache::Producer;
use crate::storage::{KvStore, StorageError};

/// A store whose server is never reachable.
pub struct FailingKvStore;

#[async_trait]
impl KvStore for FailingKvStore {
    async fn init(&self) -> Result<(), StorageError> {
        Err(refused())
    }

    async fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(refused())
    }

    async fn set_with_expiry(
        &self,
        _key: &str,
        _value: &str,
        _ttl_secs: u64,
    ) -> Result<(), StorageError> {
        Err(refused())
    }

    async fn incr(&self, _key: &str) -> Result<i64, StorageError> {
        Err(refused())
    }
}

/// A store that reads as empty but loses its connection on every write.
pub struct WriteFailingKvStore;

#[async_trait]
impl KvStore for WriteFailingKvStore {
    async fn init(&self) -> Result<(), StorageError> {
        Ok(())
    }

    async fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    async fn set_with_expiry(
        &self,
        _key: &str,
        _value: &str,
        _ttl_secs: u64,
    ) -> Result<(), StorageError> {
        Err(refused())
    }

    async fn incr(&self, _key: &str) -> Result<i64, StorageError> {
        Err(refused())
    }
}

fn refused() -> StorageError {
    StorageError::Unavailable("Connection refused (os error 111)".to_string())
}

#[derive(Debug, thiserror::Error)]
#[error("producer failed: {0}")]
pub struct ProducerFailure(pub &'static str);

/// Producer returning a fixed value and counting how often it ran.
pub struct CountingProducer {
    value: String,
    delay: Option<Duration>,
    calls: Arc<AtomicUsize>,
}

impl CountingProducer {
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
            delay: None,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

impl Producer<()> for CountingProducer {
    type Error = ProducerFailure;

    async fn produce(&self, _args: ()) -> Result<String, ProducerFailure> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        Ok(self.value.clone())
    }
}
