use async_trait::async_trait;
use redis::AsyncCommands;
use redis::aio::ConnectionManager;
use std::future::Future;
use std::time::Duration;
use tokio::sync::OnceCell;

use super::errors::StorageError;
use super::types::{KvStore, RedisKvStore, namespaced_key, validate_ttl};

impl RedisKvStore {
    pub fn new(client: redis::Client, key_prefix: impl Into<String>) -> Self {
        Self {
            client,
            key_prefix: key_prefix.into(),
            timeout: None,
            conn: OnceCell::new(),
        }
    }

    /// Open a client for `url` without connecting yet.
    pub fn open(url: &str, key_prefix: impl Into<String>) -> Result<Self, StorageError> {
        let client = redis::Client::open(url)
            .map_err(|e| StorageError::Config(format!("Invalid Redis URL {url}: {e}")))?;
        Ok(Self::new(client, key_prefix))
    }

    /// Bound every round-trip, including connecting, to `timeout`.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    fn make_key(&self, key: &str) -> String {
        namespaced_key(&self.key_prefix, key)
    }

    /// The connection manager is shared by every request and reconnects on its own
    /// after the server comes back.
    async fn connection(&self) -> Result<ConnectionManager, StorageError> {
        let conn = self
            .conn
            .get_or_try_init(|| ConnectionManager::new(self.client.clone()))
            .await?;
        Ok(conn.clone())
    }

    async fn bounded<T, F>(&self, op: &'static str, fut: F) -> Result<T, StorageError>
    where
        F: Future<Output = Result<T, StorageError>> + Send,
    {
        match self.timeout {
            Some(limit) => tokio::time::timeout(limit, fut).await.map_err(|_| {
                tracing::warn!("Redis {} timed out after {:?}", op, limit);
                StorageError::Unavailable(format!("{op} timed out after {}ms", limit.as_millis()))
            })?,
            None => fut.await,
        }
    }
}

#[async_trait]
impl KvStore for RedisKvStore {
    async fn init(&self) -> Result<(), StorageError> {
        // Verify the connection works
        self.bounded("connect", async {
            let _conn = self.connection().await?;
            Ok(())
        })
        .await
    }

    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let key = self.make_key(key);
        self.bounded("GET", async {
            let mut conn = self.connection().await?;
            let value: Option<String> = conn.get(&key).await?;
            Ok(value)
        })
        .await
    }

    async fn set_with_expiry(
        &self,
        key: &str,
        value: &str,
        ttl_secs: u64,
    ) -> Result<(), StorageError> {
        validate_ttl(ttl_secs)?;
        let key = self.make_key(key);
        self.bounded("SETEX", async {
            let mut conn = self.connection().await?;
            let _: () = conn.set_ex(&key, value, ttl_secs).await?;
            Ok(())
        })
        .await
    }

    async fn incr(&self, key: &str) -> Result<i64, StorageError> {
        let key = self.make_key(key);
        self.bounded("INCR", async {
            let mut conn = self.connection().await?;
            let value: i64 = conn.incr(&key, 1).await?;
            Ok(value)
        })
        .await
    }
}
