//! Helpers shared by the integration tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use kv_memo::{KvStore, RedisKvStore};

#[derive(Debug, thiserror::Error)]
#[error("slow query failed: {0}")]
pub struct QueryError(pub String);

/// Build a parameterless producer that returns `value` and bumps `calls` each run.
pub fn counting_producer(
    value: &'static str,
    calls: Arc<AtomicUsize>,
) -> impl Fn(()) -> std::future::Ready<Result<String, QueryError>> + Send + Sync {
    move |()| {
        calls.fetch_add(1, Ordering::SeqCst);
        std::future::ready(Ok(value.to_string()))
    }
}

/// A Redis store pointed at a port nothing listens on.
pub fn unreachable_redis() -> Arc<dyn KvStore> {
    let store = RedisKvStore::open("redis://127.0.0.1:1", "")
        .expect("valid URL")
        .with_timeout(Duration::from_secs(2));
    Arc::new(store)
}

/// URL of the Redis server used by the ignored live tests.
pub fn redis_url() -> String {
    std::env::var("KV_TEST_REDIS_URL").unwrap_or_else(|_| "redis://127.0.0.1:6379".to_string())
}

/// A key prefix no earlier run has used, since the store has no delete operation.
pub fn unique_prefix(test: &str) -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();
    format!("kv_memo_test:{test}:{}:{nanos}", std::process::id())
}
