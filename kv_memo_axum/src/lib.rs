//! kv_memo_axum - HTTP endpoints for the kv_memo cache-aside wrapper and view counter

mod error;
mod handlers;
mod router;

pub use error::IntoResponseError;
pub use handlers::KvMemoState;
pub use router::{CACHED_ROUTE, PAGEVIEW_ROUTE, kv_memo_router};

// Re-export the core types so applications need only this crate
pub use kv_memo::{
    CacheAside, CacheError, InMemoryKvStore, KvStore, Producer, RedisKvStore, StorageError,
    StoreConfig, ViewCounter, init_store,
};
