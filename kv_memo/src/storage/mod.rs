mod config;
mod errors;
mod memory;
mod redis;
mod types;

pub use config::{StoreConfig, StoreType};
pub use errors::StorageError;
pub use types::{InMemoryKvStore, KvStore, RedisKvStore};
pub(crate) use types::validate_ttl;
