//! Environment-driven settings for the key-value store

use std::sync::LazyLock;

/// Backend to use: "memory" or "redis".
/// Default: "memory"
pub static KV_STORE_TYPE: LazyLock<String> =
    LazyLock::new(|| std::env::var("KV_STORE_TYPE").unwrap_or_else(|_| "memory".to_string()));

/// Connection URL for the redis backend.
/// Default: "redis://127.0.0.1:6379"
pub static KV_STORE_URL: LazyLock<String> = LazyLock::new(|| {
    std::env::var("KV_STORE_URL").unwrap_or_else(|_| "redis://127.0.0.1:6379".to_string())
});

/// Namespace prepended to every key as "<prefix>:<key>". Empty means keys go out verbatim.
pub static KV_KEY_PREFIX: LazyLock<String> =
    LazyLock::new(|| std::env::var("KV_KEY_PREFIX").unwrap_or_default());

/// Optional round-trip budget for store operations, in milliseconds.
pub static KV_STORE_TIMEOUT_MS: LazyLock<Option<String>> =
    LazyLock::new(|| std::env::var("KV_STORE_TIMEOUT_MS").ok());
