//! Settings for the demo server, read from the environment

use std::sync::LazyLock;
use std::time::Duration;

/// Port the HTTP server listens on.
/// Default: 3000
pub(crate) static PORT: LazyLock<u16> = LazyLock::new(|| parse_env("PORT", 3000));

/// Key the slow query result is cached under.
/// Default: "expensive_call"
pub(crate) static CACHE_KEY: LazyLock<String> = LazyLock::new(|| {
    std::env::var("CACHE_KEY").unwrap_or_else(|_| "expensive_call".to_string())
});

/// Seconds a cached result stays fresh.
/// Default: 10
pub(crate) static CACHE_TTL_SECS: LazyLock<u64> =
    LazyLock::new(|| parse_env("CACHE_TTL_SECS", 10));

/// Collapse concurrent cache misses into one query run.
/// Default: false
pub(crate) static CACHE_SINGLE_FLIGHT: LazyLock<bool> = LazyLock::new(|| {
    std::env::var("CACHE_SINGLE_FLIGHT")
        .map(|val| parse_flag(&val))
        .unwrap_or(false)
});

/// Name of the counter behind `/pageview`.
/// Default: "pageviews"
pub(crate) static PAGEVIEW_COUNTER: LazyLock<String> = LazyLock::new(|| {
    std::env::var("PAGEVIEW_COUNTER").unwrap_or_else(|_| "pageviews".to_string())
});

/// How long the simulated slow query takes.
/// Default: 5000ms
pub(crate) static SLOW_QUERY_DELAY: LazyLock<Duration> =
    LazyLock::new(|| Duration::from_millis(parse_env("SLOW_QUERY_DELAY_MS", 5000)));

/// Directory served for every path the API does not handle.
/// Default: "./static"
pub(crate) static STATIC_DIR: LazyLock<String> =
    LazyLock::new(|| std::env::var("STATIC_DIR").unwrap_or_else(|_| "./static".to_string()));

fn parse_env<T>(name: &str, default: T) -> T
where
    T: std::str::FromStr + std::fmt::Display,
{
    match std::env::var(name) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("Ignoring invalid {}={:?}, using {}", name, raw, default);
            default
        }),
        Err(_) => default,
    }
}

fn parse_flag(val: &str) -> bool {
    matches!(val.to_lowercase().as_str(), "1" | "true" | "yes" | "on")
}
