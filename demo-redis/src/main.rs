use axum::Router;
use std::sync::Arc;
use tower_http::services::ServeDir;

use kv_memo_axum::{CacheAside, KvMemoState, ViewCounter, init_store, kv_memo_router};

mod config;
mod server;
mod slow_query;

use crate::{
    config::{
        CACHE_KEY, CACHE_SINGLE_FLIGHT, CACHE_TTL_SECS, PAGEVIEW_COUNTER, PORT,
        SLOW_QUERY_DELAY, STATIC_DIR,
    },
    server::{init_tracing, spawn_http_server},
    slow_query::SlowQuery,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    init_tracing(env!("CARGO_CRATE_NAME"));

    let store = init_store().await?;

    let mut cache = CacheAside::new(
        Arc::clone(&store),
        CACHE_KEY.as_str(),
        *CACHE_TTL_SECS,
        SlowQuery::new(*SLOW_QUERY_DELAY),
    )?;
    if *CACHE_SINGLE_FLIGHT {
        cache = cache.with_single_flight();
    }
    tracing::info!(
        "Caching slow query under key {} for {}s (single flight: {})",
        cache.key(),
        cache.ttl_secs(),
        cache.is_single_flight()
    );

    let state = KvMemoState {
        cache,
        counter: ViewCounter::new(store),
        counter_name: PAGEVIEW_COUNTER.clone(),
    };

    let app = Router::new()
        .merge(kv_memo_router(Arc::new(state)))
        .fallback_service(ServeDir::new(STATIC_DIR.as_str()));

    spawn_http_server(*PORT, app).await??;
    Ok(())
}
