//! Router for the cache and counter endpoints

use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::LatencyUnit;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

use kv_memo::Producer;

use crate::handlers::{KvMemoState, get_cached, pageview};

/// Path serving the memoized value as `{"status": "nice", "data": ...}`.
pub const CACHED_ROUTE: &str = "/get";

/// Path bumping the view counter, answering `{"status": "nice", "views": ...}`.
pub const PAGEVIEW_ROUTE: &str = "/pageview";

/// Create a router exposing the cached value and the view counter
///
/// The endpoints will be available at:
/// - `GET /get`
/// - `GET /pageview`
pub fn kv_memo_router<P>(state: Arc<KvMemoState<P>>) -> Router
where
    P: Producer<()> + 'static,
{
    Router::new()
        .route(CACHED_ROUTE, get(get_cached::<P>))
        .route(PAGEVIEW_ROUTE, get(pageview::<P>))
        .with_state(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .latency_unit(LatencyUnit::Millis),
                ),
        )
}
