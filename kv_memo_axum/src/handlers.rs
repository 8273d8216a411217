use axum::{Json, extract::State};
use http::StatusCode;
use serde::Serialize;
use std::sync::Arc;

use kv_memo::{CacheAside, Producer, ViewCounter};

use crate::error::IntoResponseError;

/// Everything the endpoints need, built once at startup and shared by every request.
pub struct KvMemoState<P> {
    pub cache: CacheAside<P>,
    pub counter: ViewCounter,
    /// Name of the counter bumped by `GET /pageview`.
    pub counter_name: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct CachedResponse {
    status: &'static str,
    data: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct PageviewResponse {
    status: &'static str,
    views: i64,
}

pub(crate) async fn get_cached<P>(
    State(state): State<Arc<KvMemoState<P>>>,
) -> Result<Json<CachedResponse>, (StatusCode, String)>
where
    P: Producer<()> + 'static,
{
    let data = state.cache.invoke(()).await.into_response_error()?;

    Ok(Json(CachedResponse {
        status: "nice",
        data,
    }))
}

pub(crate) async fn pageview<P>(
    State(state): State<Arc<KvMemoState<P>>>,
) -> Result<Json<PageviewResponse>, (StatusCode, String)>
where
    P: Producer<()> + 'static,
{
    let views = state
        .counter
        .increment(&state.counter_name)
        .await
        .into_response_error()?;

    Ok(Json(PageviewResponse {
        status: "nice",
        views,
    }))
}
