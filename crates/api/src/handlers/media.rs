//! Media proxy: streams bucket objects to the browser.

use atelier_core::error::CoreError;
use axum::body::Body;
use axum::extract::{Query, State};
use axum::http::header::{CACHE_CONTROL, CONTENT_TYPE};
use axum::response::Response;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Proxied objects are immutable (keys are never rewritten), so clients may
/// cache for a year.
const CACHE_POLICY: &str = "public, max-age=31536000";

const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// Query parameters for media fetches (`?key=`).
#[derive(Debug, Deserialize)]
pub struct MediaParams {
    pub key: Option<String>,
}

/// GET /media
///
/// Streams the object stored under `key` with its recorded content type.
/// 400 when `key` is missing; 404 when the object is missing or the fetch
/// fails (detail logged, never exposed).
pub async fn get(
    State(state): State<AppState>,
    Query(params): Query<MediaParams>,
) -> AppResult<Response> {
    let key = params
        .key
        .filter(|k| !k.is_empty())
        .ok_or_else(|| AppError::BadRequest("Key is required".to_string()))?;

    let object = state.store.get(&key).await?;

    let content_type = object
        .content_type
        .unwrap_or_else(|| FALLBACK_CONTENT_TYPE.to_string());

    let response = Response::builder()
        .header(CONTENT_TYPE, content_type)
        .header(CACHE_CONTROL, CACHE_POLICY)
        .body(Body::from_stream(object.body))
        .map_err(|e| AppError::Core(CoreError::Internal(e.to_string())))?;
    Ok(response)
}
