//! Route definitions for the `/books` resource.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::book;
use crate::state::AppState;

/// Routes mounted at `/books`.
///
/// ```text
/// GET   /        -> list
/// POST  /        -> create
/// GET   /lookup  -> lookup (?isbn=)
/// PATCH /{id}    -> update
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(book::list).post(book::create))
        .route("/lookup", get(book::lookup))
        .route("/{id}", patch(book::update))
}
