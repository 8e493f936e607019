pub mod book;
pub mod health;
pub mod media;
pub mod project;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /projects                    list, create
/// /projects/{slug}             get (optionally ?include=details)
/// /projects/{slug}/details     replace (POST)
/// /projects/{slug}/updates     list, create (multipart)
///
/// /books                       list, create
/// /books/{id}                  patch
/// /books/lookup                metadata lookup (?isbn=)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/projects", project::router())
        .nest("/books", book::router())
}
