//! Route definitions for the `/projects` resource.
//!
//! Details and progress updates are nested under the project's routing
//! slug rather than its internal id.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{project, project_details, project_progress};
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET  /                     -> list
/// POST /                     -> create
/// GET  /{slug}               -> get_by_slug
/// POST /{slug}/details       -> replace
/// GET  /{slug}/updates       -> list_by_project
/// POST /{slug}/updates       -> create
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::list).post(project::create))
        .route("/{slug}", get(project::get_by_slug))
        .route("/{slug}/details", post(project_details::replace))
        .route(
            "/{slug}/updates",
            get(project_progress::list_by_project).post(project_progress::create),
        )
}
