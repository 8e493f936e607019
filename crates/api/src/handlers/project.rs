//! Handlers for the `/projects` resource.

use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use validator::Validate;

use atelier_db::models::project::{CreateProject, Project};
use atelier_db::repositories::ProjectRepo;

use crate::error::{not_found, AppResult};
use crate::handlers::ensure_mutations_allowed;
use crate::state::AppState;

/// Query parameters for single-project fetches (`?include=details`).
#[derive(Debug, Deserialize)]
pub struct ProjectGetParams {
    pub include: Option<String>,
}

/// GET /api/v1/projects
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Project>>> {
    let projects = ProjectRepo::list(&state.pool).await?;
    Ok(Json(projects))
}

/// GET /api/v1/projects/{slug}
///
/// With `?include=details`, the build-guide row is left-joined in and nested
/// under `details` (`null` when the project has no guide yet).
pub async fn get_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(params): Query<ProjectGetParams>,
) -> AppResult<Response> {
    if params.include.as_deref() == Some("details") {
        let project = ProjectRepo::find_by_slug_with_details(&state.pool, &slug)
            .await?
            .ok_or_else(|| not_found("Project", &slug))?;
        return Ok(Json(project).into_response());
    }

    let project = ProjectRepo::find_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| not_found("Project", &slug))?;
    Ok(Json(project).into_response())
}

/// POST /api/v1/projects
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProject>,
) -> AppResult<Json<Project>> {
    ensure_mutations_allowed(&state)?;
    input.validate()?;

    let project = ProjectRepo::create(&state.pool, &input).await?;
    Ok(Json(project))
}
