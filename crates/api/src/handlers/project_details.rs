//! Handlers for the `/projects/{slug}/details` resource.

use axum::extract::{Path, State};
use axum::Json;
use validator::Validate;

use atelier_db::models::project_details::{ProjectDetails, ReplaceProjectDetails};
use atelier_db::repositories::ProjectDetailsRepo;

use crate::error::{not_found, AppResult};
use crate::handlers::ensure_mutations_allowed;
use crate::state::AppState;

/// POST /api/v1/projects/{slug}/details
///
/// Replaces the build guide wholesale. The repository performs the parent
/// lookup and the upsert as one atomic statement, so a project never ends up
/// with zero or duplicate details rows.
pub async fn replace(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(input): Json<ReplaceProjectDetails>,
) -> AppResult<Json<ProjectDetails>> {
    ensure_mutations_allowed(&state)?;
    input.validate()?;

    let details = ProjectDetailsRepo::replace_for_slug(&state.pool, &slug, &input)
        .await?
        .ok_or_else(|| not_found("Project", &slug))?;
    Ok(Json(details))
}
