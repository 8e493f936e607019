//! Handlers for the `/projects/{slug}/updates` resource.
//!
//! Progress updates are appended from a `multipart/form-data` form rather
//! than JSON, so required-field and date-format checks happen here while
//! assembling the DTO.

use axum::extract::{Multipart, Path, State};
use axum::Json;
use chrono::{DateTime, NaiveDateTime, Utc};
use validator::{Validate, ValidationError, ValidationErrors};

use atelier_core::types::Timestamp;
use atelier_db::models::project_progress::{CreateProjectProgress, ProjectProgress};
use atelier_db::repositories::ProjectProgressRepo;

use crate::error::{not_found, AppError, AppResult};
use crate::handlers::ensure_mutations_allowed;
use crate::state::AppState;

/// GET /api/v1/projects/{slug}/updates
///
/// Lists progress updates newest-completion-first. The ordering comes from
/// the repository; it is the authoritative contract.
pub async fn list_by_project(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<Vec<ProjectProgress>>> {
    let updates = ProjectProgressRepo::list_for_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| not_found("Project", &slug))?;
    Ok(Json(updates))
}

/// POST /api/v1/projects/{slug}/updates
///
/// Accepts a multipart form with required `update`, `description` and
/// `completedAt` fields and an optional `media` key.
pub async fn create(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    mut multipart: Multipart,
) -> AppResult<Json<ProjectProgress>> {
    ensure_mutations_allowed(&state)?;

    let mut update: Option<String> = None;
    let mut description: Option<String> = None;
    let mut media_key: Option<String> = None;
    let mut completed_at_raw: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        let text = field
            .text()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        match name.as_str() {
            "update" => update = Some(text),
            "description" => description = Some(text),
            "media" => media_key = Some(text).filter(|t| !t.is_empty()),
            "completedAt" => completed_at_raw = Some(text),
            _ => {} // ignore unknown fields
        }
    }

    let mut errors = ValidationErrors::new();
    if update.is_none() {
        errors.add("update".into(), required("update"));
    }
    if description.is_none() {
        errors.add("description".into(), required("description"));
    }
    let completed_at = match completed_at_raw.as_deref() {
        None => {
            errors.add("completedAt".into(), required("completedAt"));
            None
        }
        Some(raw) => {
            let parsed = parse_completed_at(raw);
            if parsed.is_none() {
                errors.add(
                    "completedAt".into(),
                    ValidationError::new("format")
                        .with_message("must be an RFC 3339 or YYYY-MM-DDTHH:MM timestamp".into()),
                );
            }
            parsed
        }
    };
    if !errors.is_empty() {
        return Err(errors.into());
    }

    // All three are present past this point.
    let (Some(update), Some(description), Some(completed_at)) = (update, description, completed_at)
    else {
        return Err(AppError::BadRequest("Malformed form payload".to_string()));
    };

    let input = CreateProjectProgress {
        update,
        description,
        media_key,
        completed_at,
    };
    input.validate()?;

    let progress = ProjectProgressRepo::create_for_slug(&state.pool, &slug, &input)
        .await?
        .ok_or_else(|| not_found("Project", &slug))?;
    Ok(Json(progress))
}

fn required(field: &'static str) -> ValidationError {
    ValidationError::new("required").with_message(format!("{field} is required").into())
}

/// Accepts RFC 3339 or the HTML `datetime-local` shape
/// (`YYYY-MM-DDTHH:MM[:SS]`, read as UTC).
fn parse_completed_at(raw: &str) -> Option<Timestamp> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn parses_rfc3339_timestamps() {
        let parsed = parse_completed_at("2026-03-14T09:26:53Z").unwrap();
        assert_eq!(parsed.hour(), 9);

        let offset = parse_completed_at("2026-03-14T09:26:53+02:00").unwrap();
        assert_eq!(offset.hour(), 7); // normalized to UTC
    }

    #[test]
    fn parses_datetime_local_shapes() {
        assert!(parse_completed_at("2026-03-14T09:26").is_some());
        assert!(parse_completed_at("2026-03-14T09:26:53").is_some());
    }

    #[test]
    fn rejects_malformed_timestamps() {
        assert!(parse_completed_at("last tuesday").is_none());
        assert!(parse_completed_at("2026-03-14").is_none());
        assert!(parse_completed_at("").is_none());
    }
}
