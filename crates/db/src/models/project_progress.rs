//! Progress updates: the append-only journal attached to a project.

use atelier_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A progress row from the `project_progress` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectProgress {
    pub id: DbId,
    pub project_id: DbId,
    /// Short title of the update.
    pub update: String,
    pub description: String,
    pub media_key: Option<String>,
    /// User-supplied logical date; listing order key.
    pub completed_at: Timestamp,
    pub created_at: Timestamp,
}

/// DTO for appending a progress update.
///
/// Assembled by the handler from `multipart/form-data` fields rather than
/// deserialized from JSON.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectProgress {
    #[validate(length(min = 1, message = "update must not be empty"))]
    pub update: String,
    #[validate(length(min = 1, message = "description must not be empty"))]
    pub description: String,
    pub media_key: Option<String>,
    pub completed_at: Timestamp,
}
