//! Build-guide details: 1:1 with a project, replaced wholesale on write.

use atelier_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidationError};

/// Build difficulty (`difficulty` enum in the database).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "difficulty", rename_all = "lowercase")]
pub enum Difficulty {
    Novice,
    Intermediate,
    Cracked,
}

/// Closed set accepted for the `difficulty` field on input.
pub const DIFFICULTIES: &[&str] = &["novice", "intermediate", "cracked"];

/// A details row from the `project_details` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDetails {
    pub id: DbId,
    pub project_id: DbId,
    pub cost: String,
    pub build_time: String,
    pub difficulty: Difficulty,
    /// Rich-text guide content as markdown.
    pub write_up: String,
    pub youtube_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for replacing a project's details.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ReplaceProjectDetails {
    #[validate(length(min = 1, message = "cost must not be empty"))]
    pub cost: String,
    #[validate(length(min = 1, message = "buildTime must not be empty"))]
    pub build_time: String,
    #[validate(custom(function = validate_difficulty))]
    pub difficulty: String,
    #[validate(length(min = 1, message = "writeUp must not be empty"))]
    pub write_up: String,
    pub youtube_url: Option<String>,
}

fn validate_difficulty(difficulty: &str) -> Result<(), ValidationError> {
    if DIFFICULTIES.contains(&difficulty) {
        Ok(())
    } else {
        Err(ValidationError::new("difficulty")
            .with_message("must be one of: novice, intermediate, cracked".into()))
    }
}
