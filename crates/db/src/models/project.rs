//! Project entity model and DTOs.

use atelier_core::slug::SLUG_RE;
use atelier_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidationError};

use crate::models::project_details::ProjectDetails;

/// Project lifecycle status (`project_status` enum in the database).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "project_status", rename_all = "lowercase")]
pub enum ProjectStatus {
    Active,
    Hiatus,
    Complete,
}

/// Closed set accepted for the `status` field on input.
pub const PROJECT_STATUSES: &[&str] = &["active", "hiatus", "complete"];

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub media_key: Option<String>,
    pub slug: String,
    pub purchase_link: Option<String>,
    pub status: ProjectStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A project with its build-guide details nested under `details`.
///
/// `details` is `null` when no details row exists for the project.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectWithDetails {
    #[serde(flatten)]
    pub project: Project,
    pub details: Option<ProjectDetails>,
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProject {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    pub description: Option<String>,
    pub media_key: Option<String>,
    #[validate(regex(path = *SLUG_RE, message = "must be a lowercase hyphen-separated slug"))]
    pub slug: String,
    pub purchase_link: Option<String>,
    /// Defaults to `active` if omitted.
    #[validate(custom(function = validate_project_status))]
    pub status: Option<String>,
}

fn validate_project_status(status: &str) -> Result<(), ValidationError> {
    if PROJECT_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(ValidationError::new("project_status")
            .with_message("must be one of: active, hiatus, complete".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_project_accepts_valid_payload() {
        let input = CreateProject {
            title: "Hovercraft".into(),
            description: None,
            media_key: None,
            slug: "hovercraft-mk1".into(),
            purchase_link: None,
            status: Some("hiatus".into()),
        };
        assert!(input.validate().is_ok());
    }

    #[test]
    fn create_project_rejects_bad_slug_and_status() {
        let input = CreateProject {
            title: "Hovercraft".into(),
            description: None,
            media_key: None,
            slug: "Not A Slug".into(),
            purchase_link: None,
            status: Some("abandoned".into()),
        };
        let errors = input.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("slug"));
        assert!(errors.field_errors().contains_key("status"));
    }

    #[test]
    fn status_serializes_to_closed_set() {
        assert_eq!(
            serde_json::to_string(&ProjectStatus::Complete).unwrap(),
            "\"complete\""
        );
    }
}
