//! Repository for the `project_progress` table.

use atelier_core::types::DbId;
use sqlx::PgPool;

use crate::models::project_progress::{CreateProjectProgress, ProjectProgress};

/// Column list shared across queries. `update` needs quoting.
const COLUMNS: &str = r#"id, project_id, "update", description, media_key, completed_at, created_at"#;

/// Provides append and listing for the progress journal.
pub struct ProjectProgressRepo;

impl ProjectProgressRepo {
    /// Append a progress update to the project routed by `slug`.
    ///
    /// The slug subselect folds the parent lookup into the insert itself, so
    /// there is no window between resolving the project and writing the row.
    ///
    /// Returns `None` when the slug does not resolve to a project.
    pub async fn create_for_slug(
        pool: &PgPool,
        slug: &str,
        input: &CreateProjectProgress,
    ) -> Result<Option<ProjectProgress>, sqlx::Error> {
        let query = format!(
            r#"INSERT INTO project_progress (project_id, "update", description, media_key, completed_at)
               SELECT id, $2, $3, $4, $5 FROM projects WHERE slug = $1
               RETURNING {COLUMNS}"#
        );
        sqlx::query_as::<_, ProjectProgress>(&query)
            .bind(slug)
            .bind(&input.update)
            .bind(&input.description)
            .bind(&input.media_key)
            .bind(input.completed_at)
            .fetch_optional(pool)
            .await
    }

    /// List progress updates for the project routed by `slug`, newest
    /// completion first. Ordering here is the authoritative contract; no
    /// consumer re-sorts.
    ///
    /// Returns `None` when the slug does not resolve to a project (distinct
    /// from `Some` of an empty list for a project with no updates yet).
    pub async fn list_for_slug(
        pool: &PgPool,
        slug: &str,
    ) -> Result<Option<Vec<ProjectProgress>>, sqlx::Error> {
        let project_id: Option<(DbId,)> = sqlx::query_as("SELECT id FROM projects WHERE slug = $1")
            .bind(slug)
            .fetch_optional(pool)
            .await?;

        let Some((project_id,)) = project_id else {
            return Ok(None);
        };

        let query = format!(
            "SELECT {COLUMNS} FROM project_progress
             WHERE project_id = $1
             ORDER BY completed_at DESC"
        );
        let updates = sqlx::query_as::<_, ProjectProgress>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await?;
        Ok(Some(updates))
    }
}
