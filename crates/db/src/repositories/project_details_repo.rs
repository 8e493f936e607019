//! Repository for the `project_details` table.

use atelier_core::types::DbId;
use sqlx::PgPool;

use crate::models::project_details::{ProjectDetails, ReplaceProjectDetails};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, project_id, cost, build_time, difficulty, write_up, youtube_url, created_at, updated_at";

/// Provides the replace-wholesale write path and reads for build guides.
pub struct ProjectDetailsRepo;

impl ProjectDetailsRepo {
    /// Replace the details row for the project routed by `slug`.
    ///
    /// One atomic statement: the slug subselect resolves the parent and the
    /// `ON CONFLICT (project_id)` upsert replaces any existing row, so two
    /// concurrent replaces can never leave zero or duplicate rows.
    ///
    /// Returns `None` when the slug does not resolve to a project.
    pub async fn replace_for_slug(
        pool: &PgPool,
        slug: &str,
        input: &ReplaceProjectDetails,
    ) -> Result<Option<ProjectDetails>, sqlx::Error> {
        let query = format!(
            "INSERT INTO project_details (project_id, cost, build_time, difficulty, write_up, youtube_url)
             SELECT id, $2, $3, $4::difficulty, $5, $6 FROM projects WHERE slug = $1
             ON CONFLICT (project_id) DO UPDATE SET
                cost = EXCLUDED.cost,
                build_time = EXCLUDED.build_time,
                difficulty = EXCLUDED.difficulty,
                write_up = EXCLUDED.write_up,
                youtube_url = EXCLUDED.youtube_url,
                updated_at = now()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProjectDetails>(&query)
            .bind(slug)
            .bind(&input.cost)
            .bind(&input.build_time)
            .bind(&input.difficulty)
            .bind(&input.write_up)
            .bind(&input.youtube_url)
            .fetch_optional(pool)
            .await
    }

    /// Find the details row for a project, if one exists.
    pub async fn find_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Option<ProjectDetails>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM project_details WHERE project_id = $1");
        sqlx::query_as::<_, ProjectDetails>(&query)
            .bind(project_id)
            .fetch_optional(pool)
            .await
    }
}
