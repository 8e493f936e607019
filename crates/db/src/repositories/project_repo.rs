//! Repository for the `projects` table.

use atelier_core::types::{DbId, Timestamp};
use sqlx::{FromRow, PgPool};

use crate::models::project::{CreateProject, Project, ProjectStatus, ProjectWithDetails};
use crate::models::project_details::{Difficulty, ProjectDetails};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, title, description, media_key, slug, purchase_link, status, created_at, updated_at";

/// Flat row shape for the project + details LEFT JOIN.
#[derive(FromRow)]
struct ProjectDetailsJoinRow {
    id: DbId,
    title: String,
    description: Option<String>,
    media_key: Option<String>,
    slug: String,
    purchase_link: Option<String>,
    status: ProjectStatus,
    created_at: Timestamp,
    updated_at: Timestamp,
    detail_id: Option<DbId>,
    cost: Option<String>,
    build_time: Option<String>,
    difficulty: Option<Difficulty>,
    write_up: Option<String>,
    youtube_url: Option<String>,
    detail_created_at: Option<Timestamp>,
    detail_updated_at: Option<Timestamp>,
}

/// Provides read and insert operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    ///
    /// If `status` is `None` in the input, defaults to `active`.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (title, description, media_key, slug, purchase_link, status)
             VALUES ($1, $2, $3, $4, $5, COALESCE($6::project_status, 'active'))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.media_key)
            .bind(&input.slug)
            .bind(&input.purchase_link)
            .bind(&input.status)
            .fetch_one(pool)
            .await
    }

    /// List all projects ordered by most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects ORDER BY created_at DESC");
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    /// Find a project by its routing slug.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE slug = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Find a project by slug with its details row left-joined in.
    ///
    /// `details` is `None` when the project has no build guide yet.
    pub async fn find_by_slug_with_details(
        pool: &PgPool,
        slug: &str,
    ) -> Result<Option<ProjectWithDetails>, sqlx::Error> {
        let row = sqlx::query_as::<_, ProjectDetailsJoinRow>(
            "SELECT p.id, p.title, p.description, p.media_key, p.slug, p.purchase_link,
                    p.status, p.created_at, p.updated_at,
                    d.id AS detail_id, d.cost, d.build_time, d.difficulty, d.write_up,
                    d.youtube_url, d.created_at AS detail_created_at,
                    d.updated_at AS detail_updated_at
             FROM projects p
             LEFT JOIN project_details d ON d.project_id = p.id
             WHERE p.slug = $1",
        )
        .bind(slug)
        .fetch_optional(pool)
        .await?;

        Ok(row.map(|row| {
            let details = match (
                row.detail_id,
                row.cost,
                row.build_time,
                row.difficulty,
                row.write_up,
                row.detail_created_at,
                row.detail_updated_at,
            ) {
                (
                    Some(id),
                    Some(cost),
                    Some(build_time),
                    Some(difficulty),
                    Some(write_up),
                    Some(created_at),
                    Some(updated_at),
                ) => Some(ProjectDetails {
                    id,
                    project_id: row.id,
                    cost,
                    build_time,
                    difficulty,
                    write_up,
                    youtube_url: row.youtube_url,
                    created_at,
                    updated_at,
                }),
                _ => None,
            };

            ProjectWithDetails {
                project: Project {
                    id: row.id,
                    title: row.title,
                    description: row.description,
                    media_key: row.media_key,
                    slug: row.slug,
                    purchase_link: row.purchase_link,
                    status: row.status,
                    created_at: row.created_at,
                    updated_at: row.updated_at,
                },
                details,
            }
        }))
    }
}
