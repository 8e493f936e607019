//! Repository for the `books` table.

use atelier_core::types::DbId;
use sqlx::PgPool;

use crate::models::book::{Book, CreateBook, UpdateBook};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, title, author, goodreads_url, cover_url, status, learning, created_at, updated_at";

/// Provides CRUD operations for the reading list.
pub struct BookRepo;

impl BookRepo {
    /// Insert a new book, returning the created row.
    ///
    /// If `status` is `None` in the input, defaults to `to_read`.
    pub async fn create(pool: &PgPool, input: &CreateBook) -> Result<Book, sqlx::Error> {
        let query = format!(
            "INSERT INTO books (title, author, goodreads_url, cover_url, status, learning)
             VALUES ($1, $2, $3, $4, COALESCE($5::book_status, 'to_read'), $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Book>(&query)
            .bind(&input.title)
            .bind(&input.author)
            .bind(&input.goodreads_url)
            .bind(&input.cover_url)
            .bind(&input.status)
            .bind(&input.learning)
            .fetch_one(pool)
            .await
    }

    /// List all books ordered by most recently added first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Book>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM books ORDER BY created_at DESC");
        sqlx::query_as::<_, Book>(&query).fetch_all(pool).await
    }

    /// Find a book by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Book>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM books WHERE id = $1");
        sqlx::query_as::<_, Book>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Update a book. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateBook,
    ) -> Result<Option<Book>, sqlx::Error> {
        let query = format!(
            "UPDATE books SET
                title = COALESCE($2, title),
                author = COALESCE($3, author),
                goodreads_url = COALESCE($4, goodreads_url),
                cover_url = COALESCE($5, cover_url),
                status = COALESCE($6::book_status, status),
                learning = COALESCE($7, learning),
                updated_at = now()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Book>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.author)
            .bind(&input.goodreads_url)
            .bind(&input.cover_url)
            .bind(&input.status)
            .bind(&input.learning)
            .fetch_optional(pool)
            .await
    }
}
