//! Reading-list entity model and DTOs.

use atelier_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidationError};

/// Reading status (`book_status` enum in the database).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "book_status", rename_all = "snake_case")]
pub enum BookStatus {
    ToRead,
    Reading,
    Read,
}

/// Closed set accepted for the `status` field on input.
pub const BOOK_STATUSES: &[&str] = &["to_read", "reading", "read"];

/// A book row from the `books` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: DbId,
    pub title: String,
    pub author: String,
    pub goodreads_url: String,
    pub cover_url: Option<String>,
    pub status: BookStatus,
    /// What the reader took away from the book.
    pub learning: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for adding a book to the reading list.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBook {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "author must not be empty"))]
    pub author: String,
    #[validate(length(min = 1, message = "goodreadsUrl must not be empty"))]
    pub goodreads_url: String,
    pub cover_url: Option<String>,
    /// Defaults to `to_read` if omitted.
    #[validate(custom(function = validate_book_status))]
    pub status: Option<String>,
    pub learning: Option<String>,
}

/// DTO for patching a book. Only provided fields are overwritten.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBook {
    pub title: Option<String>,
    pub author: Option<String>,
    pub goodreads_url: Option<String>,
    pub cover_url: Option<String>,
    #[validate(custom(function = validate_book_status))]
    pub status: Option<String>,
    pub learning: Option<String>,
}

fn validate_book_status(status: &str) -> Result<(), ValidationError> {
    if BOOK_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(ValidationError::new("book_status")
            .with_message("must be one of: to_read, reading, read".into()))
    }
}
