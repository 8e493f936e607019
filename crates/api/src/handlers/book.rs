//! Handlers for the `/books` resource.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use validator::Validate;

use atelier_core::isbn;
use atelier_core::types::DbId;
use atelier_db::models::book::{Book, CreateBook, UpdateBook};
use atelier_db::repositories::BookRepo;

use crate::error::{not_found, AppError, AppResult};
use crate::handlers::ensure_mutations_allowed;
use crate::openlibrary::BookLookup;
use crate::state::AppState;

/// GET /api/v1/books
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Book>>> {
    let books = BookRepo::list(&state.pool).await?;
    Ok(Json(books))
}

/// POST /api/v1/books
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateBook>,
) -> AppResult<Json<Book>> {
    ensure_mutations_allowed(&state)?;
    input.validate()?;

    let book = BookRepo::create(&state.pool, &input).await?;
    Ok(Json(book))
}

/// PATCH /api/v1/books/{id}
///
/// Overwrites exactly the provided fields.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateBook>,
) -> AppResult<Json<Book>> {
    ensure_mutations_allowed(&state)?;
    input.validate()?;

    let book = BookRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found("Book", &id.to_string()))?;
    Ok(Json(book))
}

/// Query parameters for metadata lookups (`?isbn=`).
#[derive(Debug, Deserialize)]
pub struct LookupParams {
    pub isbn: Option<String>,
}

/// GET /api/v1/books/lookup
///
/// Resolves title/author/cover from Open Library for an ISBN-10 or ISBN-13.
/// Advisory: a miss is a 404 and the client falls back to manual entry.
pub async fn lookup(
    State(state): State<AppState>,
    Query(params): Query<LookupParams>,
) -> AppResult<Json<BookLookup>> {
    let raw = params
        .isbn
        .ok_or_else(|| AppError::BadRequest("Missing 'isbn' query parameter".to_string()))?;
    let normalized =
        isbn::normalize(&raw).map_err(|e| AppError::BadRequest(e.to_string()))?;

    let resolved = state
        .openlibrary
        .lookup(&normalized)
        .await
        .map_err(|err| {
            tracing::error!(error = %err, "Open Library lookup failed");
            not_found("Book", &normalized)
        })?
        .ok_or_else(|| not_found("Book", &normalized))?;

    Ok(Json(resolved))
}
