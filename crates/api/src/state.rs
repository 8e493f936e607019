use std::sync::Arc;

use atelier_storage::ObjectStore;

use crate::config::ServerConfig;
use crate::openlibrary::OpenLibrary;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: atelier_db::DbPool,
    /// Server configuration, including the mutation gate flag.
    pub config: Arc<ServerConfig>,
    /// Media bucket access for the proxy endpoint.
    pub store: Arc<dyn ObjectStore>,
    /// Open Library client for book metadata lookups.
    pub openlibrary: Arc<OpenLibrary>,
}
