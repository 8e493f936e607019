//! Portfolio content API server library.
//!
//! Exposes the core building blocks (config, state, error handling, routes,
//! the media proxy, the Open Library client) so integration tests and the
//! binary entrypoint can both access them.

pub mod config;
pub mod error;
pub mod handlers;
pub mod openlibrary;
pub mod router;
pub mod routes;
pub mod state;
