//! Shared harness for HTTP-level integration tests.
//!
//! Builds the real application router (production middleware stack) over a
//! test database pool and an in-memory object store, and provides small
//! request helpers around `tower::ServiceExt::oneshot`.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::Request;
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::util::ServiceExt;

use atelier_api::config::ServerConfig;
use atelier_api::openlibrary::OpenLibrary;
use atelier_api::router::build_app_router;
use atelier_api::state::AppState;
use atelier_storage::MemoryStore;

/// Build a test `ServerConfig` with safe defaults and the mutation gate
/// open, matching a development environment.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        allow_mutations: true,
    }
}

/// Build the application router with the given pool, config, and store.
///
/// This goes through [`build_app_router`] so integration tests exercise the
/// same middleware stack (CORS, request ID, timeout, tracing, panic
/// recovery) that production uses.
pub fn build_app(pool: PgPool, config: ServerConfig, store: MemoryStore) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        store: Arc::new(store),
        openlibrary: Arc::new(OpenLibrary::new()),
    };
    build_app_router(state, &config)
}

/// Router with the mutation gate open and an empty media store.
pub fn build_test_app(pool: PgPool) -> Router {
    build_app(pool, test_config(), MemoryStore::new())
}

/// Router with the mutation gate closed, as in production.
pub fn build_locked_app(pool: PgPool) -> Router {
    let config = ServerConfig {
        allow_mutations: false,
        ..test_config()
    };
    build_app(pool, config, MemoryStore::new())
}

pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("request builds"),
    )
    .await
    .expect("request succeeds")
}

pub async fn post_json(app: Router, uri: &str, json: serde_json::Value) -> Response {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .expect("request builds"),
    )
    .await
    .expect("request succeeds")
}

pub async fn patch_json(app: Router, uri: &str, json: serde_json::Value) -> Response {
    app.oneshot(
        Request::builder()
            .method("PATCH")
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .expect("request builds"),
    )
    .await
    .expect("request succeeds")
}

/// POST a `multipart/form-data` body assembled from text fields.
pub async fn post_multipart(app: Router, uri: &str, fields: &[(&str, &str)]) -> Response {
    let boundary = "atelier-test-boundary";
    let mut body = String::new();
    for (name, value) in fields {
        body.push_str(&format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
        ));
    }
    body.push_str(&format!("--{boundary}--\r\n"));

    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(
                CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .expect("request builds"),
    )
    .await
    .expect("request succeeds")
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body collects")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body is JSON")
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .expect("body collects")
        .to_bytes()
        .to_vec()
}

/// Count rows in a table; used to assert gated mutations write nothing.
pub async fn count_rows(pool: &PgPool, table: &str) -> i64 {
    let (count,): (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .expect("count query succeeds");
    count
}
