//! HTTP-level integration tests for the media proxy.

mod common;

use axum::http::header::{CACHE_CONTROL, CONTENT_TYPE};
use axum::http::StatusCode;
use sqlx::PgPool;

use atelier_storage::MemoryStore;

const JPEG_MAGIC: &[u8] = b"\xff\xd8\xff\xe0";

fn seeded_store() -> MemoryStore {
    let mut store = MemoryStore::new();
    store.insert("media/hovercraft.jpg", "image/jpeg", JPEG_MAGIC);
    store
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_media_streams_bytes_with_content_type_and_cache_headers(pool: PgPool) {
    let app = common::build_app(pool, common::test_config(), seeded_store());
    let response = common::get(app, "/media?key=media%2Fhovercraft.jpg").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(CONTENT_TYPE).unwrap(),
        "image/jpeg"
    );
    assert_eq!(
        response.headers().get(CACHE_CONTROL).unwrap(),
        "public, max-age=31536000"
    );

    let bytes = common::body_bytes(response).await;
    assert_eq!(bytes, JPEG_MAGIC);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_media_without_key_returns_400(pool: PgPool) {
    let app = common::build_app(pool.clone(), common::test_config(), seeded_store());
    let response = common::get(app, "/media").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // An empty key is treated the same as a missing one.
    let app = common::build_app(pool, common::test_config(), seeded_store());
    let response = common::get(app, "/media?key=").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_media_unknown_key_returns_404(pool: PgPool) {
    let app = common::build_app(pool, common::test_config(), seeded_store());
    let response = common::get(app, "/media?key=media%2Fghost.png").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
