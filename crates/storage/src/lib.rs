//! Object-storage access for proxied media.
//!
//! The HTTP layer talks to an [`ObjectStore`] trait object so the media
//! proxy can be exercised in tests without a bucket. Production uses
//! [`S3Store`]; tests use [`MemoryStore`].

use bytes::Bytes;
use futures::stream::{self, BoxStream, StreamExt};
use tokio_util::io::ReaderStream;

pub mod s3;

pub use s3::S3Store;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The requested key does not exist in the bucket.
    #[error("Object not found: {0}")]
    NotFound(String),

    /// Any other provider failure (network, credentials, throttling).
    #[error("Object store error: {0}")]
    Provider(String),
}

/// A fetched object: the stored content type plus a byte stream.
pub struct StoredObject {
    /// Content type recorded on the object, if any.
    pub content_type: Option<String>,
    /// Object bytes, streamed rather than buffered.
    pub body: BoxStream<'static, Result<Bytes, std::io::Error>>,
}

impl std::fmt::Debug for StoredObject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoredObject")
            .field("content_type", &self.content_type)
            .finish_non_exhaustive()
    }
}

/// Read access to the media bucket.
#[async_trait::async_trait]
pub trait ObjectStore: Send + Sync {
    /// Fetch the object stored under `key`.
    async fn get(&self, key: &str) -> Result<StoredObject, StorageError>;
}

/// In-memory store for tests.
#[derive(Default)]
pub struct MemoryStore {
    objects: std::collections::HashMap<String, (String, Bytes)>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an object under `key` with the given content type.
    pub fn insert(&mut self, key: &str, content_type: &str, bytes: impl Into<Bytes>) {
        self.objects
            .insert(key.to_string(), (content_type.to_string(), bytes.into()));
    }
}

#[async_trait::async_trait]
impl ObjectStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<StoredObject, StorageError> {
        let (content_type, bytes) = self
            .objects
            .get(key)
            .ok_or_else(|| StorageError::NotFound(key.to_string()))?;
        let bytes = bytes.clone();
        Ok(StoredObject {
            content_type: Some(content_type.clone()),
            body: stream::once(async move { Ok::<_, std::io::Error>(bytes) }).boxed(),
        })
    }
}

/// Bridge an `AsyncRead` into the `StoredObject` byte stream shape.
pub(crate) fn reader_stream<R>(reader: R) -> BoxStream<'static, Result<Bytes, std::io::Error>>
where
    R: tokio::io::AsyncRead + Send + 'static,
{
    ReaderStream::new(Box::pin(reader)).boxed()
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::TryStreamExt;

    #[tokio::test]
    async fn memory_store_round_trips_bytes_and_content_type() {
        let mut store = MemoryStore::new();
        store.insert("media/cover.jpg", "image/jpeg", &b"\xff\xd8\xff"[..]);

        let object = store.get("media/cover.jpg").await.unwrap();
        assert_eq!(object.content_type.as_deref(), Some("image/jpeg"));

        let bytes: Vec<Bytes> = object.body.try_collect().await.unwrap();
        assert_eq!(bytes.concat(), b"\xff\xd8\xff");
    }

    #[tokio::test]
    async fn memory_store_misses_are_not_found() {
        let store = MemoryStore::new();
        let err = store.get("nope").await.unwrap_err();
        assert!(matches!(err, StorageError::NotFound(_)));
    }
}
