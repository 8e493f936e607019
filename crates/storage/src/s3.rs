//! S3-backed [`ObjectStore`] implementation.

use aws_sdk_s3::operation::get_object::GetObjectError;
use aws_sdk_s3::Client;

use crate::{reader_stream, ObjectStore, StorageError, StoredObject};

/// Media bucket client. Cheap to clone; holds the SDK's pooled client.
#[derive(Clone)]
pub struct S3Store {
    client: Client,
    bucket: String,
}

impl S3Store {
    /// Build a store from the ambient AWS environment (region, credentials)
    /// against the given bucket.
    pub async fn from_env(bucket: impl Into<String>) -> Self {
        let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        Self {
            client: Client::new(&config),
            bucket: bucket.into(),
        }
    }

    pub fn new(client: Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }
}

#[async_trait::async_trait]
impl ObjectStore for S3Store {
    async fn get(&self, key: &str) -> Result<StoredObject, StorageError> {
        let output = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|err| match err.into_service_error() {
                GetObjectError::NoSuchKey(_) => StorageError::NotFound(key.to_string()),
                other => StorageError::Provider(other.to_string()),
            })?;

        Ok(StoredObject {
            content_type: output.content_type().map(str::to_string),
            body: reader_stream(output.body.into_async_read()),
        })
    }
}
