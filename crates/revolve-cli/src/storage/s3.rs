use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;
use tracing::{debug, error};

use super::{StorageBackend, StorageError, StorageResult};

/// Reads and writes a single object in an S3 bucket.
pub struct S3Storage {
    client: Client,
    bucket: String,
    key: String,
}

impl S3Storage {
    pub fn new(client: Client, bucket: String, key: String) -> Self {
        // object paths parsed from a URL keep their leading slash; S3 keys
        // do not carry one
        let key = key.trim_start_matches('/').to_string();
        Self {
            client,
            bucket,
            key,
        }
    }

    fn url(&self) -> String {
        format!("s3://{}/{}", self.bucket, self.key)
    }
}

#[async_trait]
impl StorageBackend for S3Storage {
    async fn retrieve(&self) -> StorageResult<Vec<u8>> {
        debug!(bucket = %self.bucket, key = %self.key, "Fetching object");

        let result = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(&self.key)
            .send()
            .await
            .map_err(|e| {
                if e.to_string().contains("NoSuchKey") {
                    StorageError::NotFound(self.url())
                } else {
                    error!("Failed to fetch object: {}", e);
                    StorageError::Backend(format!("S3 get_object failed: {}", e))
                }
            })?;

        let data = result
            .body
            .collect()
            .await
            .map_err(|e| {
                error!("Failed to read object body: {}", e);
                StorageError::Backend(format!("Failed to read S3 body: {}", e))
            })?
            .into_bytes()
            .to_vec();

        debug!(bytes = data.len(), "Fetched object");
        Ok(data)
    }

    async fn store(&self, data: &[u8]) -> StorageResult<()> {
        debug!(bucket = %self.bucket, key = %self.key, bytes = data.len(), "Storing object");

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(&self.key)
            .content_type("image/jpeg")
            .body(ByteStream::from(data.to_vec()))
            .send()
            .await
            .map_err(|e| {
                error!("Failed to store object: {}", e);
                StorageError::Backend(format!("S3 put_object failed: {}", e))
            })?;

        debug!("Stored object");
        Ok(())
    }
}
