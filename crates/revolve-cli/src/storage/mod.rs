//! Storage backends for source and destination locations.

mod error;
mod local;
mod s3;

pub use error::{StorageError, StorageResult};
pub use local::LocalStorage;
pub use s3::S3Storage;

use async_trait::async_trait;

use crate::location::Location;

/// Byte-stream access to a single addressed object.
#[async_trait]
pub trait StorageBackend: Send + Sync {
    async fn retrieve(&self) -> StorageResult<Vec<u8>>;
    async fn store(&self, data: &[u8]) -> StorageResult<()>;
}

/// Build the backend matching a parsed location.
pub async fn backend_for(location: &Location) -> Box<dyn StorageBackend> {
    match location {
        Location::Local(path) => Box::new(LocalStorage::new(path.clone())),
        Location::Remote { bucket, key } => {
            let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
            let client = aws_sdk_s3::Client::new(&config);
            Box::new(S3Storage::new(client, bucket.clone(), key.clone()))
        }
    }
}
