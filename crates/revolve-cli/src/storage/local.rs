use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use super::{StorageBackend, StorageError, StorageResult};

/// Reads and writes a single file on the local filesystem.
///
/// File handles are scoped to each operation; they are closed on every
/// exit path, success or error.
pub struct LocalStorage {
    path: PathBuf,
}

impl LocalStorage {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl StorageBackend for LocalStorage {
    async fn retrieve(&self) -> StorageResult<Vec<u8>> {
        debug!("Reading file: {:?}", self.path);

        if !self.path.exists() {
            return Err(StorageError::NotFound(self.path.display().to_string()));
        }

        let data = fs::read(&self.path).await?;
        debug!("Read file: {} bytes", data.len());

        Ok(data)
    }

    async fn store(&self, data: &[u8]) -> StorageResult<()> {
        debug!("Writing file: {:?} ({} bytes)", self.path, data.len());
        fs::write(&self.path, data).await?;
        Ok(())
    }
}
