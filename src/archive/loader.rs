//! Zoo archive loading
//!
//! Reads an archive blob back into a `Zoo`, re-establishing each entity's
//! concrete variant from the serde tags.

use super::{ARCHIVE_VERSION, ZooArchive};
use crate::models::Zoo;
use crate::storage::{StorageBackend, StorageError};
use tracing::info;

/// Zoo loader that uses a storage backend
pub struct ZooLoader<B: StorageBackend> {
    storage: B,
}

impl<B: StorageBackend> ZooLoader<B> {
    /// Create a new zoo loader with the given storage backend
    pub fn new(storage: B) -> Self {
        Self { storage }
    }

    /// Load the zoo archived at `path`.
    ///
    /// Fails with [`StorageError::NotFound`] if no file exists there, and
    /// with [`StorageError::Corrupt`] if the bytes do not decode into a
    /// supported archive. No recovery is attempted.
    pub async fn load_zoo(&self, path: &str) -> Result<Zoo, StorageError> {
        if !self.storage.file_exists(path).await? {
            return Err(StorageError::NotFound(path.to_string()));
        }

        let content = self.storage.read_file(path).await?;

        let archive: ZooArchive = serde_json::from_slice(&content)
            .map_err(|e| StorageError::Corrupt(format!("failed to decode zoo archive: {}", e)))?;

        if archive.version != ARCHIVE_VERSION {
            return Err(StorageError::Corrupt(format!(
                "unsupported archive version {}",
                archive.version
            )));
        }

        info!(
            "Loaded zoo ({} animals, {} staff) from {}",
            archive.zoo.animals.len(),
            archive.zoo.staff.len(),
            path
        );
        Ok(archive.zoo)
    }
}
