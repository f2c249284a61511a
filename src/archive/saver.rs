//! Zoo archive saving
//!
//! Serializes the entire roster into one archive blob and hands it to the
//! storage backend.

use super::{ARCHIVE_VERSION, ZooArchive};
use crate::models::Zoo;
use crate::storage::{StorageBackend, StorageError};
use chrono::Utc;
use tracing::info;

/// Zoo saver that uses a storage backend
pub struct ZooSaver<B: StorageBackend> {
    storage: B,
}

impl<B: StorageBackend> ZooSaver<B> {
    /// Create a new zoo saver with the given storage backend
    pub fn new(storage: B) -> Self {
        Self { storage }
    }

    /// Serialize the whole zoo (animals, staff, variant tags) and write it
    /// to `path`, overwriting any existing archive there.
    pub async fn save_zoo(&self, path: &str, zoo: &Zoo) -> Result<(), StorageError> {
        let archive = ZooArchive {
            version: ARCHIVE_VERSION,
            saved_at: Utc::now(),
            zoo: zoo.clone(),
        };

        let content = serde_json::to_vec_pretty(&archive)
            .map_err(|e| StorageError::Io(format!("failed to encode zoo archive: {}", e)))?;

        self.storage.write_file(path, &content).await?;

        info!(
            "Saved zoo ({} animals, {} staff) to {}",
            zoo.animals.len(),
            zoo.staff.len(),
            path
        );
        Ok(())
    }
}
