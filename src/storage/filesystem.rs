//! File system storage backend
//!
//! Implements StorageBackend for native file system operations.
//!
//! ## Security
//!
//! All paths are resolved relative to the backend's base directory and
//! must stay inside it; paths with `..` components are rejected.

use super::{StorageBackend, StorageError};
use async_trait::async_trait;
use std::path::{Component, Path, PathBuf};
use tokio::fs;

/// File system storage backend rooted at a base directory
pub struct FileSystemStorageBackend {
    base_path: PathBuf,
}

impl FileSystemStorageBackend {
    /// Create a new file system storage backend
    ///
    /// # Arguments
    ///
    /// * `base_path` - Base directory path for all file operations
    pub fn new(base_path: impl AsRef<Path>) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Resolve a path relative to the base path.
    ///
    /// Only the relative part is checked for `..` — the base directory
    /// itself is caller-supplied and trusted.
    fn resolve_path(&self, path: &str) -> Result<PathBuf, StorageError> {
        // Normalize: strip leading slashes
        let relative = Path::new(path.trim_start_matches('/'));

        for component in relative.components() {
            if matches!(component, Component::ParentDir) {
                return Err(StorageError::PermissionDenied(
                    "path traversal (..) not allowed".to_string(),
                ));
            }
        }

        Ok(self.base_path.join(relative))
    }
}

#[async_trait(?Send)]
impl StorageBackend for FileSystemStorageBackend {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>, StorageError> {
        let full_path = self.resolve_path(path)?;

        fs::read(&full_path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                StorageError::NotFound(path.to_string())
            } else {
                StorageError::Io(format!("failed to read file {}: {}", path, e))
            }
        })
    }

    async fn write_file(&self, path: &str, content: &[u8]) -> Result<(), StorageError> {
        let full_path = self.resolve_path(path)?;

        // Create parent directory if it doesn't exist
        if let Some(parent) = full_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).await.map_err(|e| {
                StorageError::Io(format!("failed to create directory for {}: {}", path, e))
            })?;
        }

        // Stage into a sibling temp file and rename, so an interrupted
        // write never leaves a truncated file at the target path.
        let staging_path = full_path.with_extension("tmp");
        fs::write(&staging_path, content)
            .await
            .map_err(|e| StorageError::Io(format!("failed to write file {}: {}", path, e)))?;
        fs::rename(&staging_path, &full_path)
            .await
            .map_err(|e| StorageError::Io(format!("failed to commit file {}: {}", path, e)))
    }

    async fn file_exists(&self, path: &str) -> Result<bool, StorageError> {
        let full_path = self.resolve_path(path)?;

        match fs::metadata(&full_path).await {
            Ok(metadata) => Ok(metadata.is_file()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(StorageError::Io(format!(
                "failed to check file existence {}: {}",
                path, e
            ))),
        }
    }
}
