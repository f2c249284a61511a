//! Storage backend abstraction
//!
//! Defines the StorageBackend trait and the error taxonomy shared with the
//! archive layer. The only shipped implementation is
//! FileSystemStorageBackend (feature `native-fs`); the trait keeps the
//! archive code independent of where the bytes live.

use async_trait::async_trait;

/// Error type for storage and archive operations
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("file not found: {0}")]
    NotFound(String),
    #[error("corrupt archive: {0}")]
    Corrupt(String),
    #[error("IO error: {0}")]
    Io(String),
    #[error("permission denied: {0}")]
    PermissionDenied(String),
}

/// Trait for storage backends
///
/// Abstracts the byte-level file operations the archive layer needs.
/// Paths are relative to the backend's root.
#[async_trait(?Send)]
pub trait StorageBackend: Send + Sync {
    /// Read a file from storage
    async fn read_file(&self, path: &str) -> Result<Vec<u8>, StorageError>;

    /// Write a file to storage, replacing any existing content
    async fn write_file(&self, path: &str, content: &[u8]) -> Result<(), StorageError>;

    /// Check if a file exists
    async fn file_exists(&self, path: &str) -> Result<bool, StorageError>;
}

// Storage backend implementations
#[cfg(feature = "native-fs")]
pub mod filesystem;
