//! Whole-roster persistence
//!
//! Provides high-level save/load of a complete `Zoo` through a storage
//! backend. The on-disk format is a single JSON envelope carrying a
//! format version, a write timestamp, and the roster itself; variant
//! identity rides on the serde tags.

use crate::models::Zoo;
use crate::storage::StorageError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod loader;
pub mod saver;

pub use loader::ZooLoader;
pub use saver::ZooSaver;

/// Current archive format version. Decoding rejects anything else.
pub const ARCHIVE_VERSION: u32 = 1;

/// On-disk envelope around a serialized zoo.
///
/// `saved_at` is write-time metadata only; it takes no part in roster
/// equality.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZooArchive {
    pub version: u32,
    pub saved_at: DateTime<Utc>,
    pub zoo: Zoo,
}

/// Save a zoo to a single archive file, overwriting any existing file at
/// that path.
#[cfg(feature = "native-fs")]
pub async fn save_zoo_to_file(
    zoo: &Zoo,
    path: impl AsRef<std::path::Path>,
) -> Result<(), StorageError> {
    let (backend, file_name) = backend_for(path.as_ref())?;
    ZooSaver::new(backend).save_zoo(&file_name, zoo).await
}

/// Load a zoo from an archive file previously written by
/// [`save_zoo_to_file`].
///
/// Fails with [`StorageError::NotFound`] if the path does not exist and
/// with [`StorageError::Corrupt`] if the bytes do not decode into a
/// supported archive.
#[cfg(feature = "native-fs")]
pub async fn load_zoo_from_file(path: impl AsRef<std::path::Path>) -> Result<Zoo, StorageError> {
    let (backend, file_name) = backend_for(path.as_ref())?;
    ZooLoader::new(backend).load_zoo(&file_name).await
}

/// Root a filesystem backend at the path's parent directory.
#[cfg(feature = "native-fs")]
fn backend_for(
    path: &std::path::Path,
) -> Result<(crate::storage::filesystem::FileSystemStorageBackend, String), StorageError> {
    use crate::storage::filesystem::FileSystemStorageBackend;
    use std::path::Path;

    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| StorageError::Io(format!("not a file path: {}", path.display())))?
        .to_string();
    let base = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    Ok((FileSystemStorageBackend::new(base), file_name))
}
