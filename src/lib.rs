//! Zoo roster library
//!
//! Models a zoo's animal and staff rosters as closed variant families and
//! persists the whole registry to disk as one versioned archive.
//!
//! Provides:
//! - Entity models (`Animal` variants, `Staff` roles)
//! - The `Zoo` registry with insertion-ordered listings
//! - Whole-roster save/load via storage backends

pub mod archive;
pub mod models;
pub mod storage;

// Re-export commonly used types
pub use storage::{StorageBackend, StorageError};
#[cfg(feature = "native-fs")]
pub use storage::filesystem::FileSystemStorageBackend;

pub use archive::{ARCHIVE_VERSION, ZooArchive, ZooLoader, ZooSaver};
#[cfg(feature = "native-fs")]
pub use archive::{load_zoo_from_file, save_zoo_to_file};

pub use models::{Animal, AnimalKind, Staff, Veterinarian, Zoo, ZooKeeper};
