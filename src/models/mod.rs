//! Entity models
//!
//! Defines the closed animal and staff families and the `Zoo` registry
//! that owns them.

pub mod animal;
pub mod staff;
pub mod zoo;

pub use animal::{Animal, AnimalKind};
pub use staff::{Staff, Veterinarian, ZooKeeper};
pub use zoo::Zoo;
