//! Staff entities
//!
//! Staff split into two roles with no attributes beyond a name; what
//! distinguishes them is the care action they perform. The role-specific
//! actions live on the role structs, so a keeper cannot heal and a
//! veterinarian cannot feed.

use super::animal::Animal;
use serde::{Deserialize, Serialize};

/// A keeper. Feeds animals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZooKeeper {
    pub name: String,
}

impl ZooKeeper {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Feeding notice. Changes no state on either entity.
    pub fn feed_animal(&self, animal: &Animal) -> String {
        format!("{} feeds {}.", self.name, animal.name)
    }
}

/// A veterinarian. Heals animals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Veterinarian {
    pub name: String,
}

impl Veterinarian {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Healing notice. Changes no state on either entity.
    pub fn heal_animal(&self, animal: &Animal) -> String {
        format!("{} heals {}.", self.name, animal.name)
    }
}

/// A staff member of either role, as stored in the roster.
///
/// Serialized with an internal `role` tag so the concrete role survives
/// the archive round trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum Staff {
    ZooKeeper(ZooKeeper),
    Veterinarian(Veterinarian),
}

impl Staff {
    pub fn name(&self) -> &str {
        match self {
            Staff::ZooKeeper(keeper) => &keeper.name,
            Staff::Veterinarian(vet) => &vet.name,
        }
    }

    /// Display label for the member's role.
    pub fn role_label(&self) -> &'static str {
        match self {
            Staff::ZooKeeper(_) => "ZooKeeper",
            Staff::Veterinarian(_) => "Veterinarian",
        }
    }
}

impl From<ZooKeeper> for Staff {
    fn from(keeper: ZooKeeper) -> Self {
        Staff::ZooKeeper(keeper)
    }
}

impl From<Veterinarian> for Staff {
    fn from(vet: Veterinarian) -> Self {
        Staff::Veterinarian(vet)
    }
}
