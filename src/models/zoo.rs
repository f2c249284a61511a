//! The Zoo registry
//!
//! Holds the animal and staff rosters in insertion order. Append-only:
//! nothing is ever removed, and entries are exclusively owned by the zoo.

use super::animal::Animal;
use super::staff::Staff;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Zoo {
    #[serde(default)]
    pub animals: Vec<Animal>,
    #[serde(default)]
    pub staff: Vec<Staff>,
}

impl Zoo {
    /// Create an empty zoo.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an animal to the roster. No deduplication.
    pub fn add_animal(&mut self, animal: Animal) {
        self.animals.push(animal);
    }

    /// Append a staff member to the roster. No deduplication.
    pub fn add_staff(&mut self, member: Staff) {
        self.staff.push(member);
    }

    /// One display line per animal, in insertion order.
    pub fn list_animals(&self) -> Vec<String> {
        self.animals
            .iter()
            .map(|animal| format!("{}, Age: {}", animal.name, animal.age))
            .collect()
    }

    /// One display line per staff member, in insertion order.
    pub fn list_staff(&self) -> Vec<String> {
        self.staff
            .iter()
            .map(|member| format!("{}, Role: {}", member.name(), member.role_label()))
            .collect()
    }
}
