//! Animal entities
//!
//! Every animal carries a name and age plus one variant-specific
//! attribute. Behavior dispatches over the variant tag; the family is
//! closed, so there is no catch-all "generic animal" case.

use serde::{Deserialize, Serialize};

/// Variant-specific data for an animal.
///
/// Serialized with an internal `kind` tag so an archived `Bird` always
/// decodes back into a `Bird`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnimalKind {
    Bird { wing_span: String },
    Mammal { fur_color: String },
    Reptile { scale_type: String },
}

impl AnimalKind {
    /// Display label for the variant.
    pub fn species(&self) -> &'static str {
        match self {
            AnimalKind::Bird { .. } => "Bird",
            AnimalKind::Mammal { .. } => "Mammal",
            AnimalKind::Reptile { .. } => "Reptile",
        }
    }
}

/// An animal in the roster.
///
/// Callers construct animals with a non-empty name and a concrete variant;
/// entities are not mutated after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Animal {
    pub name: String,
    pub age: u32,
    #[serde(flatten)]
    pub kind: AnimalKind,
}

impl Animal {
    pub fn new(name: impl Into<String>, age: u32, kind: AnimalKind) -> Self {
        Self {
            name: name.into(),
            age,
            kind,
        }
    }

    pub fn bird(name: impl Into<String>, age: u32, wing_span: impl Into<String>) -> Self {
        Self::new(
            name,
            age,
            AnimalKind::Bird {
                wing_span: wing_span.into(),
            },
        )
    }

    pub fn mammal(name: impl Into<String>, age: u32, fur_color: impl Into<String>) -> Self {
        Self::new(
            name,
            age,
            AnimalKind::Mammal {
                fur_color: fur_color.into(),
            },
        )
    }

    pub fn reptile(name: impl Into<String>, age: u32, scale_type: impl Into<String>) -> Self {
        Self::new(
            name,
            age,
            AnimalKind::Reptile {
                scale_type: scale_type.into(),
            },
        )
    }

    /// The variant-specific sound notice.
    pub fn make_sound(&self) -> String {
        match self.kind {
            AnimalKind::Bird { .. } => format!("{} chirps", self.name),
            AnimalKind::Mammal { .. } => format!("{} roars", self.name),
            AnimalKind::Reptile { .. } => format!("{} hisses", self.name),
        }
    }

    /// Eating notice, shared by every variant.
    pub fn eat(&self) -> String {
        format!("{} is eating", self.name)
    }

    /// Display label for the animal's variant.
    pub fn species(&self) -> &'static str {
        self.kind.species()
    }
}
