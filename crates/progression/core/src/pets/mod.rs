//! Companions: rarity, abilities, and the species registry.

pub mod ability;
pub mod rarity;
pub mod registry;

pub use ability::{PetAbility, PetAbilityKind};
pub use rarity::PetRarity;
pub use registry::PetAbilityRegistry;

/// Default maximum pet level.
pub const DEFAULT_MAX_PET_LEVEL: u32 = 100;
