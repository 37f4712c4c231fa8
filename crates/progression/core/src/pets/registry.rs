//! Species → ability wiring.

use std::collections::HashMap;

use crate::stats::StatBag;

use super::ability::PetAbility;
use super::rarity::PetRarity;

/// Registry of companion species and their ordered ability lists.
///
/// Species ids are stored uppercased; lookups are case-insensitive. A species
/// with no registered abilities is valid and simply contributes nothing.
///
/// The registry is built once by the content loader and then shared read-only
/// inside [`crate::Catalogs`].
#[derive(Clone, Debug, Default)]
pub struct PetAbilityRegistry {
    species: HashMap<String, Vec<PetAbility>>,
}

impl PetAbilityRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            species: HashMap::new(),
        }
    }

    /// Registers (or replaces) the abilities of a species.
    pub fn insert(&mut self, species: &str, abilities: Vec<PetAbility>) {
        let key = species.trim().to_ascii_uppercase();
        if self.species.insert(key, abilities).is_some() {
            tracing::warn!("pet species '{}' registered twice; keeping the last entry", species);
        }
    }

    /// Builder-style [`PetAbilityRegistry::insert`].
    pub fn with(mut self, species: &str, abilities: Vec<PetAbility>) -> Self {
        self.insert(species, abilities);
        self
    }

    /// Ordered abilities for `species`; empty when unregistered.
    pub fn abilities_for(&self, species: &str) -> &[PetAbility] {
        self.species
            .get(&species.trim().to_ascii_uppercase())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Sum of every ability's contribution for a companion.
    pub fn contribution(&self, species: &str, level: u32, rarity: PetRarity) -> StatBag {
        let mut bag = StatBag::new();
        for ability in self.abilities_for(species) {
            ability.apply(&mut bag, level, rarity);
        }
        bag
    }

    /// Display lines for every ability of a companion, in registration order.
    pub fn describe(&self, species: &str, level: u32, rarity: PetRarity) -> Vec<String> {
        self.abilities_for(species)
            .iter()
            .flat_map(|ability| ability.describe(level, rarity))
            .collect()
    }

    /// Returns true if the species has at least one ability.
    pub fn contains(&self, species: &str) -> bool {
        !self.abilities_for(species).is_empty()
    }

    /// Iterates registered species ids (uppercased).
    pub fn species(&self) -> impl Iterator<Item = &str> + '_ {
        self.species.keys().map(String::as_str)
    }

    /// Number of registered species.
    pub fn len(&self) -> usize {
        self.species.len()
    }

    /// Returns true if no species are registered.
    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }
}
