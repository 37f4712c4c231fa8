//! Per-entity inputs to stat aggregation.

use crate::pets::PetRarity;
use crate::rarity::Rarity;
use crate::reforge::ItemCategory;
use crate::skills::SkillSet;
use crate::stats::StatBag;

/// A worn or held item.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquippedItem {
    pub id: String,
    pub category: ItemCategory,
    pub rarity: Rarity,
    /// Stats the item grants before any reforge.
    pub base: StatBag,
    /// Applied reforge id, looked up in the item's own category.
    pub reforge: Option<String>,
}

impl EquippedItem {
    pub fn new(id: impl Into<String>, category: ItemCategory, rarity: Rarity) -> Self {
        Self {
            id: id.into(),
            category,
            rarity,
            base: StatBag::new(),
            reforge: None,
        }
    }

    pub fn with_base(mut self, base: StatBag) -> Self {
        self.base = base;
        self
    }

    pub fn with_reforge(mut self, reforge: impl Into<String>) -> Self {
        self.reforge = Some(reforge.into());
        self
    }
}

/// An owned pet.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Companion {
    pub species: String,
    pub level: u32,
    pub rarity: PetRarity,
    /// Only the summoned companion contributes stats.
    pub active: bool,
}

impl Companion {
    pub fn new(species: impl Into<String>, level: u32, rarity: PetRarity) -> Self {
        Self {
            species: species.into(),
            level,
            rarity,
            active: false,
        }
    }

    pub fn summoned(mut self) -> Self {
        self.active = true;
        self
    }
}

/// Everything the aggregator reads for one entity.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityProfile {
    pub equipment: Vec<EquippedItem>,
    pub companions: Vec<Companion>,
    pub skills: SkillSet,
}

impl EntityProfile {
    pub fn new() -> Self {
        Self::default()
    }

    /// The summoned companion, if any.
    pub fn active_companion(&self) -> Option<&Companion> {
        self.companions.iter().find(|c| c.active)
    }

    /// Marks the companion at `index` as summoned and every other as stored.
    /// Returns false (and changes nothing) when `index` is out of range.
    pub fn summon(&mut self, index: usize) -> bool {
        if index >= self.companions.len() {
            return false;
        }
        for (i, companion) in self.companions.iter_mut().enumerate() {
            companion.active = i == index;
        }
        true
    }

    /// Stores every companion.
    pub fn dismiss(&mut self) {
        for companion in &mut self.companions {
            companion.active = false;
        }
    }
}
