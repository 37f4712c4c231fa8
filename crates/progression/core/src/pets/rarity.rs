//! Companion rarity.
//!
//! Structurally the same ladder as [`crate::Rarity`], but shorter and carrying
//! the multiplier that scales every pet ability.

use crate::rarity::{Rarity, fuzzy_match, normalize_name};

/// Rarity of a companion.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[repr(u8)]
pub enum PetRarity {
    #[default]
    Common = 0,
    Uncommon = 1,
    Rare = 2,
    Epic = 3,
    Legendary = 4,
    Mythic = 5,
}

impl PetRarity {
    /// All pet rarities in tier order.
    pub const ALL: [PetRarity; 6] = [
        PetRarity::Common,
        PetRarity::Uncommon,
        PetRarity::Rare,
        PetRarity::Epic,
        PetRarity::Legendary,
        PetRarity::Mythic,
    ];

    /// Integer tier (0..=5).
    #[inline]
    pub const fn tier(&self) -> u8 {
        *self as u8
    }

    /// Looks up a pet rarity by tier, falling back to [`PetRarity::Common`].
    pub fn by_tier(tier: u8) -> Self {
        Self::ALL
            .get(tier as usize)
            .copied()
            .unwrap_or(PetRarity::Common)
    }

    /// Multiplier applied to every ability contribution.
    ///
    /// Strictly increasing with tier.
    pub const fn stat_multiplier(&self) -> f64 {
        match self {
            Self::Common => 1.0,
            Self::Uncommon => 1.25,
            Self::Rare => 1.5,
            Self::Epic => 1.75,
            Self::Legendary => 2.0,
            Self::Mythic => 2.5,
        }
    }

    /// Next tier up; the top tier returns itself.
    pub fn next(&self) -> Self {
        if *self == PetRarity::Mythic {
            *self
        } else {
            Self::by_tier(self.tier() + 1)
        }
    }

    /// Next tier down; the bottom tier returns itself.
    pub fn previous(&self) -> Self {
        if *self == PetRarity::Common {
            *self
        } else {
            Self::by_tier(self.tier() - 1)
        }
    }

    /// Liberal parse with the same policy as [`Rarity::from_str_lenient`].
    pub fn from_str_lenient(name: &str) -> Self {
        let normalized = normalize_name(name);
        if normalized.is_empty() {
            return PetRarity::Common;
        }
        if let Ok(rarity) = normalized.parse::<PetRarity>() {
            return rarity;
        }
        fuzzy_match(&normalized, &Self::ALL).unwrap_or(PetRarity::Common)
    }
}

/// Item rarities above the pet ladder collapse onto its top tier.
impl From<Rarity> for PetRarity {
    fn from(rarity: Rarity) -> Self {
        Self::by_tier(rarity.tier().min(PetRarity::Mythic.tier()))
    }
}
