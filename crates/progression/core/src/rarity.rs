//! Item rarity ladder.
//!
//! Rarity is a total order of nine tiers. Tier arithmetic saturates at both
//! ends, and name parsing is deliberately liberal: config typos resolve to a
//! best guess (or [`Rarity::Common`]) instead of failing a load. Callers that
//! need strict validation use [`Rarity::from_str_strict`].

use crate::error::{ErrorSeverity, GameError};
use crate::stats::DisplayColor;

/// Reforge cost per tier, indexed by [`Rarity::tier`].
///
/// Tiers past the end of this table pay the last entry.
pub const REFORGE_COSTS: [u64; 6] = [250, 500, 1_000, 2_500, 5_000, 10_000];

/// Quality tier attached to items.
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
pub enum Rarity {
    #[default]
    Common = 0,
    Uncommon = 1,
    Rare = 2,
    Epic = 3,
    Legendary = 4,
    Mythic = 5,
    Divine = 6,
    Special = 7,
    VerySpecial = 8,
}

/// Errors from strict rarity parsing.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RarityError {
    /// The name does not normalize to any known rarity.
    #[error("unknown rarity '{0}'")]
    Unknown(String),
}

impl GameError for RarityError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Unknown(_) => "RARITY_UNKNOWN",
        }
    }
}

impl Rarity {
    /// All rarities in tier order.
    pub const ALL: [Rarity; 9] = [
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::Epic,
        Rarity::Legendary,
        Rarity::Mythic,
        Rarity::Divine,
        Rarity::Special,
        Rarity::VerySpecial,
    ];

    /// Lowest tier.
    pub const MIN: Rarity = Rarity::Common;

    /// Highest tier.
    pub const MAX: Rarity = Rarity::VerySpecial;

    /// Integer tier (0..=8).
    #[inline]
    pub const fn tier(&self) -> u8 {
        *self as u8
    }

    /// Looks up a rarity by tier, falling back to [`Rarity::Common`].
    pub fn by_tier(tier: u8) -> Self {
        Self::ALL
            .get(tier as usize)
            .copied()
            .unwrap_or(Rarity::Common)
    }

    /// Next tier up; the top tier returns itself.
    pub fn next(&self) -> Self {
        if *self == Self::MAX {
            *self
        } else {
            Self::by_tier(self.tier() + 1)
        }
    }

    /// Next tier down; the bottom tier returns itself.
    pub fn previous(&self) -> Self {
        if *self == Self::MIN {
            *self
        } else {
            Self::by_tier(self.tier() - 1)
        }
    }

    /// Reforge cost for items of this rarity (step table, not a formula).
    pub fn reforge_cost(&self) -> u64 {
        let idx = (self.tier() as usize).min(REFORGE_COSTS.len() - 1);
        REFORGE_COSTS[idx]
    }

    /// Display name ("Very Special").
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Common => "Common",
            Self::Uncommon => "Uncommon",
            Self::Rare => "Rare",
            Self::Epic => "Epic",
            Self::Legendary => "Legendary",
            Self::Mythic => "Mythic",
            Self::Divine => "Divine",
            Self::Special => "Special",
            Self::VerySpecial => "Very Special",
        }
    }

    /// Text color used when rendering item names of this rarity.
    pub const fn color(&self) -> DisplayColor {
        match self {
            Self::Common => DisplayColor::White,
            Self::Uncommon => DisplayColor::Green,
            Self::Rare => DisplayColor::Blue,
            Self::Epic => DisplayColor::DarkPurple,
            Self::Legendary => DisplayColor::Gold,
            Self::Mythic => DisplayColor::LightPurple,
            Self::Divine => DisplayColor::Aqua,
            Self::Special | Self::VerySpecial => DisplayColor::Red,
        }
    }

    /// Liberal parse: normalizes case and separators, then tries substring
    /// matches, then falls back to [`Rarity::Common`].
    ///
    /// ```
    /// # use progression_core::Rarity;
    /// assert_eq!(Rarity::from_str_lenient("Very Special"), Rarity::VerySpecial);
    /// assert_eq!(Rarity::from_str_lenient("LEGENDRY"), Rarity::Common);
    /// assert_eq!(Rarity::from_str_lenient("legend"), Rarity::Legendary);
    /// assert_eq!(Rarity::from_str_lenient("super-rare"), Rarity::Rare);
    /// ```
    pub fn from_str_lenient(name: &str) -> Self {
        let normalized = normalize_name(name);
        if normalized.is_empty() {
            return Rarity::Common;
        }
        if let Ok(rarity) = normalized.parse::<Rarity>() {
            return rarity;
        }
        fuzzy_match(&normalized, &Self::ALL).unwrap_or_else(|| {
            tracing::debug!("unrecognized rarity '{}', falling back to common", name);
            Rarity::Common
        })
    }

    /// Strict parse: only exact names (after case/separator normalization).
    pub fn from_str_strict(name: &str) -> Result<Self, RarityError> {
        normalize_name(name)
            .parse::<Rarity>()
            .map_err(|_| RarityError::Unknown(name.to_string()))
    }
}

/// Lowercases and maps `-` and spaces to `_`.
pub(crate) fn normalize_name(name: &str) -> String {
    name.trim()
        .chars()
        .map(|c| match c {
            '-' | ' ' => '_',
            c => c.to_ascii_lowercase(),
        })
        .collect()
}

/// Substring matching shared by the item and pet rarity ladders.
///
/// A candidate whose name appears inside the input wins first (longest name
/// preferred, so `very_special_x` resolves to `very_special` rather than
/// `special`). Otherwise the lowest tier whose name contains the input wins.
pub(crate) fn fuzzy_match<T>(normalized: &str, candidates: &[T]) -> Option<T>
where
    T: Copy + AsRef<str>,
{
    let contained = candidates
        .iter()
        .filter(|c| normalized.contains(c.as_ref()))
        .max_by_key(|c| c.as_ref().len());
    if let Some(found) = contained {
        return Some(*found);
    }
    candidates
        .iter()
        .find(|c| c.as_ref().contains(normalized))
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_are_contiguous() {
        for (idx, rarity) in Rarity::ALL.iter().enumerate() {
            assert_eq!(rarity.tier() as usize, idx);
            assert_eq!(Rarity::by_tier(idx as u8), *rarity);
        }
    }

    #[test]
    fn colors_follow_tiers() {
        assert_eq!(Rarity::Common.color(), DisplayColor::White);
        assert_eq!(Rarity::Legendary.color(), DisplayColor::Gold);
        assert_eq!(Rarity::Special.color(), Rarity::VerySpecial.color());
        assert_ne!(Rarity::Rare.color(), Rarity::Epic.color());
    }

    #[test]
    fn by_tier_out_of_range_is_common() {
        assert_eq!(Rarity::by_tier(9), Rarity::Common);
        assert_eq!(Rarity::by_tier(u8::MAX), Rarity::Common);
    }

    #[test]
    fn next_and_previous_saturate() {
        assert_eq!(Rarity::VerySpecial.next(), Rarity::VerySpecial);
        assert_eq!(Rarity::Common.previous(), Rarity::Common);
        assert_eq!(Rarity::Epic.next(), Rarity::Legendary);
        assert_eq!(Rarity::Epic.previous(), Rarity::Rare);
    }

    #[test]
    fn next_previous_round_trip() {
        for rarity in Rarity::ALL {
            if rarity != Rarity::MAX {
                assert_eq!(rarity.next().previous(), rarity);
            }
            if rarity != Rarity::MIN {
                assert_eq!(rarity.previous().next(), rarity);
            }
        }
    }

    #[test]
    fn reforge_cost_is_step_table() {
        assert_eq!(Rarity::Common.reforge_cost(), 250);
        assert_eq!(Rarity::Legendary.reforge_cost(), 5_000);
        assert_eq!(Rarity::Mythic.reforge_cost(), 10_000);
        // Past the table: highest defined cost.
        assert_eq!(Rarity::Divine.reforge_cost(), 10_000);
        assert_eq!(Rarity::VerySpecial.reforge_cost(), 10_000);
    }

    #[test]
    fn lenient_parse_normalizes() {
        assert_eq!(Rarity::from_str_lenient("EPIC"), Rarity::Epic);
        assert_eq!(Rarity::from_str_lenient(" very-special "), Rarity::VerySpecial);
        assert_eq!(Rarity::from_str_lenient("VERY_SPECIAL"), Rarity::VerySpecial);
    }

    #[test]
    fn lenient_parse_fuzzy_and_fallback() {
        assert_eq!(Rarity::from_str_lenient("mythic_plus"), Rarity::Mythic);
        assert_eq!(Rarity::from_str_lenient("very_special_edition"), Rarity::VerySpecial);
        assert_eq!(Rarity::from_str_lenient("leg"), Rarity::Legendary);
        assert_eq!(Rarity::from_str_lenient("garbage"), Rarity::Common);
        assert_eq!(Rarity::from_str_lenient(""), Rarity::Common);
    }

    #[test]
    fn strict_parse_rejects_unknown() {
        assert_eq!(Rarity::from_str_strict("Rare"), Ok(Rarity::Rare));
        assert_eq!(Rarity::from_str_strict("very special"), Ok(Rarity::VerySpecial));
        let err = Rarity::from_str_strict("legend").unwrap_err();
        assert_eq!(err.error_code(), "RARITY_UNKNOWN");
        assert_eq!(err.severity(), ErrorSeverity::Validation);
    }
}
