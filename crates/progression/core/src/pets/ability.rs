//! Pet abilities: level + rarity → stat contributions.
//!
//! Each ability family scales exactly two stats linearly with pet level and
//! the rarity multiplier:
//!
//! ```text
//! primary   = a × level × multiplier
//! secondary = b × level × 100 × multiplier   (percentage-scaled secondaries)
//! secondary = b × level × multiplier         (otherwise)
//! ```
//!
//! The ×100 on percentage-scaled secondaries is where the balance numbers come
//! from; see [`PetAbilityKind::secondary_is_percent`].

use crate::stats::{StatBag, StatKind};

use super::rarity::PetRarity;

/// Ability families.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum PetAbilityKind {
    Combat,
    Farming,
    Mining,
    Foraging,
    Fishing,
    Enchanting,
    Alchemy,
}

impl PetAbilityKind {
    /// The two stats this family feeds, `(primary, secondary)`.
    pub const fn stats(&self) -> (StatKind, StatKind) {
        match self {
            Self::Combat => (StatKind::Strength, StatKind::CritDamage),
            Self::Farming => (StatKind::FarmingFortune, StatKind::Health),
            Self::Mining => (StatKind::MiningSpeed, StatKind::MiningFortune),
            Self::Foraging => (StatKind::Strength, StatKind::ForagingFortune),
            Self::Fishing => (StatKind::FishingSpeed, StatKind::SeaCreatureChance),
            Self::Enchanting => (StatKind::Intelligence, StatKind::AbilityDamage),
            Self::Alchemy => (StatKind::Health, StatKind::Intelligence),
        }
    }

    /// Default per-level coefficients, `(primary, secondary)`.
    pub const fn default_coefficients(&self) -> (f64, f64) {
        match self {
            Self::Combat => (0.1, 0.005),
            Self::Farming => (0.5, 0.002),
            Self::Mining => (1.0, 0.005),
            Self::Foraging => (0.05, 0.005),
            Self::Fishing => (0.3, 0.0005),
            Self::Enchanting => (0.5, 0.001),
            Self::Alchemy => (0.5, 0.2),
        }
    }

    /// Whether the secondary stat is expressed as a percentage and therefore
    /// scaled by 100.
    ///
    /// Farming's secondary is a percentage health bonus; alchemy's secondary
    /// is flat intelligence.
    pub const fn secondary_is_percent(&self) -> bool {
        match self {
            Self::Combat
            | Self::Farming
            | Self::Mining
            | Self::Foraging
            | Self::Fishing
            | Self::Enchanting => true,
            Self::Alchemy => false,
        }
    }

    /// Display name of the ability.
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Combat => "Combat Prowess",
            Self::Farming => "Harvest Instinct",
            Self::Mining => "Prospector",
            Self::Foraging => "Lumberjack",
            Self::Fishing => "Angler",
            Self::Enchanting => "Arcane Focus",
            Self::Alchemy => "Brewmaster",
        }
    }
}

/// One ability instance with its coefficients.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PetAbility {
    pub kind: PetAbilityKind,
    pub primary_coefficient: f64,
    pub secondary_coefficient: f64,
}

impl PetAbility {
    /// Creates an ability with the family's default coefficients.
    pub const fn new(kind: PetAbilityKind) -> Self {
        let (primary, secondary) = kind.default_coefficients();
        Self {
            kind,
            primary_coefficient: primary,
            secondary_coefficient: secondary,
        }
    }

    /// Creates an ability with explicit coefficients.
    pub const fn with_coefficients(kind: PetAbilityKind, primary: f64, secondary: f64) -> Self {
        Self {
            kind,
            primary_coefficient: primary,
            secondary_coefficient: secondary,
        }
    }

    /// Computes `(kind, value)` for both stats.
    ///
    /// # Example
    /// ```
    /// # use progression_core::pets::{PetAbility, PetAbilityKind, PetRarity};
    /// # use progression_core::StatKind;
    /// let combat = PetAbility::new(PetAbilityKind::Combat);
    /// let [(primary, strength), (secondary, crit_damage)] =
    ///     combat.contributions(10, PetRarity::Rare);
    /// assert_eq!(primary, StatKind::Strength);
    /// assert!((strength - 1.5).abs() < 1e-9);      // 0.1 × 10 × 1.5
    /// assert_eq!(secondary, StatKind::CritDamage);
    /// assert!((crit_damage - 7.5).abs() < 1e-9);   // 0.005 × 10 × 100 × 1.5
    /// ```
    pub fn contributions(&self, level: u32, rarity: PetRarity) -> [(StatKind, f64); 2] {
        let (primary_kind, secondary_kind) = self.kind.stats();
        let level = level as f64;
        let multiplier = rarity.stat_multiplier();
        let percent_scale = if self.kind.secondary_is_percent() {
            100.0
        } else {
            1.0
        };

        let primary = self.primary_coefficient * level * multiplier;
        let secondary = self.secondary_coefficient * level * percent_scale * multiplier;

        [(primary_kind, primary), (secondary_kind, secondary)]
    }

    /// Adds this ability's contributions into `bag`.
    pub fn apply(&self, bag: &mut StatBag, level: u32, rarity: PetRarity) {
        for (kind, value) in self.contributions(level, rarity) {
            bag.add(kind, value);
        }
    }

    /// Human-readable lines: the ability name followed by one line per stat.
    pub fn describe(&self, level: u32, rarity: PetRarity) -> Vec<String> {
        let mut lines = vec![self.kind.display_name().to_string()];
        lines.extend(
            self.contributions(level, rarity)
                .iter()
                .map(|(kind, value)| format!("  {}", kind.format_line(*value))),
        );
        lines
    }
}

impl From<PetAbilityKind> for PetAbility {
    fn from(kind: PetAbilityKind) -> Self {
        Self::new(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use strum::IntoEnumIterator;

    const EPS: f64 = 1e-9;

    #[test]
    fn combat_reference_values() {
        let ability = PetAbility::with_coefficients(PetAbilityKind::Combat, 0.1, 0.005);
        let mut bag = StatBag::new();
        ability.apply(&mut bag, 10, PetRarity::Rare);

        assert!((bag.get(StatKind::Strength) - 1.5).abs() < EPS);
        assert!((bag.get(StatKind::CritDamage) - 7.5).abs() < EPS);
        assert_eq!(bag.len(), 2);
    }

    #[test]
    fn alchemy_secondary_is_not_percent_scaled() {
        let ability = PetAbility::new(PetAbilityKind::Alchemy);
        let mut bag = StatBag::new();
        ability.apply(&mut bag, 10, PetRarity::Common);

        assert!((bag.get(StatKind::Health) - 5.0).abs() < EPS);
        assert!((bag.get(StatKind::Intelligence) - 2.0).abs() < EPS);
    }

    #[test]
    fn foraging_primary_and_combat_primary_stack() {
        let mut bag = StatBag::new();
        PetAbility::new(PetAbilityKind::Combat).apply(&mut bag, 20, PetRarity::Common);
        PetAbility::new(PetAbilityKind::Foraging).apply(&mut bag, 20, PetRarity::Common);

        // 0.1 × 20 + 0.05 × 20
        assert!((bag.get(StatKind::Strength) - 3.0).abs() < EPS);
    }

    #[test]
    fn level_zero_contributes_nothing() {
        for kind in PetAbilityKind::iter() {
            let mut bag = StatBag::new();
            PetAbility::new(kind).apply(&mut bag, 0, PetRarity::Mythic);
            assert!(bag.is_empty(), "{kind} contributed at level 0");
        }
    }

    #[test]
    fn describe_lists_name_then_stats() {
        let lines = PetAbility::new(PetAbilityKind::Combat).describe(10, PetRarity::Rare);
        assert_eq!(
            lines,
            vec![
                "Combat Prowess".to_string(),
                "  Strength: +1.5".to_string(),
                "  Crit Damage: +7.5%".to_string(),
            ]
        );
    }

    #[test]
    fn families_feed_two_distinct_stats() {
        for kind in PetAbilityKind::iter() {
            let (primary, secondary) = kind.stats();
            assert_ne!(primary, secondary);
        }
    }

    fn ability_kind() -> impl Strategy<Value = PetAbilityKind> {
        (0..7usize).prop_map(|i| PetAbilityKind::iter().nth(i).unwrap())
    }

    fn pet_rarity() -> impl Strategy<Value = PetRarity> {
        (0..6u8).prop_map(PetRarity::by_tier)
    }

    proptest! {
        #[test]
        fn secondary_matches_scaling_rule(kind in ability_kind(), level in 0u32..=100, rarity in pet_rarity()) {
            let ability = PetAbility::new(kind);
            let [(_, primary), (_, secondary)] = ability.contributions(level, rarity);
            let (a, b) = kind.default_coefficients();
            let m = rarity.stat_multiplier();
            let scale = if kind.secondary_is_percent() { 100.0 } else { 1.0 };

            prop_assert!((primary - a * level as f64 * m).abs() < EPS);
            prop_assert!((secondary - b * level as f64 * scale * m).abs() < EPS);
        }

        #[test]
        fn contributions_are_linear_in_level(kind in ability_kind(), level in 1u32..=50, rarity in pet_rarity()) {
            let ability = PetAbility::new(kind);
            let single = ability.contributions(level, rarity);
            let double = ability.contributions(level * 2, rarity);
            for (one, two) in single.iter().zip(double.iter()) {
                prop_assert!((one.1 * 2.0 - two.1).abs() < 1e-6);
            }
        }

        #[test]
        fn higher_rarity_never_weaker(kind in ability_kind(), level in 1u32..=100, tier in 0u8..5) {
            let ability = PetAbility::new(kind);
            let low = ability.contributions(level, PetRarity::by_tier(tier));
            let high = ability.contributions(level, PetRarity::by_tier(tier + 1));
            for (lo, hi) in low.iter().zip(high.iter()) {
                prop_assert!(hi.1 >= lo.1);
            }
        }
    }
}
