//! Disciplines and their fixed metadata.

use crate::stats::{StatBag, StatKind};

/// A progression track with its own XP curve and level cap.
#[derive(
    Clone,
    Copy,
    Debug,
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
pub enum SkillType {
    Mining,
    Farming,
    Combat,
    Foraging,
    Fishing,
    Enchanting,
    Alchemy,
    Runecrafting,
    Social,
    Carpentry,
    Taming,
}

impl SkillType {
    pub const ALL: [SkillType; 11] = [
        SkillType::Mining,
        SkillType::Farming,
        SkillType::Combat,
        SkillType::Foraging,
        SkillType::Fishing,
        SkillType::Enchanting,
        SkillType::Alchemy,
        SkillType::Runecrafting,
        SkillType::Social,
        SkillType::Carpentry,
        SkillType::Taming,
    ];

    /// Level cap for this discipline.
    pub const fn max_level(&self) -> u32 {
        match self {
            Self::Farming | Self::Mining | Self::Combat | Self::Enchanting => 60,
            Self::Foraging | Self::Fishing | Self::Alchemy | Self::Carpentry | Self::Taming => 50,
            Self::Runecrafting | Self::Social => 25,
        }
    }

    /// Cosmetic disciplines track levels but grant no stats.
    pub const fn is_cosmetic(&self) -> bool {
        matches!(self, Self::Runecrafting | Self::Social | Self::Carpentry)
    }

    /// Display name ("Runecrafting").
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Mining => "Mining",
            Self::Farming => "Farming",
            Self::Combat => "Combat",
            Self::Foraging => "Foraging",
            Self::Fishing => "Fishing",
            Self::Enchanting => "Enchanting",
            Self::Alchemy => "Alchemy",
            Self::Runecrafting => "Runecrafting",
            Self::Social => "Social",
            Self::Carpentry => "Carpentry",
            Self::Taming => "Taming",
        }
    }

    /// Stats granted per level.
    pub fn passive_per_level(&self) -> StatBag {
        let bag = StatBag::new();
        match self {
            Self::Combat => bag.with(StatKind::CritChance, 0.5),
            Self::Farming => bag
                .with(StatKind::FarmingFortune, 4.0)
                .with(StatKind::Health, 2.0),
            Self::Mining => bag
                .with(StatKind::MiningFortune, 4.0)
                .with(StatKind::Defense, 1.0),
            Self::Foraging => bag
                .with(StatKind::ForagingFortune, 4.0)
                .with(StatKind::Strength, 1.0),
            Self::Fishing => bag.with(StatKind::Health, 2.0),
            Self::Enchanting | Self::Alchemy => bag.with(StatKind::Intelligence, 1.0),
            Self::Taming => bag.with(StatKind::PetLuck, 1.0),
            Self::Runecrafting | Self::Social | Self::Carpentry => bag,
        }
    }

    /// Passive bonus at `level` (clamped to the level cap).
    ///
    /// ```
    /// # use progression_core::{SkillType, StatKind};
    /// let bonus = SkillType::Combat.passive_bonus(10);
    /// assert_eq!(bonus.get(StatKind::CritChance), 5.0);
    /// assert!(SkillType::Social.passive_bonus(25).is_empty());
    /// ```
    pub fn passive_bonus(&self, level: u32) -> StatBag {
        let level = level.min(self.max_level());
        self.passive_per_level().scale(level as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_levels() {
        assert_eq!(SkillType::Farming.max_level(), 60);
        assert_eq!(SkillType::Taming.max_level(), 50);
        assert_eq!(SkillType::Runecrafting.max_level(), 25);
        assert_eq!(SkillType::Social.max_level(), 25);
    }

    #[test]
    fn cosmetic_disciplines_grant_nothing() {
        for skill in SkillType::ALL {
            assert_eq!(skill.is_cosmetic(), skill.passive_per_level().is_empty(), "{skill}");
        }
    }

    #[test]
    fn passive_bonus_scales_and_caps() {
        let farming = SkillType::Farming.passive_bonus(10);
        assert_eq!(farming.get(StatKind::FarmingFortune), 40.0);
        assert_eq!(farming.get(StatKind::Health), 20.0);

        let capped = SkillType::Runecrafting.passive_bonus(1_000);
        assert!(capped.is_empty());
        let combat = SkillType::Combat.passive_bonus(1_000);
        assert_eq!(combat.get(StatKind::CritChance), 30.0);
        assert!(SkillType::Combat.passive_bonus(0).is_empty());
    }

    #[test]
    fn parses_config_names() {
        assert_eq!("RUNECRAFTING".parse::<SkillType>(), Ok(SkillType::Runecrafting));
        assert_eq!(SkillType::Enchanting.to_string(), "enchanting");
    }
}
