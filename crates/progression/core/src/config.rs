use std::collections::BTreeSet;

use crate::skills::SkillType;

/// Engine-wide tunables.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineConfig {
    /// Disciplines that ignore all incoming XP.
    pub disabled_skills: BTreeSet<SkillType>,
    /// Pet levels are clamped to `1..=max_pet_level` before scaling.
    pub max_pet_level: u32,
}

impl EngineConfig {
    pub const DEFAULT_MAX_PET_LEVEL: u32 = crate::pets::DEFAULT_MAX_PET_LEVEL;

    pub fn new() -> Self {
        Self {
            disabled_skills: BTreeSet::new(),
            max_pet_level: Self::DEFAULT_MAX_PET_LEVEL,
        }
    }

    /// Builder: disables XP gain for `skill`.
    pub fn with_disabled(mut self, skill: SkillType) -> Self {
        self.disabled_skills.insert(skill);
        self
    }

    pub fn is_enabled(&self, skill: SkillType) -> bool {
        !self.disabled_skills.contains(&skill)
    }

    /// Clamps a pet level into `1..=max_pet_level`.
    pub fn clamp_pet_level(&self, level: u32) -> u32 {
        level.clamp(1, self.max_pet_level.max(1))
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pet_level_clamp() {
        let config = EngineConfig::new();
        assert_eq!(config.clamp_pet_level(0), 1);
        assert_eq!(config.clamp_pet_level(57), 57);
        assert_eq!(config.clamp_pet_level(250), 100);

        let degenerate = EngineConfig {
            max_pet_level: 0,
            ..EngineConfig::new()
        };
        assert_eq!(degenerate.clamp_pet_level(10), 1);
    }

    #[test]
    fn disabled_skills() {
        let config = EngineConfig::new().with_disabled(SkillType::Social);
        assert!(!config.is_enabled(SkillType::Social));
        assert!(config.is_enabled(SkillType::Combat));
    }
}
