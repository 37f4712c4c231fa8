//! Per-entity skill state.

use std::collections::BTreeMap;

use crate::stats::StatBag;

use super::{SkillCurve, SkillType};

/// Cumulative XP and the level resolved from it.
///
/// XP never decreases and the cached level never decreases. Mutation goes
/// through [`super::ProgressionEngine`]; [`SkillProgress::restore`] rebuilds
/// the state from a stored XP total.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillProgress {
    xp: f64,
    level: u32,
}

impl SkillProgress {
    /// Rebuilds progress from a stored XP total.
    pub fn restore(xp: f64, curve: &SkillCurve, max_level: u32) -> Self {
        let xp = if xp.is_finite() { xp.max(0.0) } else { 0.0 };
        Self {
            xp,
            level: curve.calculate_level(xp).min(max_level),
        }
    }

    #[inline]
    pub fn xp(&self) -> f64 {
        self.xp
    }

    #[inline]
    pub fn level(&self) -> u32 {
        self.level
    }

    pub(crate) fn set(&mut self, xp: f64, level: u32) {
        debug_assert!(xp >= self.xp, "skill XP must not decrease");
        debug_assert!(level >= self.level, "skill level must not decrease");
        self.xp = xp;
        self.level = level;
    }
}

/// All disciplines of one entity. Untouched disciplines read as level 0.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillSet {
    skills: BTreeMap<SkillType, SkillProgress>,
}

impl SkillSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Progress for `skill`, zeroed if never trained.
    pub fn get(&self, skill: SkillType) -> SkillProgress {
        self.skills.get(&skill).copied().unwrap_or_default()
    }

    pub fn level(&self, skill: SkillType) -> u32 {
        self.get(skill).level()
    }

    pub fn xp(&self, skill: SkillType) -> f64 {
        self.get(skill).xp()
    }

    /// Builder: installs stored progress for one discipline.
    pub fn with(mut self, skill: SkillType, progress: SkillProgress) -> Self {
        self.skills.insert(skill, progress);
        self
    }

    pub(crate) fn entry(&mut self, skill: SkillType) -> &mut SkillProgress {
        self.skills.entry(skill).or_default()
    }

    /// Trained disciplines in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (SkillType, SkillProgress)> + '_ {
        self.skills.iter().map(|(skill, progress)| (*skill, *progress))
    }

    /// Sum of every discipline's passive bonus at its current level.
    pub fn passive_bonus(&self) -> StatBag {
        self.skills
            .iter()
            .map(|(skill, progress)| skill.passive_bonus(progress.level()))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::StatKind;

    fn curve() -> SkillCurve {
        SkillCurve::from_thresholds([(1, 100), (2, 300), (3, 600)]).unwrap()
    }

    #[test]
    fn restore_resolves_and_caps_level() {
        let progress = SkillProgress::restore(450.0, &curve(), 60);
        assert_eq!(progress.level(), 2);
        assert_eq!(progress.xp(), 450.0);

        let capped = SkillProgress::restore(10_000.0, &curve(), 2);
        assert_eq!(capped.level(), 2);

        let sanitized = SkillProgress::restore(f64::NAN, &curve(), 60);
        assert_eq!(sanitized, SkillProgress::default());
    }

    #[test]
    fn passive_bonus_sums_disciplines() {
        let set = SkillSet::new()
            .with(SkillType::Farming, SkillProgress::restore(300.0, &curve(), 60))
            .with(SkillType::Fishing, SkillProgress::restore(100.0, &curve(), 50))
            .with(SkillType::Social, SkillProgress::restore(600.0, &curve(), 25));

        let bonus = set.passive_bonus();
        // farming 2 × 2 health + fishing 1 × 2 health
        assert_eq!(bonus.get(StatKind::Health), 6.0);
        assert_eq!(bonus.get(StatKind::FarmingFortune), 8.0);
        assert_eq!(bonus.len(), 2);
    }

    #[test]
    fn untrained_skill_reads_zero() {
        let set = SkillSet::new();
        assert_eq!(set.level(SkillType::Combat), 0);
        assert_eq!(set.xp(SkillType::Combat), 0.0);
        assert!(set.passive_bonus().is_empty());
    }
}
