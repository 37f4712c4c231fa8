//! XP application and level-up detection.
//!
//! The engine is stateless apart from its listener: per-entity progress is
//! passed in by the owner and the tables come from the caller's [`Catalogs`]
//! snapshot. Callers that cache derived stats must invalidate them when the
//! returned outcome [`changed`](XpOutcome::changed) anything;
//! [`crate::ProgressionService`] does this automatically.

use std::sync::Arc;

use crate::catalog::Catalogs;
use crate::entity::EntityId;
use crate::events::{NullListener, ProgressionEvent, ProgressionListener};

use super::{SkillCurve, SkillSet, SkillType};

/// Why an XP award was dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum XpSkipReason {
    /// Amount was zero, negative or NaN.
    NonPositive,
    /// The discipline is administratively disabled.
    Disabled,
    /// The entity already sits at the discipline's level cap.
    MaxLevel,
}

/// Result of one [`ProgressionEngine::add_xp`] call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum XpOutcome {
    Skipped(XpSkipReason),
    Applied {
        skill: SkillType,
        amount: f64,
        total_xp: f64,
        old_level: u32,
        new_level: u32,
        progress: f64,
    },
}

impl XpOutcome {
    /// Returns true if progress was mutated.
    pub fn changed(&self) -> bool {
        matches!(self, Self::Applied { .. })
    }

    pub fn leveled_up(&self) -> bool {
        matches!(self, Self::Applied { old_level, new_level, .. } if new_level > old_level)
    }
}

/// Applies XP to skill sets and announces the results.
#[derive(Clone)]
pub struct ProgressionEngine {
    listener: Arc<dyn ProgressionListener>,
}

impl ProgressionEngine {
    pub fn new(listener: Arc<dyn ProgressionListener>) -> Self {
        Self { listener }
    }

    /// Engine that announces nothing.
    pub fn silent() -> Self {
        Self::new(Arc::new(NullListener))
    }

    /// Adds `amount` XP to `skill`.
    ///
    /// No-op when the amount is not positive, the discipline is disabled, or
    /// the entity is already at the cap. Otherwise the new level is resolved
    /// from the discipline's curve, clamped to the cap and never lowered. A
    /// [`ProgressionEvent::LevelUp`] is emitted when the level rose, then an
    /// [`ProgressionEvent::XpGain`] in every applied case.
    pub fn add_xp(
        &self,
        catalogs: &Catalogs,
        entity: EntityId,
        skills: &mut SkillSet,
        skill: SkillType,
        amount: f64,
    ) -> XpOutcome {
        if amount.is_nan() || amount <= 0.0 {
            return XpOutcome::Skipped(XpSkipReason::NonPositive);
        }
        if !catalogs.config.is_enabled(skill) {
            tracing::debug!("{} XP for {} ignored: discipline disabled", skill, entity);
            return XpOutcome::Skipped(XpSkipReason::Disabled);
        }

        let max_level = skill.max_level();
        let progress = skills.entry(skill);
        let old_level = progress.level();
        if old_level >= max_level {
            return XpOutcome::Skipped(XpSkipReason::MaxLevel);
        }

        let curve = catalogs.curves.curve_for(skill);
        let total_xp = progress.xp() + amount;
        let new_level = curve
            .calculate_level(total_xp)
            .min(max_level)
            .max(old_level);
        progress.set(total_xp, new_level);
        let percent = capped_progress(curve, skill, total_xp, new_level);

        if new_level > old_level {
            self.listener.on_event(&ProgressionEvent::LevelUp {
                entity,
                skill,
                old_level,
                new_level,
            });
        }
        self.listener.on_event(&ProgressionEvent::XpGain {
            entity,
            skill,
            amount,
            total_xp,
            level: new_level,
            progress: percent,
        });

        XpOutcome::Applied {
            skill,
            amount,
            total_xp,
            old_level,
            new_level,
            progress: percent,
        }
    }

    /// Translates `units` of a gameplay `source` into XP for every discipline
    /// that lists it, applying each award through [`Self::add_xp`].
    pub fn record_action(
        &self,
        catalogs: &Catalogs,
        entity: EntityId,
        skills: &mut SkillSet,
        source: &str,
        units: f64,
    ) -> Vec<XpOutcome> {
        let awards = catalogs.sources.awards(source, units);
        if awards.is_empty() {
            tracing::debug!("action '{}' by {} awards no XP", source, entity);
        }
        awards
            .into_iter()
            .map(|(skill, xp)| self.add_xp(catalogs, entity, skills, skill, xp))
            .collect()
    }

    /// Percent toward the next level for one discipline.
    pub fn progress(&self, catalogs: &Catalogs, skills: &SkillSet, skill: SkillType) -> f64 {
        let progress = skills.get(skill);
        capped_progress(
            catalogs.curves.curve_for(skill),
            skill,
            progress.xp(),
            progress.level(),
        )
    }
}

/// A capped discipline reads 100% even when its curve continues past the cap.
fn capped_progress(curve: &SkillCurve, skill: SkillType, xp: f64, level: u32) -> f64 {
    if level >= skill.max_level() {
        100.0
    } else {
        curve.progress_to_next_level(xp, level)
    }
}

impl std::fmt::Debug for ProgressionEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProgressionEngine").finish_non_exhaustive()
    }
}
