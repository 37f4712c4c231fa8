//! Cumulative XP curves.
//!
//! A curve is an ordered table of `(level, cumulative XP threshold)` pairs.
//! Level resolution picks the greatest level whose threshold has been reached;
//! XP below every threshold resolves to level 0.

use std::collections::HashMap;

use crate::error::{ErrorSeverity, GameError};

use super::SkillType;

/// Load-time violations of the curve ordering invariants.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CurveError {
    #[error("curve levels must be strictly ascending: level {level} follows {previous}")]
    UnsortedLevels { previous: u32, level: u32 },

    #[error(
        "curve thresholds must not decrease: level {level} needs {threshold} XP, below {previous}"
    )]
    DecreasingThreshold {
        level: u32,
        threshold: u64,
        previous: u64,
    },
}

impl GameError for CurveError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnsortedLevels { .. } => "CURVE_UNSORTED_LEVELS",
            Self::DecreasingThreshold { .. } => "CURVE_DECREASING_THRESHOLD",
        }
    }
}

/// Validated level → cumulative XP table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SkillCurve {
    entries: Vec<(u32, u64)>,
}

impl SkillCurve {
    /// Builds a curve from `(level, threshold)` pairs in table order.
    ///
    /// Levels must be strictly ascending and thresholds non-decreasing;
    /// anything else is a corrupt table and is rejected.
    pub fn from_thresholds<I>(thresholds: I) -> Result<Self, CurveError>
    where
        I: IntoIterator<Item = (u32, u64)>,
    {
        let entries: Vec<(u32, u64)> = thresholds.into_iter().collect();
        for pair in entries.windows(2) {
            let (previous_level, previous_xp) = pair[0];
            let (level, threshold) = pair[1];
            if level <= previous_level {
                return Err(CurveError::UnsortedLevels {
                    previous: previous_level,
                    level,
                });
            }
            if threshold < previous_xp {
                return Err(CurveError::DecreasingThreshold {
                    level,
                    threshold,
                    previous: previous_xp,
                });
            }
        }
        Ok(Self { entries })
    }

    /// Builds a curve where level `n` requires the sum of the first `n`
    /// per-level costs.
    pub fn from_level_costs(costs: &[u64]) -> Self {
        let mut total = 0u64;
        let entries = costs
            .iter()
            .enumerate()
            .map(|(idx, cost)| {
                total = total.saturating_add(*cost);
                (idx as u32 + 1, total)
            })
            .collect();
        Self { entries }
    }

    /// Greatest level whose threshold is `≤ total_xp`; 0 below every threshold.
    ///
    /// ```
    /// # use progression_core::skills::SkillCurve;
    /// let curve = SkillCurve::from_thresholds([(1, 100), (2, 300), (3, 600)]).unwrap();
    /// assert_eq!(curve.calculate_level(99.0), 0);
    /// assert_eq!(curve.calculate_level(300.0), 2);
    /// assert_eq!(curve.calculate_level(1e9), 3);
    /// ```
    pub fn calculate_level(&self, total_xp: f64) -> u32 {
        let reached = self
            .entries
            .partition_point(|(_, threshold)| *threshold as f64 <= total_xp);
        if reached == 0 {
            0
        } else {
            self.entries[reached - 1].0
        }
    }

    /// Cumulative XP needed for `level`; 0 if the level is not in the table.
    pub fn xp_for_level(&self, level: u32) -> u64 {
        self.threshold(level).unwrap_or(0)
    }

    /// Cumulative XP needed for `level + 1`; 0 past the table's top.
    pub fn xp_for_next_level(&self, level: u32) -> u64 {
        level
            .checked_add(1)
            .and_then(|next| self.threshold(next))
            .unwrap_or(0)
    }

    /// Percent progress from `current_level` toward the next level, in `[0, 100]`.
    ///
    /// Returns 100 at the top of the table, or when the next threshold does not
    /// exceed the current one.
    pub fn progress_to_next_level(&self, current_xp: f64, current_level: u32) -> f64 {
        let current = self.xp_for_level(current_level);
        let next = self.xp_for_next_level(current_level);
        if next <= current {
            return 100.0;
        }
        let span = (next - current) as f64;
        let into = current_xp - current as f64;
        (into / span * 100.0).clamp(0.0, 100.0)
    }

    /// Highest level in the table (0 for an empty curve).
    pub fn top_level(&self) -> u32 {
        self.entries.last().map_or(0, |(level, _)| *level)
    }

    /// Table entries in level order.
    pub fn entries(&self) -> &[(u32, u64)] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn threshold(&self, level: u32) -> Option<u64> {
        self.entries
            .binary_search_by_key(&level, |(l, _)| *l)
            .ok()
            .map(|idx| self.entries[idx].1)
    }
}

/// Shared default curve plus per-discipline overrides.
#[derive(Clone, Debug, Default)]
pub struct SkillCurves {
    default: SkillCurve,
    overrides: HashMap<SkillType, SkillCurve>,
}

impl SkillCurves {
    pub fn new(default: SkillCurve) -> Self {
        Self {
            default,
            overrides: HashMap::new(),
        }
    }

    /// Builder: replaces the curve for one discipline.
    pub fn with_override(mut self, skill: SkillType, curve: SkillCurve) -> Self {
        self.overrides.insert(skill, curve);
        self
    }

    /// Curve used by `skill`.
    pub fn curve_for(&self, skill: SkillType) -> &SkillCurve {
        self.overrides.get(&skill).unwrap_or(&self.default)
    }

    pub fn default_curve(&self) -> &SkillCurve {
        &self.default
    }

    /// Disciplines with a dedicated curve.
    pub fn overridden(&self) -> impl Iterator<Item = SkillType> + '_ {
        self.overrides.keys().copied()
    }
}
