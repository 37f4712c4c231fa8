//! Gameplay action → XP translation tables.

use std::collections::{BTreeMap, HashMap};

use super::SkillType;

/// Per-discipline tables of source key → XP per raw unit.
///
/// Source keys are matched case-insensitively. A key may appear under
/// several disciplines; one action then feeds each of them.
#[derive(Clone, Debug, Default)]
pub struct XpSourceTable {
    tables: BTreeMap<SkillType, HashMap<String, f64>>,
}

impl XpSourceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the XP granted per unit of `source` for `skill`.
    ///
    /// Non-finite or negative values are dropped with a warning.
    pub fn insert(&mut self, skill: SkillType, source: &str, xp_per_unit: f64) {
        if !xp_per_unit.is_finite() || xp_per_unit < 0.0 {
            tracing::warn!(
                "ignoring XP source '{}' for {}: invalid value {}",
                source,
                skill,
                xp_per_unit
            );
            return;
        }
        self.tables
            .entry(skill)
            .or_default()
            .insert(normalize_key(source), xp_per_unit);
    }

    /// Builder-style [`XpSourceTable::insert`].
    pub fn with(mut self, skill: SkillType, source: &str, xp_per_unit: f64) -> Self {
        self.insert(skill, source, xp_per_unit);
        self
    }

    /// XP per unit of `source` for one discipline.
    pub fn xp_per_unit(&self, skill: SkillType, source: &str) -> Option<f64> {
        self.tables
            .get(&skill)
            .and_then(|table| table.get(&normalize_key(source)))
            .copied()
    }

    /// Resolves `units` of `source` into `(discipline, xp)` awards.
    ///
    /// Unknown sources and non-positive unit counts award nothing.
    ///
    /// ```
    /// # use progression_core::skills::{SkillType, XpSourceTable};
    /// let table = XpSourceTable::new().with(SkillType::Mining, "coal_ore", 5.0);
    /// assert_eq!(table.awards("COAL_ORE", 3.0), vec![(SkillType::Mining, 15.0)]);
    /// assert!(table.awards("dirt", 3.0).is_empty());
    /// ```
    pub fn awards(&self, source: &str, units: f64) -> Vec<(SkillType, f64)> {
        if units.is_nan() || units <= 0.0 {
            return Vec::new();
        }
        let key = normalize_key(source);
        self.tables
            .iter()
            .filter_map(|(skill, table)| table.get(&key).map(|xp| (*skill, xp * units)))
            .collect()
    }

    /// Number of configured sources for one discipline.
    pub fn count(&self, skill: SkillType) -> usize {
        self.tables.get(&skill).map_or(0, HashMap::len)
    }

    pub fn is_empty(&self) -> bool {
        self.tables.values().all(HashMap::is_empty)
    }
}

fn normalize_key(key: &str) -> String {
    key.trim().to_ascii_lowercase()
}
