//! Skill curve and XP source loader.

use std::collections::BTreeMap;
use std::path::Path;

use progression_core::{SkillCurve, SkillCurves, SkillType, XpSourceTable};
use serde::Deserialize;

use crate::loaders::{LoadResult, parse_skill, read_file};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawSkills {
    thresholds: BTreeMap<String, u64>,
    overrides: BTreeMap<String, BTreeMap<String, u64>>,
    sources: BTreeMap<String, BTreeMap<String, f64>>,
}

/// Curves and action sources loaded from one skills file.
#[derive(Clone, Debug, Default)]
pub struct SkillTables {
    pub curves: SkillCurves,
    pub sources: XpSourceTable,
}

/// Loader for skill data from TOML files.
///
/// # Format
///
/// ```toml
/// [thresholds]          # level = cumulative XP
/// 1 = 50
/// 2 = 175
///
/// [overrides.runecrafting]
/// 1 = 50
///
/// [sources.mining]      # source = XP per unit
/// coal_ore = 5.0
/// ```
pub struct SkillLoader;

impl SkillLoader {
    /// Load skill tables from a TOML file.
    pub fn load(path: &Path) -> LoadResult<SkillTables> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse skill tables from TOML text.
    ///
    /// A corrupt curve (duplicate levels, decreasing thresholds) fails the
    /// load. Unknown disciplines and unparseable level keys are skipped with a
    /// warning; missing sections leave their tables empty.
    pub fn parse(content: &str) -> LoadResult<SkillTables> {
        let raw: RawSkills = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse skills TOML: {}", e))?;

        if raw.thresholds.is_empty() {
            tracing::warn!("skills file has no [thresholds]; every discipline stays at level 0");
        }
        let mut curves = SkillCurves::new(build_curve("thresholds", raw.thresholds)?);

        for (name, thresholds) in raw.overrides {
            let Some(skill) = parse_skill(&name, "overrides") else {
                continue;
            };
            curves = curves.with_override(skill, build_curve(&name, thresholds)?);
        }

        if raw.sources.is_empty() {
            tracing::warn!("skills file has no [sources]; actions award no XP");
        }
        let mut sources = XpSourceTable::new();
        for (name, table) in raw.sources {
            let Some(skill) = parse_skill(&name, "sources") else {
                continue;
            };
            for (source, xp) in table {
                sources.insert(skill, &source, xp);
            }
        }

        Ok(SkillTables { curves, sources })
    }
}

fn build_curve(name: &str, thresholds: BTreeMap<String, u64>) -> LoadResult<SkillCurve> {
    let mut entries: Vec<(u32, u64)> = thresholds
        .into_iter()
        .filter_map(|(level, xp)| match level.trim().parse::<u32>() {
            Ok(level) => Some((level, xp)),
            Err(_) => {
                tracing::warn!("curve '{}': level key '{}' is not a number", name, level);
                None
            }
        })
        .collect();
    // Keys arrive in string order ("10" < "2").
    entries.sort_by_key(|(level, _)| *level);

    SkillCurve::from_thresholds(entries)
        .map_err(|e| anyhow::anyhow!("Invalid XP curve '{}': {}", name, e))
}
