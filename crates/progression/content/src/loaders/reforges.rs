//! Reforge table loader.

use std::collections::BTreeMap;
use std::path::Path;

use progression_core::{ItemCategory, Rarity, Reforge, ReforgeCatalog, StatBag, StatKind};

use crate::loaders::{LoadResult, read_file};

/// `category -> id -> rarity -> stat -> value`, all keys as written.
type RawReforges = BTreeMap<String, BTreeMap<String, BTreeMap<String, BTreeMap<String, f64>>>>;

/// Loader for reforge tables from TOML files.
///
/// # Format
///
/// ```toml
/// [weapon.sharp]
/// common = { crit_chance = 10, crit_damage = 20 }
/// legendary = { crit_chance = 20, crit_damage = 75 }
/// ```
pub struct ReforgeLoader;

impl ReforgeLoader {
    /// Load a reforge catalog from a TOML file.
    pub fn load(path: &Path) -> LoadResult<ReforgeCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse a reforge catalog from TOML text.
    ///
    /// Unknown categories, rarities and stats are skipped with a warning.
    /// Categories absent from the file are left empty with a warning.
    pub fn parse(content: &str) -> LoadResult<ReforgeCatalog> {
        let raw: RawReforges = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse reforges TOML: {}", e))?;

        let mut catalog = ReforgeCatalog::new();
        for (category_key, reforges) in raw {
            let Ok(category) = category_key.parse::<ItemCategory>() else {
                tracing::warn!("unknown reforge category '{}' skipped", category_key);
                continue;
            };
            for (id, tiers) in reforges {
                catalog.insert(build_reforge(&id, category, tiers));
            }
        }

        for category in ItemCategory::ALL {
            if catalog.count(category) == 0 {
                tracing::warn!("no reforges configured for category {}", category);
            }
        }
        Ok(catalog)
    }
}

fn build_reforge(
    id: &str,
    category: ItemCategory,
    tiers: BTreeMap<String, BTreeMap<String, f64>>,
) -> Reforge {
    let mut reforge = Reforge::new(id, category);
    for (rarity_key, stats) in tiers {
        let rarity = match Rarity::from_str_strict(&rarity_key) {
            Ok(rarity) => rarity,
            Err(e) => {
                tracing::warn!("reforge '{}' ({}): {}; entry dropped", id, category, e);
                continue;
            }
        };
        reforge.set_stats(rarity, build_bag(id, stats));
    }
    reforge
}

fn build_bag(id: &str, stats: BTreeMap<String, f64>) -> StatBag {
    let mut bag = StatBag::new();
    for (key, value) in stats {
        match StatKind::parse_key(&key) {
            Some(kind) => bag.add(kind, value),
            None => tracing::warn!("reforge '{}': unknown stat '{}' dropped", id, key),
        }
    }
    bag
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
        [weapon.sharp]
        common = { crit_chance = 10, crit_damage = 20 }
        legendary = { crit_chance = 20.5 }
        ultra = { crit_chance = 99 }

        [weapon.odd]
        common = { crit_chance = 1, mana = 50 }

        [tool.sharp]
        rare = { mining_speed = 5 }

        [shield.sturdy]
        common = { defense = 10 }
    "#;

    #[test]
    fn test_parse_reforges() {
        let catalog = ReforgeLoader::parse(SAMPLE).unwrap();
        assert_eq!(catalog.count(ItemCategory::Weapon), 2);
        assert_eq!(catalog.count(ItemCategory::Tool), 1);
        assert_eq!(catalog.count(ItemCategory::Armor), 0);

        let sharp = catalog.reforge("SHARP", ItemCategory::Weapon).unwrap();
        assert_eq!(sharp.stats(Rarity::Common).unwrap().get(StatKind::CritDamage), 20.0);
        assert_eq!(sharp.stats(Rarity::Legendary).unwrap().get(StatKind::CritChance), 20.5);
    }

    #[test]
    fn test_unknown_rarity_and_stat_dropped() {
        let catalog = ReforgeLoader::parse(SAMPLE).unwrap();
        let sharp = catalog.reforge("sharp", ItemCategory::Weapon).unwrap();
        assert_eq!(sharp.rarities().collect::<Vec<_>>(), vec![Rarity::Common, Rarity::Legendary]);

        let odd = catalog.reforge("odd", ItemCategory::Weapon).unwrap();
        assert_eq!(odd.stats(Rarity::Common).unwrap().len(), 1);
    }

    #[test]
    fn test_malformed_file_fails() {
        assert!(ReforgeLoader::parse("[weapon.sharp]\ncommon = 5").is_err());
    }
}
