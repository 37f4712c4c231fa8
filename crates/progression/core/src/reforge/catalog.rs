//! Reforge definitions and the per-category catalog.

use std::collections::BTreeMap;

use rand::Rng;

use crate::rarity::Rarity;
use crate::stats::StatBag;

use super::{ItemCategory, ReforgeError};

/// A named modifier granting a rarity-dependent stat bag.
///
/// The category is fixed at construction. Rarities without an entry grant
/// nothing.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Reforge {
    id: String,
    category: ItemCategory,
    stats: BTreeMap<Rarity, StatBag>,
}

impl Reforge {
    /// Creates a reforge with no stat entries. The id is stored uppercased.
    pub fn new(id: impl AsRef<str>, category: ItemCategory) -> Self {
        Self {
            id: normalize_id(id.as_ref()),
            category,
            stats: BTreeMap::new(),
        }
    }

    /// Builder: sets the bag granted at `rarity`.
    pub fn with_stats(mut self, rarity: Rarity, stats: StatBag) -> Self {
        self.set_stats(rarity, stats);
        self
    }

    /// Sets the bag granted at `rarity`; an empty bag removes the entry.
    pub fn set_stats(&mut self, rarity: Rarity, stats: StatBag) {
        if stats.is_empty() {
            self.stats.remove(&rarity);
        } else {
            self.stats.insert(rarity, stats);
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn category(&self) -> ItemCategory {
        self.category
    }

    /// Stored bag for `rarity`, if any.
    pub fn stats(&self, rarity: Rarity) -> Option<&StatBag> {
        self.stats.get(&rarity)
    }

    /// Rarities with a configured bag, in tier order.
    pub fn rarities(&self) -> impl Iterator<Item = Rarity> + '_ {
        self.stats.keys().copied()
    }

    /// Returns true if this reforge may be applied to items of `category`.
    pub fn applies_to(&self, category: ItemCategory) -> bool {
        self.category == category
    }
}

/// Four disjoint reforge tables, one per [`ItemCategory`].
///
/// Ids are unique within a category only; `"SHARP"` may exist for both
/// weapons and tools. Tables are ordered by id so seeded selection is
/// reproducible.
#[derive(Clone, Debug, Default)]
pub struct ReforgeCatalog {
    tables: BTreeMap<ItemCategory, BTreeMap<String, Reforge>>,
}

impl ReforgeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a reforge to its category table, returning any reforge it replaced.
    pub fn insert(&mut self, reforge: Reforge) -> Option<Reforge> {
        let category = reforge.category();
        let replaced = self
            .tables
            .entry(category)
            .or_default()
            .insert(reforge.id().to_string(), reforge);
        if let Some(old) = &replaced {
            tracing::warn!(
                "duplicate reforge '{}' in category {}; keeping the last definition",
                old.id(),
                category
            );
        }
        replaced
    }

    /// Builder-style [`ReforgeCatalog::insert`].
    pub fn with(mut self, reforge: Reforge) -> Self {
        self.insert(reforge);
        self
    }

    /// Case-insensitive lookup within one category.
    pub fn reforge(&self, id: &str, category: ItemCategory) -> Result<&Reforge, ReforgeError> {
        self.tables
            .get(&category)
            .and_then(|table| table.get(&normalize_id(id)))
            .ok_or_else(|| ReforgeError::NotFound {
                id: id.to_string(),
                category,
            })
    }

    /// Uniform pick among the category's reforges.
    ///
    /// ```
    /// # use progression_core::reforge::{ItemCategory, Reforge, ReforgeCatalog, ReforgeError};
    /// let catalog = ReforgeCatalog::new().with(Reforge::new("sharp", ItemCategory::Weapon));
    /// let mut rng = rand::thread_rng();
    /// assert_eq!(catalog.random_reforge(ItemCategory::Weapon, &mut rng).unwrap().id(), "SHARP");
    /// assert_eq!(
    ///     catalog.random_reforge(ItemCategory::Armor, &mut rng),
    ///     Err(ReforgeError::NoneAvailable(ItemCategory::Armor))
    /// );
    /// ```
    pub fn random_reforge<R: Rng + ?Sized>(
        &self,
        category: ItemCategory,
        rng: &mut R,
    ) -> Result<&Reforge, ReforgeError> {
        let table = self
            .tables
            .get(&category)
            .filter(|table| !table.is_empty())
            .ok_or(ReforgeError::NoneAvailable(category))?;
        let idx = rng.gen_range(0..table.len());
        table
            .values()
            .nth(idx)
            .ok_or(ReforgeError::NoneAvailable(category))
    }

    /// Rolls a new reforge for an item that currently carries `current`.
    ///
    /// When the category holds more than one reforge the current one is
    /// excluded, so a reroll always changes the outcome. With exactly one
    /// reforge configured that reforge is returned again.
    pub fn reroll<R: Rng + ?Sized>(
        &self,
        current: Option<&str>,
        category: ItemCategory,
        rng: &mut R,
    ) -> Result<&Reforge, ReforgeError> {
        let Some(current) = current.map(normalize_id) else {
            return self.random_reforge(category, rng);
        };
        let table = self
            .tables
            .get(&category)
            .filter(|table| !table.is_empty())
            .ok_or(ReforgeError::NoneAvailable(category))?;
        if table.len() == 1 {
            return self.random_reforge(category, rng);
        }

        let candidates: Vec<&Reforge> = table.values().filter(|r| r.id() != current).collect();
        let idx = rng.gen_range(0..candidates.len());
        Ok(candidates[idx])
    }

    /// Stored bag for `rarity`, or an empty bag.
    pub fn stats_for(&self, reforge: &Reforge, rarity: Rarity) -> StatBag {
        reforge.stats(rarity).cloned().unwrap_or_default()
    }

    /// Exact category match; no cross-category application.
    pub fn can_apply(&self, reforge: &Reforge, item_category: ItemCategory) -> bool {
        reforge.applies_to(item_category)
    }

    /// Reforges of one category, ordered by id.
    pub fn reforges(&self, category: ItemCategory) -> impl Iterator<Item = &Reforge> + '_ {
        self.tables
            .get(&category)
            .into_iter()
            .flat_map(|table| table.values())
    }

    /// Number of reforges in one category.
    pub fn count(&self, category: ItemCategory) -> usize {
        self.tables.get(&category).map_or(0, BTreeMap::len)
    }

    /// Total number of reforges across all categories.
    pub fn len(&self) -> usize {
        self.tables.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn normalize_id(id: &str) -> String {
    id.trim().to_ascii_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorSeverity, GameError};
    use crate::stats::StatKind;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashSet;

    fn catalog() -> ReforgeCatalog {
        ReforgeCatalog::new()
            .with(
                Reforge::new("sharp", ItemCategory::Weapon)
                    .with_stats(Rarity::Common, StatBag::new().with(StatKind::CritChance, 10.0))
                    .with_stats(Rarity::Legendary, StatBag::new().with(StatKind::CritChance, 20.0)),
            )
            .with(
                Reforge::new("Spicy", ItemCategory::Weapon)
                    .with_stats(Rarity::Common, StatBag::new().with(StatKind::CritDamage, 25.0)),
            )
            .with(Reforge::new("FIERCE", ItemCategory::Weapon))
            .with(
                Reforge::new("sharp", ItemCategory::Tool)
                    .with_stats(Rarity::Rare, StatBag::new().with(StatKind::MiningSpeed, 5.0)),
            )
            .with(Reforge::new("pure", ItemCategory::Armor))
    }

    #[test]
    fn lookup_is_case_insensitive_and_per_category() {
        let catalog = catalog();
        let weapon = catalog.reforge("SHARP", ItemCategory::Weapon).unwrap();
        let tool = catalog.reforge("Sharp", ItemCategory::Tool).unwrap();
        assert_eq!(weapon.category(), ItemCategory::Weapon);
        assert_eq!(tool.category(), ItemCategory::Tool);
        assert_ne!(weapon, tool);
        assert_eq!(catalog.count(ItemCategory::Weapon), 3);
        assert_eq!(catalog.len(), 5);
    }

    #[test]
    fn unknown_id_is_not_found() {
        let err = catalog()
            .reforge("UNKNOWN_ID", ItemCategory::Weapon)
            .unwrap_err();
        assert_eq!(
            err,
            ReforgeError::NotFound {
                id: "UNKNOWN_ID".to_string(),
                category: ItemCategory::Weapon
            }
        );
        assert_eq!(err.error_code(), "REFORGE_NOT_FOUND");
        assert_eq!(err.severity(), ErrorSeverity::Validation);
    }

    #[test]
    fn empty_category_reports_none_available() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let err = catalog()
            .random_reforge(ItemCategory::Accessory, &mut rng)
            .unwrap_err();
        assert_eq!(err, ReforgeError::NoneAvailable(ItemCategory::Accessory));
        assert!(err.severity().is_recoverable());
    }

    #[test]
    fn random_reforge_stays_in_category_and_covers_table() {
        let catalog = catalog();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut seen = HashSet::new();
        for _ in 0..200 {
            let reforge = catalog.random_reforge(ItemCategory::Weapon, &mut rng).unwrap();
            assert_eq!(reforge.category(), ItemCategory::Weapon);
            seen.insert(reforge.id().to_string());
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn seeded_selection_is_reproducible() {
        let catalog = catalog();
        let roll = |seed| {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            (0..10)
                .map(|_| {
                    catalog
                        .random_reforge(ItemCategory::Weapon, &mut rng)
                        .unwrap()
                        .id()
                        .to_string()
                })
                .collect::<Vec<_>>()
        };
        assert_eq!(roll(9), roll(9));
    }

    #[test]
    fn reroll_never_repeats_when_alternatives_exist() {
        let catalog = catalog();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..100 {
            let next = catalog
                .reroll(Some("sharp"), ItemCategory::Weapon, &mut rng)
                .unwrap();
            assert_ne!(next.id(), "SHARP");
        }
    }

    #[test]
    fn reroll_with_single_reforge_returns_it() {
        let catalog = catalog();
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let next = catalog
            .reroll(Some("PURE"), ItemCategory::Armor, &mut rng)
            .unwrap();
        assert_eq!(next.id(), "PURE");
    }

    #[test]
    fn stats_for_missing_rarity_is_empty() {
        let catalog = catalog();
        let sharp = catalog.reforge("sharp", ItemCategory::Weapon).unwrap();
        assert_eq!(
            catalog.stats_for(sharp, Rarity::Legendary).get(StatKind::CritChance),
            20.0
        );
        assert!(catalog.stats_for(sharp, Rarity::Epic).is_empty());
        assert_eq!(sharp.rarities().collect::<Vec<_>>(), vec![Rarity::Common, Rarity::Legendary]);
    }

    #[test]
    fn can_apply_requires_exact_category() {
        let catalog = catalog();
        let sharp = catalog.reforge("sharp", ItemCategory::Weapon).unwrap();
        assert!(catalog.can_apply(sharp, ItemCategory::Weapon));
        for category in [ItemCategory::Armor, ItemCategory::Tool, ItemCategory::Accessory] {
            assert!(!catalog.can_apply(sharp, category));
        }
    }

    #[test]
    fn insert_replaces_duplicate_id() {
        let mut catalog = catalog();
        let replaced = catalog.insert(Reforge::new("SPICY", ItemCategory::Weapon));
        assert!(replaced.is_some());
        assert_eq!(catalog.count(ItemCategory::Weapon), 3);
        let spicy = catalog.reforge("spicy", ItemCategory::Weapon).unwrap();
        assert!(spicy.stats(Rarity::Common).is_none());
    }
}
