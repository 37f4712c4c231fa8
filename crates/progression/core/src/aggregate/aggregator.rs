//! Effective stat computation with a per-entity pull cache.
//!
//! ```text
//!   equipment.base ⊕ reforge(rarity)   active pet abilities   skill passives
//!                 \                          |                    /
//!                  └────────────── StatBreakdown::total ─────────┘
//!                                          ↓
//!                         cache[entity] = (Arc<StatBag>, dirty)
//! ```
//!
//! Invalidation only flips a flag; the bag is rebuilt on the next query. The
//! aggregator does not observe upstream state, so every mutation of
//! equipment, reforges, companions or skills must be followed by
//! [`StatAggregator::invalidate`] before the next query.

use std::collections::HashMap;
use std::sync::Arc;

use crate::catalog::Catalogs;
use crate::entity::EntityId;
use crate::stats::StatBag;

use super::profile::{EntityProfile, EquippedItem};

/// Per-source contributions for one entity.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StatBreakdown {
    pub equipment: StatBag,
    pub reforges: StatBag,
    pub pets: StatBag,
    pub skills: StatBag,
}

impl StatBreakdown {
    /// Computes every source from the profile and the catalogs.
    pub fn compute(catalogs: &Catalogs, profile: &EntityProfile) -> Self {
        let equipment = profile.equipment.iter().map(|item| &item.base).sum();
        let reforges = profile
            .equipment
            .iter()
            .map(|item| reforge_bonus(catalogs, item))
            .sum();

        let mut pets = StatBag::new();
        for companion in profile.companions.iter().filter(|c| c.active) {
            let level = catalogs.config.clamp_pet_level(companion.level);
            pets.merge(
                &catalogs
                    .pets
                    .contribution(&companion.species, level, companion.rarity),
            );
        }

        Self {
            equipment,
            reforges,
            pets,
            skills: profile.skills.passive_bonus(),
        }
    }

    /// Sum of all sources.
    pub fn total(&self) -> StatBag {
        [&self.equipment, &self.reforges, &self.pets, &self.skills]
            .into_iter()
            .sum()
    }
}

fn reforge_bonus(catalogs: &Catalogs, item: &EquippedItem) -> StatBag {
    let Some(id) = item.reforge.as_deref() else {
        return StatBag::new();
    };
    // Lookup is scoped to the item's category, so a found reforge always applies.
    match catalogs.reforges.reforge(id, item.category) {
        Ok(reforge) => catalogs.reforges.stats_for(reforge, item.rarity),
        Err(e) => {
            tracing::warn!("item '{}': {}; reforge ignored", item.id, e);
            StatBag::new()
        }
    }
}

#[derive(Debug)]
struct CacheSlot {
    bag: Arc<StatBag>,
    dirty: bool,
}

/// Memoized effective stats keyed by entity.
#[derive(Debug, Default)]
pub struct StatAggregator {
    cache: HashMap<EntityId, CacheSlot>,
}

impl StatAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Effective stats for `entity`.
    ///
    /// Returns the cached bag unless it was invalidated (or never computed).
    /// Repeated queries without invalidation return the same `Arc`.
    pub fn effective_stats(
        &mut self,
        catalogs: &Catalogs,
        entity: EntityId,
        profile: &EntityProfile,
    ) -> Arc<StatBag> {
        if let Some(slot) = self.cache.get(&entity).filter(|slot| !slot.dirty) {
            return Arc::clone(&slot.bag);
        }

        tracing::debug!("recomputing stats for {}", entity);
        let bag = Arc::new(StatBreakdown::compute(catalogs, profile).total());
        self.cache.insert(
            entity,
            CacheSlot {
                bag: Arc::clone(&bag),
                dirty: false,
            },
        );
        bag
    }

    /// Marks the entity's cached bag stale.
    pub fn invalidate(&mut self, entity: EntityId) {
        if let Some(slot) = self.cache.get_mut(&entity) {
            slot.dirty = true;
        }
    }

    /// Marks every cached bag stale (catalog reload).
    pub fn invalidate_all(&mut self) {
        for slot in self.cache.values_mut() {
            slot.dirty = true;
        }
    }

    /// Drops the entity's cache entry entirely.
    pub fn forget(&mut self, entity: EntityId) {
        self.cache.remove(&entity);
    }

    /// Returns true if a clean cached bag exists for the entity.
    pub fn is_fresh(&self, entity: EntityId) -> bool {
        self.cache.get(&entity).is_some_and(|slot| !slot.dirty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::Companion;
    use crate::pets::{PetAbilityKind, PetAbilityRegistry, PetRarity};
    use crate::rarity::Rarity;
    use crate::reforge::{ItemCategory, Reforge, ReforgeCatalog};
    use crate::skills::{SkillCurve, SkillProgress, SkillSet, SkillType};
    use crate::stats::StatKind;

    const EPS: f64 = 1e-9;
    const PLAYER: EntityId = EntityId(7);

    fn catalogs() -> Catalogs {
        Catalogs {
            reforges: ReforgeCatalog::new().with(
                Reforge::new("sharp", ItemCategory::Weapon)
                    .with_stats(Rarity::Epic, StatBag::new().with(StatKind::CritChance, 12.0)),
            ),
            pets: PetAbilityRegistry::new().with("tiger", vec![PetAbilityKind::Combat.into()]),
            ..Catalogs::default()
        }
    }

    fn sword() -> EquippedItem {
        EquippedItem::new("aspect_sword", ItemCategory::Weapon, Rarity::Epic)
            .with_base(StatBag::new().with(StatKind::Damage, 100.0).with(StatKind::Strength, 20.0))
            .with_reforge("SHARP")
    }

    fn profile() -> EntityProfile {
        let curve = SkillCurve::from_thresholds([(1, 100), (2, 300)]).unwrap();
        EntityProfile {
            equipment: vec![sword()],
            companions: vec![
                Companion::new("tiger", 10, PetRarity::Rare).summoned(),
                Companion::new("tiger", 100, PetRarity::Mythic),
            ],
            skills: SkillSet::new()
                .with(SkillType::Combat, SkillProgress::restore(300.0, &curve, 60)),
        }
    }

    #[test]
    fn combines_all_sources() {
        let breakdown = StatBreakdown::compute(&catalogs(), &profile());
        assert_eq!(breakdown.equipment.get(StatKind::Damage), 100.0);
        assert_eq!(breakdown.reforges.get(StatKind::CritChance), 12.0);
        assert!((breakdown.pets.get(StatKind::Strength) - 1.5).abs() < EPS);
        assert_eq!(breakdown.skills.get(StatKind::CritChance), 1.0);

        let total = breakdown.total();
        assert!((total.get(StatKind::Strength) - 21.5).abs() < EPS);
        assert_eq!(total.get(StatKind::CritChance), 13.0);
        assert!((total.get(StatKind::CritDamage) - 7.5).abs() < EPS);
    }

    #[test]
    fn inactive_companions_do_not_contribute() {
        let mut profile = profile();
        profile.dismiss();
        let breakdown = StatBreakdown::compute(&catalogs(), &profile);
        assert!(breakdown.pets.is_empty());
    }

    #[test]
    fn pet_level_is_clamped() {
        let mut profile = profile();
        profile.companions = vec![Companion::new("tiger", 500, PetRarity::Common).summoned()];
        let breakdown = StatBreakdown::compute(&catalogs(), &profile);
        // clamped to 100: 0.1 × 100
        assert!((breakdown.pets.get(StatKind::Strength) - 10.0).abs() < EPS);

        profile.companions = vec![Companion::new("tiger", 0, PetRarity::Common).summoned()];
        let breakdown = StatBreakdown::compute(&catalogs(), &profile);
        assert!((breakdown.pets.get(StatKind::Strength) - 0.1).abs() < EPS);
    }

    #[test]
    fn unknown_or_mismatched_reforge_is_ignored() {
        let mut profile = profile();
        profile.equipment = vec![
            sword().with_reforge("missing"),
            EquippedItem::new("helmet", ItemCategory::Armor, Rarity::Epic).with_reforge("sharp"),
        ];
        let breakdown = StatBreakdown::compute(&catalogs(), &profile);
        assert!(breakdown.reforges.is_empty());
    }

    #[test]
    fn cached_until_invalidated() {
        let catalogs = catalogs();
        let mut aggregator = StatAggregator::new();
        let mut profile = profile();

        let first = aggregator.effective_stats(&catalogs, PLAYER, &profile);
        profile.equipment.clear();
        let stale = aggregator.effective_stats(&catalogs, PLAYER, &profile);
        assert!(Arc::ptr_eq(&first, &stale));
        assert_eq!(stale.get(StatKind::Damage), 100.0);

        aggregator.invalidate(PLAYER);
        assert!(!aggregator.is_fresh(PLAYER));
        let fresh = aggregator.effective_stats(&catalogs, PLAYER, &profile);
        assert!(!Arc::ptr_eq(&first, &fresh));
        assert_eq!(fresh.get(StatKind::Damage), 0.0);
        assert!(aggregator.is_fresh(PLAYER));
    }

    #[test]
    fn invalidate_all_marks_every_entity() {
        let catalogs = catalogs();
        let mut aggregator = StatAggregator::new();
        let profile = profile();
        aggregator.effective_stats(&catalogs, EntityId(1), &profile);
        aggregator.effective_stats(&catalogs, EntityId(2), &profile);

        aggregator.invalidate_all();
        assert!(!aggregator.is_fresh(EntityId(1)));
        assert!(!aggregator.is_fresh(EntityId(2)));

        aggregator.forget(EntityId(1));
        aggregator.invalidate(EntityId(1));
        assert!(!aggregator.is_fresh(EntityId(1)));
    }
}
