//! Facade that keeps the stat cache coherent.
//!
//! [`ProgressionService`] owns the live profiles, the engine, the aggregator
//! and the catalog handle. Every mutation path goes through it and invalidates
//! the affected entity, so callers never have to remember to.

use std::collections::HashMap;
use std::sync::Arc;

use rand::Rng;

use crate::aggregate::{Companion, EntityProfile, EquippedItem, StatAggregator, StatBreakdown};
use crate::catalog::{CatalogHandle, Catalogs};
use crate::entity::EntityId;
use crate::error::{ErrorSeverity, GameError};
use crate::events::ProgressionListener;
use crate::reforge::ReforgeError;
use crate::skills::{ProgressionEngine, SkillType, XpOutcome};
use crate::stats::StatBag;

/// Errors from service mutations that need an existing item.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    #[error("entity {entity} has no equipped item '{item}'")]
    ItemNotEquipped { entity: EntityId, item: String },

    #[error(transparent)]
    Reforge(#[from] ReforgeError),
}

impl GameError for ServiceError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ItemNotEquipped { .. } => ErrorSeverity::Validation,
            Self::Reforge(e) => e.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ItemNotEquipped { .. } => "ITEM_NOT_EQUIPPED",
            Self::Reforge(e) => e.error_code(),
        }
    }
}

/// Outcome of a paid reforge roll.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReforgeRoll {
    pub previous: Option<String>,
    pub reforge: String,
    /// Price of the roll, from the item's rarity.
    pub cost: u64,
}

/// Single owner of per-entity progression state.
#[derive(Debug)]
pub struct ProgressionService {
    catalogs: CatalogHandle,
    engine: ProgressionEngine,
    aggregator: StatAggregator,
    profiles: HashMap<EntityId, EntityProfile>,
}

impl ProgressionService {
    pub fn new(catalogs: CatalogHandle, listener: Arc<dyn ProgressionListener>) -> Self {
        Self {
            catalogs,
            engine: ProgressionEngine::new(listener),
            aggregator: StatAggregator::new(),
            profiles: HashMap::new(),
        }
    }

    pub fn catalogs(&self) -> &CatalogHandle {
        &self.catalogs
    }

    /// Publishes new catalogs and marks every cached aggregate stale.
    pub fn reload(&mut self, catalogs: Catalogs) {
        self.catalogs.replace(catalogs);
        self.aggregator.invalidate_all();
    }

    // ========================================================================
    // Profiles
    // ========================================================================

    /// Installs a stored profile, replacing any live one.
    pub fn insert_profile(&mut self, entity: EntityId, profile: EntityProfile) {
        self.profiles.insert(entity, profile);
        self.aggregator.invalidate(entity);
    }

    /// Removes the entity and its cache entry, returning its profile.
    pub fn remove_profile(&mut self, entity: EntityId) -> Option<EntityProfile> {
        self.aggregator.forget(entity);
        self.profiles.remove(&entity)
    }

    pub fn profile(&self, entity: EntityId) -> Option<&EntityProfile> {
        self.profiles.get(&entity)
    }

    // ========================================================================
    // Skills
    // ========================================================================

    /// Adds XP to one discipline; see [`ProgressionEngine::add_xp`].
    pub fn add_xp(&mut self, entity: EntityId, skill: SkillType, amount: f64) -> XpOutcome {
        let catalogs = self.catalogs.current();
        let profile = self.profiles.entry(entity).or_default();
        let outcome = self
            .engine
            .add_xp(&catalogs, entity, &mut profile.skills, skill, amount);
        if outcome.changed() {
            self.aggregator.invalidate(entity);
        }
        outcome
    }

    /// Translates a gameplay action into XP; see
    /// [`ProgressionEngine::record_action`].
    pub fn record_action(&mut self, entity: EntityId, source: &str, units: f64) -> Vec<XpOutcome> {
        let catalogs = self.catalogs.current();
        let profile = self.profiles.entry(entity).or_default();
        let outcomes = self
            .engine
            .record_action(&catalogs, entity, &mut profile.skills, source, units);
        if outcomes.iter().any(XpOutcome::changed) {
            self.aggregator.invalidate(entity);
        }
        outcomes
    }

    /// Percent toward the next level of `skill`.
    pub fn skill_progress(&self, entity: EntityId, skill: SkillType) -> f64 {
        let catalogs = self.catalogs.current();
        match self.profiles.get(&entity) {
            Some(profile) => self.engine.progress(&catalogs, &profile.skills, skill),
            None => 0.0,
        }
    }

    // ========================================================================
    // Equipment
    // ========================================================================

    pub fn equip(&mut self, entity: EntityId, item: EquippedItem) {
        self.profiles.entry(entity).or_default().equipment.push(item);
        self.aggregator.invalidate(entity);
    }

    /// Removes the first equipped item with `item_id`.
    pub fn unequip(&mut self, entity: EntityId, item_id: &str) -> Option<EquippedItem> {
        let equipment = &mut self.profiles.get_mut(&entity)?.equipment;
        let idx = equipment.iter().position(|item| item.id == item_id)?;
        let removed = equipment.remove(idx);
        self.aggregator.invalidate(entity);
        Some(removed)
    }

    /// Applies a specific reforge to an equipped item.
    ///
    /// The reforge must exist in the item's own category.
    pub fn apply_reforge(
        &mut self,
        entity: EntityId,
        item_id: &str,
        reforge_id: &str,
    ) -> Result<(), ServiceError> {
        let catalogs = self.catalogs.current();
        let item = self.item_mut(entity, item_id)?;
        let reforge = catalogs.reforges.reforge(reforge_id, item.category)?;
        item.reforge = Some(reforge.id().to_string());
        self.aggregator.invalidate(entity);
        Ok(())
    }

    /// Rolls a new random reforge for an equipped item.
    pub fn reforge_item<R: Rng + ?Sized>(
        &mut self,
        entity: EntityId,
        item_id: &str,
        rng: &mut R,
    ) -> Result<ReforgeRoll, ServiceError> {
        let catalogs = self.catalogs.current();
        let item = self.item_mut(entity, item_id)?;
        let reforge = catalogs
            .reforges
            .reroll(item.reforge.as_deref(), item.category, rng)?;
        let roll = ReforgeRoll {
            previous: item.reforge.replace(reforge.id().to_string()),
            reforge: reforge.id().to_string(),
            cost: item.rarity.reforge_cost(),
        };
        tracing::debug!(
            "{} reforged '{}' to {} for {}",
            entity,
            item_id,
            roll.reforge,
            roll.cost
        );
        self.aggregator.invalidate(entity);
        Ok(roll)
    }

    fn item_mut(&mut self, entity: EntityId, item_id: &str) -> Result<&mut EquippedItem, ServiceError> {
        self.profiles
            .get_mut(&entity)
            .and_then(|profile| profile.equipment.iter_mut().find(|item| item.id == item_id))
            .ok_or_else(|| ServiceError::ItemNotEquipped {
                entity,
                item: item_id.to_string(),
            })
    }

    // ========================================================================
    // Companions
    // ========================================================================

    pub fn add_companion(&mut self, entity: EntityId, companion: Companion) {
        self.profiles
            .entry(entity)
            .or_default()
            .companions
            .push(companion);
        self.aggregator.invalidate(entity);
    }

    /// Summons the companion at `index`; false when out of range.
    pub fn summon(&mut self, entity: EntityId, index: usize) -> bool {
        let summoned = self
            .profiles
            .get_mut(&entity)
            .is_some_and(|profile| profile.summon(index));
        if summoned {
            self.aggregator.invalidate(entity);
        }
        summoned
    }

    pub fn dismiss(&mut self, entity: EntityId) {
        if let Some(profile) = self.profiles.get_mut(&entity) {
            profile.dismiss();
            self.aggregator.invalidate(entity);
        }
    }

    /// Ability lines for the summoned companion.
    pub fn describe_companion(&self, entity: EntityId) -> Vec<String> {
        let catalogs = self.catalogs.current();
        self.profiles
            .get(&entity)
            .and_then(EntityProfile::active_companion)
            .map(|companion| {
                let level = catalogs.config.clamp_pet_level(companion.level);
                catalogs
                    .pets
                    .describe(&companion.species, level, companion.rarity)
            })
            .unwrap_or_default()
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Memoized effective stats.
    ///
    /// Unknown entities read as an empty profile and are neither stored nor
    /// cached.
    pub fn effective_stats(&mut self, entity: EntityId) -> Arc<StatBag> {
        let catalogs = self.catalogs.current();
        match self.profiles.get(&entity) {
            Some(profile) => self.aggregator.effective_stats(&catalogs, entity, profile),
            None => Arc::new(StatBreakdown::compute(&catalogs, &EntityProfile::default()).total()),
        }
    }

    /// Uncached per-source contributions.
    pub fn breakdown(&self, entity: EntityId) -> StatBreakdown {
        let catalogs = self.catalogs.current();
        match self.profiles.get(&entity) {
            Some(profile) => StatBreakdown::compute(&catalogs, profile),
            None => StatBreakdown::default(),
        }
    }
}
