//! Deterministic progression and stat computation.
//!
//! `progression-core` turns three independent power sources (equipped gear,
//! companions, skill mastery) into one effective [`StatBag`] per entity.
//! Catalog tables are loaded elsewhere and shared read-only through
//! [`CatalogHandle`]; skill XP flows through [`skills::ProgressionEngine`] and
//! the cached aggregate lives in [`aggregate::StatAggregator`].
//! [`ProgressionService`] ties these together and keeps the cache coherent.
pub mod aggregate;
pub mod catalog;
pub mod config;
pub mod entity;
pub mod error;
pub mod events;
pub mod pets;
pub mod rarity;
pub mod reforge;
pub mod service;
pub mod skills;
pub mod stats;

pub use aggregate::{
    Companion, EntityProfile, EquippedItem, StatAggregator, StatBreakdown,
};
pub use catalog::{CatalogHandle, Catalogs};
pub use config::EngineConfig;
pub use entity::EntityId;
pub use error::{ErrorSeverity, GameError};
pub use events::{
    NullListener, ProgressionEvent, ProgressionListener, RecordingListener, TracingListener,
};
pub use pets::{PetAbility, PetAbilityKind, PetAbilityRegistry, PetRarity};
pub use rarity::{REFORGE_COSTS, Rarity, RarityError};
pub use reforge::{ItemCategory, Reforge, ReforgeCatalog, ReforgeError};
pub use service::{ProgressionService, ReforgeRoll, ServiceError};
pub use skills::{
    CurveError, ProgressionEngine, SkillCurve, SkillCurves, SkillProgress, SkillSet, SkillType,
    XpOutcome, XpSkipReason, XpSourceTable,
};
pub use stats::{DisplayColor, StatBag, StatDisplay, StatFormat, StatKind};
