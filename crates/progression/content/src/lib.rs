//! Data-driven catalogs for the progression engine.
//!
//! This crate reads the RON/TOML files that configure progression:
//! - Reforge bonus tables (TOML)
//! - Skill XP curves and action sources (TOML)
//! - Companion species wiring (RON)
//! - Engine configuration (TOML)
//!
//! Loaded tables are bundled into a [`progression_core::Catalogs`] and never
//! mutated afterwards; a reload builds a fresh bundle.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentFactory, LoadResult, PetLoader, ReforgeLoader, SkillLoader, SkillTables,
};
