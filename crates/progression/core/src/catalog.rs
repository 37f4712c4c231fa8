//! Load-once catalog bundle with atomic reload.
//!
//! ```text
//! ContentFactory ──build──▶ Catalogs ──Arc──▶ CatalogHandle ──current()──▶ readers
//!                                 ▲                 │
//!                                 └──── replace() ──┘ (pointer swap only)
//! ```
//!
//! Readers clone the inner `Arc` and keep using that snapshot for as long as
//! they need it; a reload never mutates a published [`Catalogs`].

use std::sync::{Arc, RwLock};

use crate::config::EngineConfig;
use crate::pets::PetAbilityRegistry;
use crate::reforge::ReforgeCatalog;
use crate::skills::{SkillCurves, XpSourceTable};

/// Every read-only table the engine and aggregator consult.
#[derive(Clone, Debug, Default)]
pub struct Catalogs {
    pub config: EngineConfig,
    pub reforges: ReforgeCatalog,
    pub pets: PetAbilityRegistry,
    pub curves: SkillCurves,
    pub sources: XpSourceTable,
}

/// Shared, swappable pointer to the live [`Catalogs`].
///
/// Cloning the handle shares the same slot.
#[derive(Clone, Debug)]
pub struct CatalogHandle {
    slot: Arc<RwLock<Arc<Catalogs>>>,
}

impl CatalogHandle {
    pub fn new(catalogs: Catalogs) -> Self {
        Self {
            slot: Arc::new(RwLock::new(Arc::new(catalogs))),
        }
    }

    /// Current snapshot.
    pub fn current(&self) -> Arc<Catalogs> {
        let guard = self
            .slot
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        Arc::clone(&guard)
    }

    /// Publishes `catalogs`, returning the previous snapshot.
    pub fn replace(&self, catalogs: Catalogs) -> Arc<Catalogs> {
        let next = Arc::new(catalogs);
        let mut guard = self
            .slot
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        tracing::debug!("catalogs replaced");
        std::mem::replace(&mut *guard, next)
    }
}

impl Default for CatalogHandle {
    fn default() -> Self {
        Self::new(Catalogs::default())
    }
}
