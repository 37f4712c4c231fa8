//! Content factory for building catalogs from data files.

use std::path::{Path, PathBuf};

use progression_core::{CatalogHandle, Catalogs, EngineConfig, PetAbilityRegistry, ReforgeCatalog};

use crate::loaders::{ConfigLoader, LoadResult, PetLoader, ReforgeLoader, SkillLoader, SkillTables};

/// Content factory that loads all progression content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── reforges.toml
/// ├── skills.toml
/// └── pets.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    ///
    /// # Arguments
    ///
    /// * `data_dir` - Path to the directory containing data files
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load engine configuration from `config.toml`.
    ///
    /// A missing file yields the default configuration.
    pub fn load_config(&self) -> LoadResult<EngineConfig> {
        self.load_or_default("config.toml", ConfigLoader::load)
    }

    /// Load reforge tables from `reforges.toml`.
    ///
    /// A missing file yields empty reforge tables.
    pub fn load_reforges(&self) -> LoadResult<ReforgeCatalog> {
        self.load_or_default("reforges.toml", ReforgeLoader::load)
    }

    /// Load XP curves and action sources from `skills.toml`.
    ///
    /// A missing file yields an empty curve (every discipline at level 0) and
    /// no action sources.
    pub fn load_skills(&self) -> LoadResult<SkillTables> {
        self.load_or_default("skills.toml", SkillLoader::load)
    }

    /// Load the companion species registry from `pets.ron`.
    ///
    /// A missing file yields an empty registry.
    pub fn load_pets(&self) -> LoadResult<PetAbilityRegistry> {
        self.load_or_default("pets.ron", PetLoader::load)
    }

    fn load_or_default<T: Default>(
        &self,
        file: &str,
        load: impl FnOnce(&Path) -> LoadResult<T>,
    ) -> LoadResult<T> {
        let path = self.data_dir.join(file);
        if !path.exists() {
            tracing::warn!("{} not found; using an empty table", path.display());
            return Ok(T::default());
        }
        load(&path)
    }

    /// Load every table into one catalog bundle.
    ///
    /// Missing files fall back to empty tables. Fails as a whole if any file is
    /// unreadable or corrupt, so a bad reload never replaces a good catalog.
    pub fn load_catalogs(&self) -> LoadResult<Catalogs> {
        let config = self.load_config()?;
        let reforges = self.load_reforges()?;
        let SkillTables { curves, sources } = self.load_skills()?;
        let pets = self.load_pets()?;

        tracing::debug!(
            "loaded {} reforges and {} pet species from {}",
            reforges.len(),
            pets.len(),
            self.data_dir.display()
        );

        Ok(Catalogs {
            config,
            reforges,
            pets,
            curves,
            sources,
        })
    }

    /// Load catalogs and wrap them in a fresh handle.
    pub fn load_handle(&self) -> LoadResult<CatalogHandle> {
        Ok(CatalogHandle::new(self.load_catalogs()?))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
