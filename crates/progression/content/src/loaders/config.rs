//! Engine configuration loader.

use std::path::Path;

use progression_core::EngineConfig;
use serde::Deserialize;

use crate::loaders::{LoadResult, parse_skill, read_file};

/// Config as written; discipline names are resolved after parsing.
#[derive(Debug, Deserialize)]
#[serde(default)]
struct RawConfig {
    disabled_skills: Vec<String>,
    max_pet_level: u32,
}

impl Default for RawConfig {
    fn default() -> Self {
        Self {
            disabled_skills: Vec::new(),
            max_pet_level: EngineConfig::DEFAULT_MAX_PET_LEVEL,
        }
    }
}

/// Loader for engine configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys take their defaults; unknown keys are ignored and unknown
    /// disciplines are dropped with a warning.
    pub fn load(path: &Path) -> LoadResult<EngineConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse config data from TOML text.
    pub fn parse(content: &str) -> LoadResult<EngineConfig> {
        let raw: RawConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        let mut config = EngineConfig::new();
        config.max_pet_level = raw.max_pet_level;
        for name in &raw.disabled_skills {
            if let Some(skill) = parse_skill(name, "disabled_skills") {
                config.disabled_skills.insert(skill);
            }
        }

        if config.max_pet_level == 0 {
            tracing::warn!("max_pet_level is 0; pets will be treated as level 1");
        }
        Ok(config)
    }
}
