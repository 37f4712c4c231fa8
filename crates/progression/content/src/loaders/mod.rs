//! Content loaders for reading progression data from files.
//!
//! Loaders are forgiving about content and strict about structure: unknown
//! rarities, stats and categories are dropped with a warning, while malformed
//! files and corrupt XP curves fail the load.

pub mod config;
pub mod factory;
pub mod pets;
pub mod reforges;
pub mod skills;

pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use pets::PetLoader;
pub use reforges::ReforgeLoader;
pub use skills::{SkillLoader, SkillTables};

use std::path::Path;

use progression_core::SkillType;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

/// Parses a discipline name, warning and returning `None` when unknown.
pub(crate) fn parse_skill(name: &str, section: &str) -> Option<SkillType> {
    let skill = name.parse::<SkillType>().ok();
    if skill.is_none() {
        tracing::warn!("unknown discipline '{}' in [{}] skipped", name, section);
    }
    skill
}
