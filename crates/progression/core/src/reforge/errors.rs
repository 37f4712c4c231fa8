//! Error types for reforge lookups.

use crate::error::{ErrorSeverity, GameError};

use super::ItemCategory;

/// Reported conditions from [`super::ReforgeCatalog`] queries.
///
/// Neither variant indicates a bug: an empty category is a valid
/// configuration, and an unknown id usually comes from stale item data.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ReforgeError {
    /// No reforge with this id exists in the category.
    #[error("reforge '{id}' not found in category {category}")]
    NotFound { id: String, category: ItemCategory },

    /// The category has no reforges configured.
    #[error("no reforges available for category {0}")]
    NoneAvailable(ItemCategory),
}

impl GameError for ReforgeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NotFound { .. } => ErrorSeverity::Validation,
            Self::NoneAvailable(_) => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "REFORGE_NOT_FOUND",
            Self::NoneAvailable(_) => "REFORGE_NONE_AVAILABLE",
        }
    }
}
