//! Reforges: named per-category modifiers with rarity-dependent bonuses.

mod catalog;
mod category;
mod errors;

pub use catalog::{Reforge, ReforgeCatalog};
pub use category::ItemCategory;
pub use errors::ReforgeError;
