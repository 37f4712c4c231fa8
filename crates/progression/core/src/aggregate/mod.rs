//! Effective stat aggregation.

mod aggregator;
mod profile;

pub use aggregator::{StatAggregator, StatBreakdown};
pub use profile::{Companion, EntityProfile, EquippedItem};
