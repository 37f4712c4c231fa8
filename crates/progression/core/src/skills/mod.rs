//! Skill disciplines, XP curves, and the progression engine.
//!
//! - [`SkillType`]: the closed set of disciplines with caps and passives
//! - [`SkillCurve`]: level ↔ cumulative XP resolution
//! - [`XpSourceTable`]: gameplay action → XP translation
//! - [`ProgressionEngine`]: XP application with level-up detection

pub mod curve;
pub mod engine;
pub mod kind;
pub mod progress;
pub mod sources;

pub use curve::{CurveError, SkillCurve, SkillCurves};
pub use engine::{ProgressionEngine, XpOutcome, XpSkipReason};
pub use kind::SkillType;
pub use progress::{SkillProgress, SkillSet};
pub use sources::XpSourceTable;
