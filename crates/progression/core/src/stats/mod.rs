//! Stat kinds and the additive stat bag.
//!
//! Every power source in the crate reduces to a [`StatBag`]:
//!
//! ```text
//! [ Equipment + Reforge ]   [ Pet Abilities ]   [ Skill Passives ]
//!            \                     |                    /
//!             └──────────── StatBag::combine ──────────┘
//!                                  ↓
//!                      [ Effective StatBag (cached) ]
//! ```

pub mod bag;
pub mod kind;

pub use bag::StatBag;
pub use kind::{DisplayColor, StatDisplay, StatFormat, StatKind};
