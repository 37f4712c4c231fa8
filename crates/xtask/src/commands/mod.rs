//! Command implementations for xtask
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod check_content;
mod level;
mod pet;
mod roll;

pub use check_content::CheckContent;
pub use level::Level;
pub use pet::Pet;
pub use roll::Roll;
