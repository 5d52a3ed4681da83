//! Combat system: entities, skills and attempt resolution.

pub mod logic;
pub mod skills;
pub mod types;

pub use logic::*;
pub use skills::*;
pub use types::*;
