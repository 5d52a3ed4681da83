//! Word lists the battle draws its questions from.

pub mod loader;
pub mod types;

pub use loader::*;
pub use types::*;
