//! Word Warrior - a terminal typing RPG.
//!
//! Type the translation of the monster's word to hit it; miss and it hits
//! back. The library holds the whole game so it can be driven headlessly
//! through [`screen::MemoryScreen`] and [`core::ManualClock`].

pub mod build_info;
pub mod combat;
pub mod config;
pub mod core;
pub mod error;
pub mod input;
pub mod logging;
pub mod screen;
pub mod ui;
pub mod vocabulary;

pub use crate::core::{FrameLoop, GameSummary, LoopSettings, Session};
pub use config::{GameConfig, InputMode, TerminalEnv};
pub use error::{GameError, VocabularyError};
pub use vocabulary::{Vocabulary, Word};
