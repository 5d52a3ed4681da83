//! Game state, timing and the frame loop.

pub mod clock;
pub mod constants;
pub mod game_loop;
pub mod progression;
pub mod session;

pub use clock::{Clock, ManualClock, SystemClock};
pub use game_loop::{FrameLoop, LoopSettings};
pub use progression::{monster_hp_for_level, opening_monster, resolve_deaths, spawn_monster};
pub use session::{GamePhase, GameSummary, Outcome, Session};
