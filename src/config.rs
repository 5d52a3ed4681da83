//! Runtime configuration: input mode detection and game settings.

use crate::core::constants::{DEFAULT_VOCABULARY_PATH, FRAME_INTERVAL_MS};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::time::Duration;

/// How the play loop reads input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Poll single keystrokes each frame; cooldowns count down live.
    NonBlocking,
    /// Read whole lines; the loop sleeps inside each read.
    Blocking,
}

/// The environment signals that decide whether keystroke polling works.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TerminalEnv {
    pub term: Option<String>,
    pub wt_session: bool,
    pub term_program: bool,
    pub windows: bool,
    pub interactive: bool,
}

impl TerminalEnv {
    pub fn from_process() -> Self {
        Self {
            term: std::env::var("TERM").ok(),
            wt_session: std::env::var_os("WT_SESSION").is_some(),
            term_program: std::env::var_os("TERM_PROGRAM").is_some(),
            windows: cfg!(windows),
            interactive: std::io::stdin().is_terminal(),
        }
    }

    /// Reason this terminal can't be polled for single keys, if any.
    pub fn incompatibility(&self) -> Option<&'static str> {
        if !self.interactive {
            Some("stdin is not a terminal")
        } else if self.term.as_deref() == Some("dumb") {
            Some("TERM=dumb")
        } else if self.windows && !self.wt_session && !self.term_program {
            // Legacy console host
            Some("no modern Windows terminal detected")
        } else {
            None
        }
    }
}

impl InputMode {
    pub fn detect(force_simple: bool, env: &TerminalEnv) -> Self {
        if force_simple {
            return Self::Blocking;
        }
        match env.incompatibility() {
            Some(reason) => {
                tracing::info!(reason, "forcing blocking input mode");
                Self::Blocking
            }
            None => Self::NonBlocking,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub input_mode: InputMode,
    pub vocabulary_path: PathBuf,
    pub frame_interval: Duration,
    /// Fixed RNG seed for reproducible runs.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            input_mode: InputMode::NonBlocking,
            vocabulary_path: PathBuf::from(DEFAULT_VOCABULARY_PATH),
            frame_interval: Duration::from_millis(FRAME_INTERVAL_MS),
            seed: None,
        }
    }
}
