use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures that end a game session early.
#[derive(Debug, Error)]
pub enum GameError {
    /// The terminal could not be read from or written to.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// Why a vocabulary file could not be used. Never fatal: callers fall back
/// to the built-in word list.
#[derive(Debug, Error)]
pub enum VocabularyError {
    #[error("could not read vocabulary file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("vocabulary has no usable entries")]
    Empty,
}
