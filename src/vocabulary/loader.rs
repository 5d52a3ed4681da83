//! Vocabulary sources: the built-in list and line-oriented word files.
//!
//! File format, one entry per line:
//!
//! ```text
//! apple 蘋果
//! dragon	龍
//! ```
//!
//! The first whitespace-delimited token is the answer; the rest of the line,
//! minus leading blanks, is the prompt (`?` when absent). Lines without a
//! token are skipped.

use super::{Vocabulary, Word};
use crate::core::constants::MISSING_PROMPT;
use crate::error::VocabularyError;
use std::fs;
use std::path::Path;

/// Parse one line. `None` for blank or token-less lines.
pub fn parse_line(line: &str) -> Option<Word> {
    let line = line.trim_end_matches('\r').trim_start();
    let split = line.find(char::is_whitespace).unwrap_or(line.len());
    let (answer, rest) = line.split_at(split);
    if answer.is_empty() {
        return None;
    }
    let prompt = rest.trim_start_matches(|c| c == ' ' || c == '\t');
    let prompt = if prompt.is_empty() {
        MISSING_PROMPT
    } else {
        prompt
    };
    Some(Word::new(answer, prompt))
}

/// Parse a whole file's contents, skipping malformed lines.
pub fn parse_vocabulary(text: &str) -> Vec<Word> {
    text.lines().filter_map(parse_line).collect()
}

pub fn read_vocabulary_file(path: &Path) -> Result<Vocabulary, VocabularyError> {
    let text = fs::read_to_string(path).map_err(|source| VocabularyError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Vocabulary::new(parse_vocabulary(&text))
}

impl Vocabulary {
    /// Load `path`, or fall back to the built-in list if it is missing,
    /// unreadable or has no usable entries.
    pub fn load_or_default(path: &Path) -> Self {
        match read_vocabulary_file(path) {
            Ok(vocab) => {
                tracing::info!(path = %path.display(), words = vocab.count(), "vocabulary loaded");
                vocab
            }
            Err(err) => {
                tracing::warn!(%err, "using built-in vocabulary");
                Self::builtin()
            }
        }
    }
}
