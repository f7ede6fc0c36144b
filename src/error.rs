//! Error types for the solver core
//!
//! Three kinds of failure reach callers:
//! - `CorpusLoad`: the word list or frequency table is unusable. Fatal at startup.
//! - `InvalidInput`: a guess or feedback string failed validation. Recoverable,
//!   the session is left untouched and the caller re-prompts.
//! - `ExhaustedCandidates`: no word in the corpus fits the feedback so far,
//!   which almost always means a feedback string was entered wrong.

use std::path::Path;
use thiserror::Error;

/// Validation failures for caller-supplied words and feedback
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("word must be exactly 5 letters, got {0}")]
    WordLength(usize),

    #[error("word must contain only ASCII letters, got {0:?}")]
    NonAlphabetic(String),

    #[error("feedback must have exactly 5 symbols, got {0}")]
    FeedbackLength(usize),

    #[error("invalid feedback symbol {0:?} (use G/Y/B, -/_ or 🟩🟨⬜)")]
    FeedbackSymbol(char),

    #[error("round must look like GUESS:FEEDBACK, got {0:?}")]
    MalformedRound(String),
}

/// Errors produced by the solver core
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    #[error("failed to load {source_name}: {reason}")]
    CorpusLoad {
        source_name: String,
        reason: String,
    },

    #[error(transparent)]
    InvalidInput(#[from] InputError),

    #[error("no word in the corpus is consistent with the feedback so far")]
    ExhaustedCandidates,
}

impl SolverError {
    /// Build a corpus load error for a file path
    pub(crate) fn corpus_file(path: &Path, reason: impl ToString) -> Self {
        Self::CorpusLoad {
            source_name: path.display().to_string(),
            reason: reason.to_string(),
        }
    }

    /// Whether the caller can keep going after this error
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        !matches!(self, Self::CorpusLoad { .. })
    }
}
