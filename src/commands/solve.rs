//! Word solving command
//!
//! Plays a puzzle against a known target, always taking the top suggestion.

use crate::core::{Pattern, Word, evaluate};
use crate::corpus::Corpus;
use crate::error::SolverError;
use crate::solver::{RankedSuggestion, Session, SessionConfig};

/// Guesses allowed in a standard game
pub const MAX_GUESSES: usize = 6;

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    pub max_guesses: usize,
    pub session: SessionConfig,
}

impl SolveConfig {
    #[must_use]
    pub fn new(target: String) -> Self {
        Self {
            target,
            max_guesses: MAX_GUESSES,
            session: SessionConfig::default(),
        }
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub target: Word,
}

/// A single guess step in the solution
#[derive(Debug, Clone, Copy)]
pub struct GuessStep {
    pub word: Word,
    pub pattern: Pattern,
    pub candidates_before: usize,
    pub candidates_after: usize,
    pub entropy: f64,
    pub score: f64,
}

/// Play `session` against `target` until solved or out of guesses
///
/// `opening` replaces the first ranking when given; the benchmark passes the
/// same opening to every game so it is only computed once.
///
/// # Errors
///
/// Returns `SolverError::ExhaustedCandidates` if the target is not reachable
/// from the session's corpus.
pub fn self_play(
    session: &mut Session<'_>,
    target: &Word,
    max_guesses: usize,
    opening: Option<RankedSuggestion>,
) -> Result<Vec<GuessStep>, SolverError> {
    let mut steps = Vec::with_capacity(max_guesses);

    for turn in 0..max_guesses {
        let best = if turn == 0
            && let Some(first) = opening
        {
            first
        } else {
            session
                .suggestions()?
                .first()
                .copied()
                .ok_or(SolverError::ExhaustedCandidates)?
        };

        let pattern = evaluate(&best.word, target);
        let round = session.apply(best.word, pattern);

        steps.push(GuessStep {
            word: best.word,
            pattern,
            candidates_before: round.candidates_before,
            candidates_after: round.candidates_after,
            entropy: best.entropy,
            score: best.score,
        });

        if pattern.is_perfect() {
            break;
        }
    }

    Ok(steps)
}

/// Solve a specific word from a fresh session
///
/// # Errors
///
/// Returns an error if the target is not a valid word or is missing from the
/// corpus.
pub fn solve_word(config: SolveConfig, corpus: &Corpus) -> anyhow::Result<SolveResult> {
    let target = Word::new(&config.target).map_err(SolverError::from)?;
    if !corpus.contains(&target) {
        anyhow::bail!("'{target}' is not in the word list");
    }

    let mut session = Session::with_config(corpus, config.session);
    let guesses = self_play(&mut session, &target, config.max_guesses, None)?;
    let success = guesses.last().is_some_and(|step| step.pattern.is_perfect());

    Ok(SolveResult {
        success,
        guesses,
        target,
    })
}
