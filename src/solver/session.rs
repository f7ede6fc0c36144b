//! Solving session
//!
//! A `Session` owns everything that changes while one puzzle is being solved:
//! the surviving candidates, the accumulated constraints, and the round log.
//! The corpus is borrowed and never modified, so several sessions can share it.

use super::cache::{CacheStats, FeedbackCache};
use super::filter::narrow;
use super::ranker::{DEFAULT_TOP_N, RankOptions, RankedSuggestion, rank_with};
use super::strategy::{DEFAULT_SAMPLE_LIMIT, RankingStrategy, StrategyChoice};
use crate::core::{ConstraintState, Pattern, Word};
use crate::corpus::Corpus;
use crate::error::SolverError;

/// Maximum number of memoized feedback patterns per session
pub const DEFAULT_CACHE_CAPACITY: usize = 1 << 20;

/// Tunables for a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Suggestions returned per round
    pub top_n: usize,
    pub strategy: StrategyChoice,
    /// Solutions scored against when the sampled strategy is in effect
    pub sample_limit: usize,
    pub cache_capacity: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            strategy: StrategyChoice::Auto,
            sample_limit: DEFAULT_SAMPLE_LIMIT,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

/// One guess and the feedback it received
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
    pub guess: Word,
    pub pattern: Pattern,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// State of one puzzle being solved against a shared corpus
///
/// # Examples
/// ```
/// use wordle_ranker::corpus::Corpus;
/// use wordle_ranker::solver::Session;
///
/// let corpus = Corpus::from_slice(&["crane", "slate", "stale", "tales", "least"]).unwrap();
/// let mut session = Session::new(&corpus);
///
/// session.submit("crane", "BBGBG").unwrap();
/// let suggestions = session.suggestions().unwrap();
///
/// assert_eq!(session.candidates().len(), 2);
/// assert!(suggestions.iter().any(|s| s.word.text() == "slate"));
/// ```
#[derive(Debug)]
pub struct Session<'c> {
    corpus: &'c Corpus,
    config: SessionConfig,
    candidates: Vec<Word>,
    state: ConstraintState,
    history: Vec<Round>,
    cache: FeedbackCache,
}

impl<'c> Session<'c> {
    /// Start a session with the default configuration
    #[must_use]
    pub fn new(corpus: &'c Corpus) -> Self {
        Self::with_config(corpus, SessionConfig::default())
    }

    #[must_use]
    pub fn with_config(corpus: &'c Corpus, config: SessionConfig) -> Self {
        Self {
            corpus,
            config,
            candidates: corpus.words().to_vec(),
            state: ConstraintState::new(),
            history: Vec::new(),
            cache: FeedbackCache::new(config.cache_capacity),
        }
    }

    /// Forget every round and start over with the full corpus
    ///
    /// The feedback cache survives: its entries depend only on word pairs.
    pub fn reset(&mut self) {
        self.candidates = self.corpus.words().to_vec();
        self.state = ConstraintState::new();
        self.history.clear();
        log::debug!("session reset: {} candidates", self.candidates.len());
    }

    /// Validate and apply one round given as text
    ///
    /// # Errors
    ///
    /// Returns `SolverError::InvalidInput` if the guess is not a five-letter
    /// word or the feedback is not five valid symbols. The session is left
    /// untouched in that case.
    pub fn submit(&mut self, guess: &str, feedback: &str) -> Result<Round, SolverError> {
        let guess = Word::new(guess)?;
        let pattern = Pattern::parse(feedback)?;
        Ok(self.apply(guess, pattern))
    }

    /// Apply one validated round: absorb the feedback, then narrow
    pub fn apply(&mut self, guess: Word, pattern: Pattern) -> Round {
        let candidates_before = self.candidates.len();

        self.state.absorb(&guess, pattern);
        self.candidates = narrow(&self.candidates, &guess, pattern, &self.state);

        let round = Round {
            guess,
            pattern,
            candidates_before,
            candidates_after: self.candidates.len(),
        };
        self.history.push(round);

        log::debug!(
            "round {}: {guess} {pattern} narrowed {candidates_before} -> {}",
            self.history.len(),
            round.candidates_after
        );
        if self.candidates.is_empty() {
            log::warn!("no candidate is consistent with the feedback so far");
        }

        round
    }

    /// Drop the last round and rebuild the state from the remaining ones
    pub fn undo(&mut self) -> Option<Round> {
        let last = self.history.pop()?;
        let replay = std::mem::take(&mut self.history);

        self.reset();
        for round in replay {
            self.apply(round.guess, round.pattern);
        }

        Some(last)
    }

    /// Ranked suggestions for the next guess
    ///
    /// # Errors
    ///
    /// Returns `SolverError::ExhaustedCandidates` when no word is consistent
    /// with the feedback so far.
    pub fn suggestions(&self) -> Result<Vec<RankedSuggestion>, SolverError> {
        if self.candidates.is_empty() {
            return Err(SolverError::ExhaustedCandidates);
        }

        let options = RankOptions {
            top_n: self.config.top_n,
            strategy: self.strategy(),
        };
        Ok(rank_with(
            &self.candidates,
            &self.state,
            self.corpus,
            &options,
            &self.cache,
        ))
    }

    /// Strategy the next call to `suggestions` will use
    #[must_use]
    pub fn strategy(&self) -> RankingStrategy {
        self.config.strategy.resolve(
            self.history.first().map(|round| round.pattern),
            self.candidates.len(),
            self.config.sample_limit,
        )
    }

    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    #[must_use]
    pub const fn state(&self) -> &ConstraintState {
        &self.state
    }

    #[must_use]
    pub fn history(&self) -> &[Round] {
        &self.history
    }

    #[must_use]
    pub const fn corpus(&self) -> &'c Corpus {
        self.corpus
    }

    #[must_use]
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// True once a round came back all green
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.history.last().is_some_and(|round| round.pattern.is_perfect())
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.candidates.is_empty()
    }
}
