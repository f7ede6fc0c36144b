//! Suggestion ranking
//!
//! A guess scores `entropy × frequency`: information gained against the
//! remaining candidates, weighted by how common the word is. Only words that
//! could themselves be the answer are offered.

use super::cache::{DirectFeedback, FeedbackSource};
use super::entropy::entropy_with;
use super::strategy::RankingStrategy;
use crate::core::{ConstraintState, Word};
use crate::corpus::Corpus;
use rayon::prelude::*;
use std::time::Instant;

/// Number of suggestions returned by default
pub const DEFAULT_TOP_N: usize = 5;

/// One ranked guess
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedSuggestion {
    pub word: Word,
    pub score: f64,
    pub entropy: f64,
    pub frequency: f64,
}

/// Knobs for a single ranking pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankOptions {
    pub top_n: usize,
    pub strategy: RankingStrategy,
}

impl Default for RankOptions {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            strategy: RankingStrategy::Exhaustive,
        }
    }
}

/// Rank candidates exhaustively and return the best five
///
/// # Examples
/// ```
/// use wordle_ranker::core::ConstraintState;
/// use wordle_ranker::corpus::Corpus;
/// use wordle_ranker::solver::rank;
///
/// let corpus = Corpus::from_slice(&["crane", "slate", "stale", "tales", "least"]).unwrap();
/// let ranked = rank(corpus.words(), &ConstraintState::new(), &corpus);
///
/// assert_eq!(ranked.len(), 5);
/// assert!(ranked.windows(2).all(|pair| pair[0].score >= pair[1].score));
/// ```
#[must_use]
pub fn rank(candidates: &[Word], state: &ConstraintState, corpus: &Corpus) -> Vec<RankedSuggestion> {
    rank_with(candidates, state, corpus, &RankOptions::default(), &DirectFeedback)
}

/// Rank candidates with explicit options and feedback source
///
/// Ties keep the candidates' original order.
#[must_use]
pub fn rank_with<F>(
    candidates: &[Word],
    state: &ConstraintState,
    corpus: &Corpus,
    options: &RankOptions,
    source: &F,
) -> Vec<RankedSuggestion>
where
    F: FeedbackSource + ?Sized,
{
    if candidates.is_empty() || options.top_n == 0 {
        return Vec::new();
    }

    let start = Instant::now();
    let guesses: Vec<Word> = if state.is_empty() {
        candidates.to_vec()
    } else {
        candidates
            .iter()
            .filter(|word| state.is_consistent(word))
            .copied()
            .collect()
    };
    let solutions = options.strategy.solutions(candidates);

    let mut ranked: Vec<RankedSuggestion> = guesses
        .par_iter()
        .map(|guess| {
            let entropy = entropy_with(source, guess, &solutions);
            let frequency = corpus.frequency(guess);
            RankedSuggestion {
                word: *guess,
                score: entropy * frequency,
                entropy,
                frequency,
            }
        })
        .collect();

    // sort_by is stable
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked.truncate(options.top_n);

    log::debug!(
        "ranked {} guesses against {} solutions ({}) in {:.2?}",
        guesses.len(),
        solutions.len(),
        options.strategy,
        start.elapsed()
    );

    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Pattern, evaluate};
    use crate::corpus::{FREQUENCY_FLOOR, FrequencyTable};
    use crate::solver::cache::FeedbackCache;
    use crate::solver::filter::narrow;

    const SMALL: &[&str] = &[
        "crane", "slate", "stale", "tales", "least", "apple", "angle", "alien", "amber", "annex",
    ];

    fn corpus() -> Corpus {
        Corpus::from_slice(SMALL).unwrap()
    }

    fn flat_corpus(words: &[&str]) -> Corpus {
        let table = FrequencyTable::from_entries("en", words.iter().map(|w| (*w, 0.5)));
        Corpus::from_slice(words).unwrap().with_frequencies(table)
    }

    #[test]
    fn empty_candidates_give_empty_ranking() {
        let corpus = corpus();
        assert!(rank(&[], &ConstraintState::new(), &corpus).is_empty());
    }

    #[test]
    fn ranking_is_bounded_sorted_and_from_input() {
        let corpus = corpus();
        let ranked = rank(corpus.words(), &ConstraintState::new(), &corpus);

        assert_eq!(ranked.len(), DEFAULT_TOP_N);
        assert!(ranked.windows(2).all(|pair| pair[0].score >= pair[1].score));
        for suggestion in &ranked {
            assert!(corpus.contains(&suggestion.word));
            let expected = suggestion.entropy * suggestion.frequency;
            assert!((suggestion.score - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn fewer_candidates_than_top_n() {
        let corpus = corpus();
        let candidates: Vec<Word> = corpus.words()[..2].to_vec();
        let ranked = rank(&candidates, &ConstraintState::new(), &corpus);
        assert_eq!(ranked.len(), 2);
    }

    #[test]
    fn ranking_is_deterministic() {
        let corpus = corpus();
        let first = rank(corpus.words(), &ConstraintState::new(), &corpus);
        let second = rank(corpus.words(), &ConstraintState::new(), &corpus);
        assert_eq!(first, second);
    }

    #[test]
    fn ties_keep_input_order() {
        // Equal weights and symmetric anagrams give equal scores
        let words = ["abcde", "bcdea", "cdeab"];
        let corpus = flat_corpus(&words);
        let options = RankOptions {
            top_n: 3,
            ..RankOptions::default()
        };
        let ranked = rank_with(
            corpus.words(),
            &ConstraintState::new(),
            &corpus,
            &options,
            &DirectFeedback,
        );

        let order: Vec<&str> = ranked.iter().map(|s| s.word.text()).collect();
        assert_eq!(order, words);
    }

    #[test]
    fn frequency_breaks_entropy_ties() {
        let words = ["abcde", "bcdea"];
        let table = FrequencyTable::from_entries("en", [("abcde", 0.001), ("bcdea", 0.5)]);
        let corpus = Corpus::from_slice(&words).unwrap().with_frequencies(table);

        let ranked = rank(corpus.words(), &ConstraintState::new(), &corpus);
        assert_eq!(ranked[0].word.text(), "bcdea");
    }

    #[test]
    fn listed_word_beats_unlisted_at_equal_entropy() {
        // Each word splits the pair in two, so only the weight differs
        let corpus = Corpus::from_slice(&["duvet", "death"]).unwrap();
        let ranked = rank(corpus.words(), &ConstraintState::new(), &corpus);

        assert!((ranked[0].entropy - ranked[1].entropy).abs() < 1e-12);
        assert_eq!(ranked[0].word.text(), "death");
        assert!((ranked[1].frequency - FREQUENCY_FLOOR).abs() < f64::EPSILON);
    }

    #[test]
    fn only_consistent_words_are_offered() {
        let corpus = corpus();
        let guess = Word::new("crane").unwrap();
        let pattern = evaluate(&guess, &Word::new("slate").unwrap());
        let mut state = ConstraintState::new();
        state.absorb(&guess, pattern);

        // Rank the whole list; words ruled out by the state are not offered
        let ranked = rank(corpus.words(), &state, &corpus);
        assert!(!ranked.is_empty());
        for suggestion in &ranked {
            assert!(state.is_consistent(&suggestion.word));
        }

        let remaining = narrow(corpus.words(), &guess, pattern, &state);
        let ranked = rank(&remaining, &state, &corpus);
        assert_eq!(ranked.len(), remaining.len());
    }

    #[test]
    fn cached_and_sampled_ranking() {
        let corpus = corpus();
        let cache = FeedbackCache::new(1 << 10);
        let exhaustive = rank(corpus.words(), &ConstraintState::new(), &corpus);
        let cached = rank_with(
            corpus.words(),
            &ConstraintState::new(),
            &corpus,
            &RankOptions::default(),
            &cache,
        );
        assert_eq!(exhaustive, cached);

        let sampled = rank_with(
            corpus.words(),
            &ConstraintState::new(),
            &corpus,
            &RankOptions {
                top_n: DEFAULT_TOP_N,
                strategy: RankingStrategy::Sampled { limit: 4 },
            },
            &cache,
        );
        assert_eq!(sampled.len(), DEFAULT_TOP_N);
        assert!(sampled.iter().all(|s| s.entropy <= 2.0 + 1e-9));
    }

    #[test]
    fn solved_state_ranks_the_answer() {
        let corpus = corpus();
        let guess = Word::new("slate").unwrap();
        let mut state = ConstraintState::new();
        state.absorb(&guess, Pattern::PERFECT);

        let remaining = narrow(corpus.words(), &guess, Pattern::PERFECT, &state);
        let ranked = rank(&remaining, &state, &corpus);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].word, guess);
        assert!(ranked[0].score.abs() < f64::EPSILON);
    }
}
