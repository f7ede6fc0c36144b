//! Candidate narrowing

use crate::core::{ConstraintState, Pattern, Word, equals_pattern};

/// Keep the candidates that could still be the answer after one round
///
/// A word survives when `guess` would have produced exactly `pattern` against
/// it and it satisfies the accumulated `state`. Relative order is preserved.
/// `state` must already include this round's feedback.
///
/// # Examples
/// ```
/// use wordle_ranker::core::{ConstraintState, Pattern, Word};
/// use wordle_ranker::solver::narrow;
///
/// let candidates: Vec<Word> = ["crane", "slate", "stale"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let guess = Word::new("crane").unwrap();
/// let pattern = Pattern::parse("BBGBG").unwrap();
///
/// let mut state = ConstraintState::new();
/// state.absorb(&guess, pattern);
///
/// let remaining = narrow(&candidates, &guess, pattern, &state);
/// assert_eq!(remaining.len(), 2);
/// assert_eq!(remaining[0].text(), "slate");
/// ```
#[must_use]
pub fn narrow(
    candidates: &[Word],
    guess: &Word,
    pattern: Pattern,
    state: &ConstraintState,
) -> Vec<Word> {
    candidates
        .iter()
        .filter(|candidate| equals_pattern(guess, candidate, pattern) && state.is_consistent(candidate))
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::evaluate;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(t).unwrap()).collect()
    }

    fn texts(words: &[Word]) -> Vec<&str> {
        words.iter().map(Word::text).collect()
    }

    #[test]
    fn crane_against_slate_scenario() {
        let corpus = words(&["crane", "slate", "stale", "tales", "least"]);
        let guess = Word::new("crane").unwrap();
        let solution = Word::new("slate").unwrap();
        let pattern = evaluate(&guess, &solution);
        assert_eq!(pattern.to_string(), "BBGBG");

        let mut state = ConstraintState::new();
        state.absorb(&guess, pattern);
        let remaining = narrow(&corpus, &guess, pattern, &state);

        // TALES and LEAST have no A in the middle / E at the end
        assert_eq!(texts(&remaining), ["slate", "stale"]);
    }

    #[test]
    fn narrow_is_subset_satisfying_both_checks() {
        let corpus = words(&[
            "apple", "angle", "alien", "amber", "annex", "ample", "addle", "allee", "aisle",
        ]);
        let guess = Word::new("angle").unwrap();
        let solution = Word::new("ample").unwrap();
        let pattern = evaluate(&guess, &solution);

        let mut state = ConstraintState::new();
        state.absorb(&guess, pattern);
        let remaining = narrow(&corpus, &guess, pattern, &state);

        assert!(remaining.contains(&solution));
        for word in &remaining {
            assert!(corpus.contains(word));
            assert!(equals_pattern(&guess, word, pattern));
            assert!(state.is_consistent(word));
        }
    }

    #[test]
    fn narrow_preserves_order_and_input() {
        let corpus = words(&["stale", "slate", "crane"]);
        let guess = Word::new("crane").unwrap();
        let pattern = Pattern::parse("BBGBG").unwrap();
        let mut state = ConstraintState::new();
        state.absorb(&guess, pattern);

        let remaining = narrow(&corpus, &guess, pattern, &state);

        assert_eq!(texts(&remaining), ["stale", "slate"]);
        assert_eq!(corpus.len(), 3);
    }

    #[test]
    fn narrow_can_exhaust() {
        let corpus = words(&["crane", "slate"]);
        let guess = Word::new("zzzzz").unwrap();
        let mut state = ConstraintState::new();
        state.absorb(&guess, Pattern::PERFECT);

        assert!(narrow(&corpus, &guess, Pattern::PERFECT, &state).is_empty());
    }

    #[test]
    fn repeated_rounds_shrink_monotonically() {
        let corpus = words(&["crane", "slate", "stale", "tales", "least", "grate", "irate"]);
        let solution = Word::new("stale").unwrap();
        let mut state = ConstraintState::new();
        let mut candidates = corpus.clone();

        for guess in ["crane", "slate", "stale"] {
            let guess = Word::new(guess).unwrap();
            let pattern = evaluate(&guess, &solution);
            state.absorb(&guess, pattern);
            let next = narrow(&candidates, &guess, pattern, &state);
            assert!(next.len() <= candidates.len());
            assert!(next.contains(&solution));
            candidates = next;
        }

        assert_eq!(texts(&candidates), ["stale"]);
    }
}
