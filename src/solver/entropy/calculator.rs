//! Shannon entropy calculation for Wordle patterns
//!
//! Given a guess and set of candidates, computes the expected information gain.

use crate::core::{Pattern, Word};
use crate::solver::cache::{DirectFeedback, FeedbackSource};
use rustc_hash::FxHashMap;

/// Comprehensive metrics for evaluating a guess
#[derive(Debug, Clone, Copy)]
pub struct GuessMetrics {
    /// Shannon entropy (expected information gain in bits)
    pub entropy: f64,
    /// Expected number of remaining candidates after this guess
    pub expected_remaining: f64,
    /// Maximum partition size (worst-case remaining candidates)
    pub max_partition: usize,
}

/// Calculate Shannon entropy for a guess against candidates
///
/// Returns the expected information gain in bits.
///
/// # Formula
/// H(X) = -Σ p(x) * log₂(p(x))
///
/// where p(x) is the fraction of candidates that would produce pattern x.
///
/// # Examples
/// ```
/// use wordle_ranker::core::Word;
/// use wordle_ranker::solver::entropy::calculate_entropy;
///
/// let guess = Word::new("crane").unwrap();
/// let candidates = vec![
///     Word::new("slate").unwrap(),
///     Word::new("irate").unwrap(),
/// ];
///
/// let entropy = calculate_entropy(&guess, &candidates);
/// assert!(entropy > 0.0 && entropy <= 1.0); // log2(2) = 1 bit max
/// ```
#[must_use]
pub fn calculate_entropy(guess: &Word, candidates: &[Word]) -> f64 {
    entropy_with(&DirectFeedback, guess, candidates)
}

/// Entropy using a specific feedback source (e.g. a cache)
#[must_use]
pub fn entropy_with<F>(source: &F, guess: &Word, candidates: &[Word]) -> f64
where
    F: FeedbackSource + ?Sized,
{
    if candidates.is_empty() {
        return 0.0;
    }

    let pattern_counts = group_by_pattern(source, guess, candidates);
    shannon_entropy(&pattern_counts)
}

/// Group candidates by the pattern they produce with the guess
fn group_by_pattern<F>(source: &F, guess: &Word, candidates: &[Word]) -> FxHashMap<Pattern, usize>
where
    F: FeedbackSource + ?Sized,
{
    let mut counts = FxHashMap::default();

    for candidate in candidates {
        let pattern = source.feedback(guess, candidate);
        *counts.entry(pattern).or_insert(0) += 1;
    }

    counts
}

/// Calculate Shannon entropy from pattern distribution
///
/// H = -Σ p * log₂(p)
///
/// # Properties
/// - Returns 0.0 for certain outcome (one pattern with p=1)
/// - Maximized for uniform distribution
/// - Always in range [0, log₂(n)] for n patterns
///
/// # Examples
/// ```
/// use wordle_ranker::solver::entropy::shannon_entropy;
/// use rustc_hash::FxHashMap;
/// use wordle_ranker::core::Pattern;
///
/// let mut uniform = FxHashMap::default();
/// uniform.insert(Pattern::new(0), 25);
/// uniform.insert(Pattern::new(1), 25);
/// uniform.insert(Pattern::new(2), 25);
/// uniform.insert(Pattern::new(3), 25);
///
/// let entropy = shannon_entropy(&uniform);
/// assert!((entropy - 2.0).abs() < 0.001); // log2(4) = 2 bits
/// ```
#[must_use]
pub fn shannon_entropy<S>(pattern_counts: &std::collections::HashMap<Pattern, usize, S>) -> f64
where
    S: std::hash::BuildHasher,
{
    let total = pattern_counts.values().sum::<usize>() as f64;

    if total == 0.0 {
        return 0.0;
    }

    pattern_counts
        .values()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Calculate comprehensive metrics for a guess
///
/// Returns entropy, expected remaining candidates, and max partition size.
#[must_use]
pub fn calculate_metrics(guess: &Word, candidates: &[Word]) -> GuessMetrics {
    if candidates.is_empty() {
        return GuessMetrics {
            entropy: 0.0,
            expected_remaining: 0.0,
            max_partition: 0,
        };
    }

    let pattern_counts = group_by_pattern(&DirectFeedback, guess, candidates);
    let total = candidates.len() as f64;

    let entropy = shannon_entropy(&pattern_counts);

    // Σ p × size: the size of the bucket the answer lands in, on average
    let expected_remaining: f64 = pattern_counts
        .values()
        .map(|&count| {
            let p = count as f64 / total;
            p * count as f64
        })
        .sum();

    let max_partition = pattern_counts.values().copied().max().unwrap_or(0);

    GuessMetrics {
        entropy,
        expected_remaining,
        max_partition,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::cache::FeedbackCache;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(t).unwrap()).collect()
    }

    #[test]
    fn shannon_entropy_uniform_distribution() {
        // 4 patterns, each appears once = log2(4) = 2 bits
        let mut counts = FxHashMap::default();
        counts.insert(Pattern::new(0), 1);
        counts.insert(Pattern::new(1), 1);
        counts.insert(Pattern::new(2), 1);
        counts.insert(Pattern::new(3), 1);

        let entropy = shannon_entropy(&counts);
        assert!((entropy - 2.0).abs() < 0.001);
    }

    #[test]
    fn shannon_entropy_certain_outcome() {
        let mut counts = FxHashMap::default();
        counts.insert(Pattern::new(0), 10);

        let entropy = shannon_entropy(&counts);
        assert!(entropy.abs() < 0.001);
    }

    #[test]
    fn shannon_entropy_skewed_distribution() {
        let mut uniform = FxHashMap::default();
        uniform.insert(Pattern::new(0), 25);
        uniform.insert(Pattern::new(1), 25);
        uniform.insert(Pattern::new(2), 25);
        uniform.insert(Pattern::new(3), 25);

        let mut skewed = FxHashMap::default();
        skewed.insert(Pattern::new(0), 97);
        skewed.insert(Pattern::new(1), 1);
        skewed.insert(Pattern::new(2), 1);
        skewed.insert(Pattern::new(3), 1);

        assert!(shannon_entropy(&uniform) > shannon_entropy(&skewed));
    }

    #[test]
    fn shannon_entropy_empty() {
        let counts: FxHashMap<Pattern, usize> = FxHashMap::default();
        assert!(shannon_entropy(&counts).abs() < f64::EPSILON);
    }

    #[test]
    fn entropy_of_mixed_a_words_is_positive() {
        let candidates = words(&["apple", "angle", "alien", "amber", "annex"]);
        let entropy = calculate_entropy(&candidates[0], &candidates);
        assert!(entropy > 0.0);
        assert!(entropy <= (candidates.len() as f64).log2() + 1e-9);
    }

    #[test]
    fn calculate_entropy_all_same_pattern() {
        let guess = Word::new("zzzzz").unwrap();
        let candidates = words(&["aaaaa", "bbbbb", "ccccc"]);

        // All produce the all-gray pattern = 0 bits
        assert!(calculate_entropy(&guess, &candidates).abs() < 0.001);
    }

    #[test]
    fn calculate_entropy_perfect_split() {
        let guess = Word::new("slate").unwrap();
        let candidates = words(&["slate", "zzzzz"]);

        assert!((calculate_entropy(&guess, &candidates) - 1.0).abs() < 0.001);
    }

    #[test]
    fn calculate_entropy_empty_candidates() {
        let guess = Word::new("crane").unwrap();
        assert!(calculate_entropy(&guess, &[]).abs() < f64::EPSILON);
    }

    #[test]
    fn cached_entropy_matches_direct() {
        let cache = FeedbackCache::new(1000);
        let candidates = words(&["crane", "slate", "stale", "tales", "least"]);

        for guess in &candidates {
            let direct = calculate_entropy(guess, &candidates);
            let cached = entropy_with(&cache, guess, &candidates);
            assert!((direct - cached).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn metrics_describe_partition() {
        let guess = Word::new("slate").unwrap();
        let candidates = words(&["slate", "zzzzz", "yyyyy"]);
        let metrics = calculate_metrics(&guess, &candidates);

        // {slate} and {zzzzz, yyyyy}
        assert_eq!(metrics.max_partition, 2);
        assert!((metrics.expected_remaining - 5.0 / 3.0).abs() < 1e-9);
        assert!(metrics.entropy > 0.9 && metrics.entropy < 0.92);
    }
}
