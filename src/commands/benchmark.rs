//! Benchmark command
//!
//! Self-plays a sample of corpus words and reports the guess distribution.

use super::solve::{MAX_GUESSES, self_play};
use crate::core::Word;
use crate::corpus::Corpus;
use crate::error::SolverError;
use crate::solver::{Session, SessionConfig};
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub failed: Vec<Word>,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Guess count -> number of solved games
    pub distribution: BTreeMap<usize, usize>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Pick `count` distinct targets from the corpus
///
/// The same seed always yields the same targets. Without a seed the sample
/// comes from OS entropy.
#[must_use]
pub fn pick_targets(corpus: &Corpus, count: usize, seed: Option<u64>) -> Vec<Word> {
    let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    corpus
        .words()
        .choose_multiple(&mut rng, count)
        .copied()
        .collect()
}

/// Self-play every target with one session reset between games
///
/// The opening ranking is identical for every game, so it is computed once.
///
/// # Errors
///
/// Returns `SolverError::ExhaustedCandidates` if a target is missing from the
/// corpus.
pub fn run_benchmark(
    corpus: &Corpus,
    config: SessionConfig,
    targets: &[Word],
    show_progress: bool,
) -> Result<BenchmarkResult, SolverError> {
    let start = Instant::now();
    let mut session = Session::with_config(corpus, config);
    let opening = session.suggestions()?.first().copied();
    if let Some(first) = opening {
        log::debug!("benchmark opening: {} ({:.3} bits)", first.word, first.entropy);
    }

    let pb = if show_progress {
        ProgressBar::new(targets.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .map_or_else(|_| ProgressStyle::default_bar(), |style| {
                style.progress_chars("█▓▒░")
            }),
    );

    let mut solved = 0;
    let mut failed = Vec::new();
    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;
    let mut distribution = BTreeMap::new();

    for target in targets {
        session.reset();
        let steps = self_play(&mut session, target, MAX_GUESSES, opening)?;

        if session.is_solved() {
            let guesses = steps.len();
            solved += 1;
            total_guesses += guesses;
            min_guesses = min_guesses.min(guesses);
            max_guesses = max_guesses.max(guesses);
            *distribution.entry(guesses).or_insert(0) += 1;
        } else {
            failed.push(*target);
        }

        pb.set_message(target.text().to_uppercase());
        pb.inc(1);
    }
    pb.finish_and_clear();

    let duration = start.elapsed();
    let stats = session.cache_stats();
    log::debug!(
        "feedback cache: {}/{} entries, {} hits, {} misses",
        stats.entries,
        stats.capacity,
        stats.hits,
        stats.misses
    );

    Ok(BenchmarkResult {
        total_words: targets.len(),
        solved,
        failed,
        total_guesses,
        average_guesses: if solved == 0 {
            0.0
        } else {
            total_guesses as f64 / solved as f64
        },
        min_guesses: if solved == 0 { 0 } else { min_guesses },
        max_guesses,
        distribution,
        duration,
        words_per_second: targets.len() as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORDS: &[&str] = &[
        "crane", "slate", "stale", "tales", "least", "apple", "angle", "alien", "amber", "annex",
    ];

    fn corpus() -> Corpus {
        Corpus::from_slice(WORDS).unwrap()
    }

    #[test]
    fn benchmark_runs() {
        let corpus = corpus();
        let result =
            run_benchmark(&corpus, SessionConfig::default(), corpus.words(), false).unwrap();

        assert_eq!(result.total_words, 10);
        assert_eq!(result.solved + result.failed.len(), result.total_words);
        assert!(result.total_guesses > 0);
        assert!(result.average_guesses >= 1.0);
        assert!(result.min_guesses >= 1);
        assert!(result.max_guesses <= MAX_GUESSES);
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let corpus = corpus();
        let result =
            run_benchmark(&corpus, SessionConfig::default(), corpus.words(), false).unwrap();

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.solved);
        for &guess_count in result.distribution.keys() {
            assert!((1..=MAX_GUESSES).contains(&guess_count));
        }
        assert!(result.average_guesses >= result.min_guesses as f64);
        assert!(result.average_guesses <= result.max_guesses as f64);
    }

    #[test]
    fn benchmark_empty_target_list() {
        let corpus = corpus();
        let result = run_benchmark(&corpus, SessionConfig::default(), &[], false).unwrap();

        assert_eq!(result.total_words, 0);
        assert_eq!(result.total_guesses, 0);
        assert_eq!(result.min_guesses, 0);
    }

    #[test]
    fn pick_targets_is_seeded_and_distinct() {
        let corpus = corpus();
        let first = pick_targets(&corpus, 4, Some(7));
        let second = pick_targets(&corpus, 4, Some(7));

        assert_eq!(first, second);
        assert_eq!(first.len(), 4);
        for (i, word) in first.iter().enumerate() {
            assert!(corpus.contains(word));
            assert!(!first[i + 1..].contains(word));
        }
    }

    #[test]
    fn pick_targets_caps_at_corpus_size() {
        let corpus = corpus();
        assert_eq!(pick_targets(&corpus, 50, Some(1)).len(), WORDS.len());
    }
}
