//! Feedback lookup with optional memoization
//!
//! Ranking evaluates every candidate against every other candidate, so the
//! same (guess, solution) pair comes up again on every round. Evaluation is
//! pure, so a cached pattern never goes stale and the cache is never
//! invalidated; it simply stops growing once it reaches its capacity.

use crate::core::{Pattern, Word};
use rustc_hash::FxHashMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Anything that can answer "what feedback does `guess` get against `solution`"
///
/// Implementations must agree with `Pattern::evaluate`.
pub trait FeedbackSource: Sync {
    fn feedback(&self, guess: &Word, solution: &Word) -> Pattern;
}

/// Evaluates every pair directly
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectFeedback;

impl FeedbackSource for DirectFeedback {
    #[inline]
    fn feedback(&self, guess: &Word, solution: &Word) -> Pattern {
        Pattern::evaluate(guess, solution)
    }
}

/// Bounded memo table keyed by (guess, solution)
#[derive(Debug)]
pub struct FeedbackCache {
    capacity: usize,
    entries: RwLock<FxHashMap<(Word, Word), Pattern>>,
    hits: AtomicUsize,
    misses: AtomicUsize,
}

/// Hit/miss counters for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    pub capacity: usize,
    pub entries: usize,
    pub hits: usize,
    pub misses: usize,
}

impl FeedbackCache {
    /// Create a cache holding at most `capacity` patterns (0 disables storage)
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: RwLock::new(FxHashMap::default()),
            hits: AtomicUsize::new(0),
            misses: AtomicUsize::new(0),
        }
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        let entries = self.entries.read().map_or(0, |map| map.len());
        CacheStats {
            capacity: self.capacity,
            entries,
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}

impl FeedbackSource for FeedbackCache {
    fn feedback(&self, guess: &Word, solution: &Word) -> Pattern {
        let key = (*guess, *solution);

        if let Ok(map) = self.entries.read()
            && let Some(&pattern) = map.get(&key)
        {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return pattern;
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let pattern = Pattern::evaluate(guess, solution);

        if let Ok(mut map) = self.entries.write()
            && map.len() < self.capacity
        {
            map.insert(key, pattern);
        }

        pattern
    }
}
