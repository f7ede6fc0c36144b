//! Ranking strategies
//!
//! Ranking is quadratic in the candidate count. When the opening guess comes
//! back all gray the candidate set is still large, so the session can switch to
//! a sampled strategy that scores every guess against an evenly spaced subset
//! of the candidates instead of all of them.

use crate::core::{Pattern, Word};
use std::borrow::Cow;
use std::fmt;

/// Default number of hypothetical solutions used by the sampled strategy
pub const DEFAULT_SAMPLE_LIMIT: usize = 400;

/// How a round's guesses are scored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RankingStrategy {
    /// Every candidate is evaluated against every candidate
    #[default]
    Exhaustive,
    /// Every candidate is evaluated against at most `limit` candidates
    Sampled { limit: usize },
}

impl RankingStrategy {
    /// The hypothetical solutions a guess is scored against
    ///
    /// The sample takes every k-th candidate in order, so it is deterministic
    /// for a given candidate list.
    #[must_use]
    pub fn solutions<'a>(&self, candidates: &'a [Word]) -> Cow<'a, [Word]> {
        match *self {
            Self::Sampled { limit } if limit > 0 && candidates.len() > limit => {
                let step = candidates.len().div_ceil(limit);
                Cow::Owned(candidates.iter().step_by(step).copied().collect())
            }
            _ => Cow::Borrowed(candidates),
        }
    }
}

impl fmt::Display for RankingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exhaustive => f.write_str("exhaustive"),
            Self::Sampled { limit } => write!(f, "fast (sample {limit})"),
        }
    }
}

/// Strategy preference set by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrategyChoice {
    /// Exhaustive, except after an all-gray opening on a large candidate set
    #[default]
    Auto,
    Exhaustive,
    Fast,
}

impl StrategyChoice {
    /// Create a choice from its name
    ///
    /// Supported names: "auto", "exhaustive" / "full", "fast" / "sampled".
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "auto" => Some(Self::Auto),
            "exhaustive" | "full" => Some(Self::Exhaustive),
            "fast" | "sampled" => Some(Self::Fast),
            _ => None,
        }
    }

    /// Pick the strategy for the next ranking
    ///
    /// `opening` is the feedback of the first round, if one was played.
    #[must_use]
    pub const fn resolve(
        self,
        opening: Option<Pattern>,
        candidate_count: usize,
        sample_limit: usize,
    ) -> RankingStrategy {
        let sampled = RankingStrategy::Sampled {
            limit: sample_limit,
        };
        match self {
            Self::Exhaustive => RankingStrategy::Exhaustive,
            Self::Fast => sampled,
            Self::Auto => match opening {
                Some(pattern) if pattern.is_all_absent() && candidate_count > sample_limit => {
                    sampled
                }
                _ => RankingStrategy::Exhaustive,
            },
        }
    }
}
