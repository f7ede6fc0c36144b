//! Wordle solving algorithms
//!
//! Narrowing, entropy scoring and ranking, tied together by `Session`.

pub mod cache;
pub mod entropy;
mod filter;
mod ranker;
mod session;
pub mod strategy;

pub use cache::{CacheStats, DirectFeedback, FeedbackCache, FeedbackSource};
pub use filter::narrow;
pub use ranker::{DEFAULT_TOP_N, RankOptions, RankedSuggestion, rank, rank_with};
pub use session::{DEFAULT_CACHE_CAPACITY, Round, Session, SessionConfig};
pub use strategy::{DEFAULT_SAMPLE_LIMIT, RankingStrategy, StrategyChoice};
