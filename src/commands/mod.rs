//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod simple;
pub mod solve;
pub mod suggest;

pub use analyze::{AnalysisResult, analyze_word};
pub use benchmark::{BenchmarkResult, pick_targets, run_benchmark};
pub use simple::run_simple;
pub use solve::{GuessStep, SolveConfig, SolveResult, self_play, solve_word};
pub use suggest::{SuggestReport, parse_round, suggest};
