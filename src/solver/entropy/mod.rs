//! Entropy scoring
//!
//! Implements Shannon entropy calculation for Wordle pattern distributions.
//! This is the information half of a suggestion's score.

mod calculator;

pub use calculator::{GuessMetrics, calculate_entropy, calculate_metrics, entropy_with, shannon_entropy};
