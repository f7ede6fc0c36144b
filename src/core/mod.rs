//! Core domain types for Wordle
//!
//! Words, feedback patterns and the accumulated constraint state. Everything
//! here is pure and deterministic; the solver builds on these.

mod constraints;
mod feedback;
mod word;

pub use constraints::ConstraintState;
pub use feedback::{Feedback, Pattern, equals_pattern, evaluate};
pub use word::{WORD_LENGTH, Word};
