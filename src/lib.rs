//! Wordle Ranker
//!
//! An interactive Wordle helper. After each round it narrows the dictionary to
//! the words still consistent with the feedback and ranks them by expected
//! information gain weighted by how common each word is.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_ranker::core::{Pattern, Word, evaluate};
//! use wordle_ranker::corpus::Corpus;
//! use wordle_ranker::solver::Session;
//!
//! // Feedback for a guess against a known answer
//! let guess = Word::new("crane").unwrap();
//! let answer = Word::new("slate").unwrap();
//! assert_eq!(evaluate(&guess, &answer), Pattern::parse("BBGBG").unwrap());
//!
//! // Narrow and rank
//! let corpus = Corpus::from_slice(&["crane", "slate", "stale", "tales", "least"]).unwrap();
//! let mut session = Session::new(&corpus);
//! session.submit("crane", "BBGBG").unwrap();
//! for suggestion in session.suggestions().unwrap() {
//!     println!("{} {:.3}", suggestion.word, suggestion.entropy);
//! }
//! ```

// Core domain types
pub mod core;

// Word list and usage weights
pub mod corpus;

// Narrowing and ranking
pub mod solver;

pub mod error;
pub mod log;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

pub use error::{InputError, SolverError};
