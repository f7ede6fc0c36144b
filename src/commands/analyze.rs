//! Word analysis command
//!
//! Analyzes the entropy and information content of a specific word.

use crate::core::Word;
use crate::corpus::Corpus;
use crate::error::SolverError;
use crate::solver::entropy::calculate_metrics;

/// Result of analyzing a word
pub struct AnalysisResult {
    pub word: Word,
    pub entropy: f64,
    pub expected_reduction: f64,
    pub expected_remaining: f64,
    pub max_partition: usize,
    pub frequency: f64,
    /// False when `frequency` is the floor for an unlisted word
    pub weighted: bool,
    pub language: String,
    pub score: f64,
    pub total_candidates: usize,
    pub in_corpus: bool,
}

/// Analyze a word as an opening guess against the whole corpus
///
/// The word does not have to be in the corpus; it then scores with the
/// frequency floor unless the weight table knows it.
///
/// # Errors
///
/// Returns `SolverError::InvalidInput` if the word is not five ASCII letters.
pub fn analyze_word(word: &str, corpus: &Corpus) -> Result<AnalysisResult, SolverError> {
    let word = Word::new(word)?;
    let metrics = calculate_metrics(&word, corpus.words());
    let frequency = corpus.frequency(&word);

    Ok(AnalysisResult {
        word,
        entropy: metrics.entropy,
        expected_reduction: metrics.entropy.exp2(),
        expected_remaining: metrics.expected_remaining,
        max_partition: metrics.max_partition,
        frequency,
        weighted: corpus.frequencies().knows(&word),
        language: corpus.frequencies().language().to_string(),
        score: metrics.entropy * frequency,
        total_candidates: corpus.len(),
        in_corpus: corpus.contains(&word),
    })
}
