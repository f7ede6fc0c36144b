//! Word corpus for Wordle solving
//!
//! The corpus is the ordered dictionary the solver narrows from, paired with
//! a usage-weight table. It is loaded once and only read afterwards.

mod embedded;
pub mod frequency;
pub mod loader;

pub use embedded::{FREQUENCIES, WORDS, WORDS_COUNT};
pub use frequency::{DEFAULT_LANGUAGE, FREQUENCY_FLOOR, FrequencyTable};

use crate::core::Word;
use crate::error::SolverError;
use rustc_hash::FxHashSet;
use std::path::PathBuf;

/// Where the word list comes from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CorpusSource {
    /// The list compiled into the binary
    #[default]
    Embedded,
    /// A text file, one word per line
    File(PathBuf),
}

/// Ordered word list plus usage weights
#[derive(Debug, Clone)]
pub struct Corpus {
    words: Vec<Word>,
    index: FxHashSet<Word>,
    frequencies: FrequencyTable,
}

impl Corpus {
    /// Load a corpus with the embedded frequency table
    ///
    /// # Errors
    ///
    /// Returns `SolverError::CorpusLoad` when the source is unreadable or holds
    /// no five-letter words.
    ///
    /// # Examples
    /// ```
    /// use wordle_ranker::corpus::{Corpus, CorpusSource};
    ///
    /// let corpus = Corpus::load(&CorpusSource::Embedded).unwrap();
    /// assert!(!corpus.is_empty());
    /// ```
    pub fn load(source: &CorpusSource) -> Result<Self, SolverError> {
        let words = match source {
            CorpusSource::Embedded => loader::words_from_slice(WORDS),
            CorpusSource::File(path) => loader::load_from_file(path)?,
        };
        Self::new(words, FrequencyTable::embedded())
    }

    /// Build a corpus from words already in memory
    ///
    /// # Errors
    ///
    /// Returns `SolverError::CorpusLoad` when `words` is empty.
    pub fn new(words: Vec<Word>, frequencies: FrequencyTable) -> Result<Self, SolverError> {
        if words.is_empty() {
            return Err(SolverError::CorpusLoad {
                source_name: "word list".to_string(),
                reason: "no five-letter words".to_string(),
            });
        }

        let index = words.iter().copied().collect();
        log::debug!(
            "corpus ready: {} words, {} {} weights",
            words.len(),
            frequencies.len(),
            frequencies.language()
        );

        Ok(Self {
            words,
            index,
            frequencies,
        })
    }

    /// Build a corpus from string literals, skipping invalid entries
    ///
    /// # Errors
    ///
    /// Returns `SolverError::CorpusLoad` when no entry is a five-letter word.
    pub fn from_slice(words: &[&str]) -> Result<Self, SolverError> {
        Self::new(loader::words_from_slice(words), FrequencyTable::embedded())
    }

    /// Replace the usage-weight table
    #[must_use]
    pub fn with_frequencies(mut self, frequencies: FrequencyTable) -> Self {
        let weighted = self.words.iter().filter(|w| frequencies.knows(w)).count();
        log::debug!(
            "{weighted} of {} words have a {} usage weight",
            self.words.len(),
            frequencies.language()
        );
        self.frequencies = frequencies;
        self
    }

    /// All words in source order
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Relative usage weight in (0, 1]; unknown words get `FREQUENCY_FLOOR`
    #[inline]
    #[must_use]
    pub fn frequency(&self, word: &Word) -> f64 {
        self.frequencies.lookup(word)
    }

    #[must_use]
    pub const fn frequencies(&self) -> &FrequencyTable {
        &self.frequencies
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.index.contains(word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
