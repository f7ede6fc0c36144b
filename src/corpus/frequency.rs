//! Word usage weights
//!
//! A `FrequencyTable` maps words to a relative usage weight in (0, 1] for one
//! language. Words the table does not know get a small positive floor, so every
//! word stays rankable and a score is never multiplied by zero.

use super::embedded::FREQUENCIES;
use crate::core::Word;
use crate::error::SolverError;
use rustc_hash::FxHashMap;
use std::fs;
use std::path::Path;

/// Weight returned for words missing from the table
pub const FREQUENCY_FLOOR: f64 = 1e-5;

/// Language tag of the embedded table
pub const DEFAULT_LANGUAGE: &str = "en";

#[derive(Debug, Clone)]
pub struct FrequencyTable {
    language: String,
    weights: FxHashMap<Word, f64>,
}

impl FrequencyTable {
    /// Empty table: every lookup returns the floor
    #[must_use]
    pub fn empty(language: &str) -> Self {
        Self {
            language: language.to_string(),
            weights: FxHashMap::default(),
        }
    }

    /// Table compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_entries(DEFAULT_LANGUAGE, FREQUENCIES.iter().copied())
    }

    /// Build a table from (word, weight) pairs
    ///
    /// Entries that are not five-letter words, or whose weight falls outside
    /// (0, 1], are skipped. A repeated word keeps its first weight.
    pub fn from_entries<'a, I>(language: &str, entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        let mut table = Self::empty(language);
        for (text, weight) in entries {
            if !(weight > 0.0 && weight <= 1.0) {
                log::debug!("skipping weight {weight} for {text:?}: outside (0, 1]");
                continue;
            }
            match Word::new(text) {
                Ok(word) => {
                    table.weights.entry(word).or_insert(weight);
                }
                Err(e) => log::debug!("skipping frequency entry {text:?}: {e}"),
            }
        }
        table
    }

    /// Parse `word weight` lines; blank lines and `#` comments are ignored
    #[must_use]
    pub fn parse(language: &str, content: &str) -> Self {
        let entries = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .filter_map(|line| {
                let mut fields = line.split_whitespace();
                let word = fields.next()?;
                match fields.next().map(str::parse::<f64>) {
                    Some(Ok(weight)) => Some((word, weight)),
                    _ => {
                        log::debug!("skipping malformed frequency line {line:?}");
                        None
                    }
                }
            });
        Self::from_entries(language, entries)
    }

    /// Load a table from a file of `word weight` lines
    ///
    /// # Errors
    ///
    /// Returns `SolverError::CorpusLoad` if the file cannot be read or holds no
    /// usable entry.
    pub fn load<P: AsRef<Path>>(path: P, language: &str) -> Result<Self, SolverError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| SolverError::corpus_file(path, e))?;

        let table = Self::parse(language, &content);
        if table.is_empty() {
            return Err(SolverError::corpus_file(path, "no usable frequency entries"));
        }

        log::debug!(
            "loaded {} {} weights from {}",
            table.len(),
            table.language,
            path.display()
        );
        Ok(table)
    }

    /// Usage weight of a word, or `FREQUENCY_FLOOR` when unknown
    #[inline]
    #[must_use]
    pub fn lookup(&self, word: &Word) -> f64 {
        self.weights.get(word).copied().unwrap_or(FREQUENCY_FLOOR)
    }

    /// Whether the table holds an explicit weight for the word
    #[must_use]
    pub fn knows(&self, word: &Word) -> bool {
        self.weights.contains_key(word)
    }

    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::embedded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn w(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn unknown_words_get_floor() {
        let table = FrequencyTable::empty("en");
        assert!((table.lookup(&w("crane")) - FREQUENCY_FLOOR).abs() < f64::EPSILON);
        assert!(FREQUENCY_FLOOR > 0.0);
    }

    #[test]
    fn parse_reads_weights_and_skips_garbage() {
        let content = "# header\ncrane 0.002\nSLATE 1e-4\nbroken\nzzzzz abc\ntoolong 0.1\nnegat -0.5\nhuges 2.0\n";
        let table = FrequencyTable::parse("en", content);

        assert_eq!(table.len(), 2);
        assert!((table.lookup(&w("crane")) - 0.002).abs() < 1e-12);
        assert!((table.lookup(&w("slate")) - 1e-4).abs() < 1e-12);
        assert!(!table.knows(&w("negat")));
        assert!(!table.knows(&w("huges")));
        assert_eq!(table.language(), "en");
    }

    #[test]
    fn embedded_weights_are_in_range() {
        let table = FrequencyTable::embedded();
        assert!(!table.is_empty());
        assert_eq!(table.language(), DEFAULT_LANGUAGE);

        for &(text, _) in FREQUENCIES {
            let weight = table.lookup(&w(text));
            assert!(weight > 0.0 && weight <= 1.0, "{text} has weight {weight}");
        }
    }

    #[test]
    fn embedded_weights_sit_above_floor() {
        for &(text, weight) in FREQUENCIES {
            assert!(weight > FREQUENCY_FLOOR, "{text} has weight {weight}");
        }
    }

    #[test]
    fn listed_words_outweigh_unlisted() {
        let table = FrequencyTable::embedded();
        assert!(!table.knows(&w("duvet")));
        for listed in ["about", "black", "death", "crane"] {
            assert!(table.knows(&w(listed)));
            assert!(table.lookup(&w(listed)) > table.lookup(&w("duvet")), "{listed}");
        }
    }

    #[test]
    fn load_reads_file_with_language_tag() {
        let path = std::env::temp_dir().join(format!("wordle_ranker_freq_{}.txt", std::process::id()));
        fs::write(&path, "# test weights\ncrane 0.25\nslate 1e-3\nbroken\n").unwrap();

        let table = FrequencyTable::load(&path, "fr");
        fs::remove_file(&path).unwrap();
        let table = table.unwrap();

        assert_eq!(table.language(), "fr");
        assert_eq!(table.len(), 2);
        assert!((table.lookup(&w("crane")) - 0.25).abs() < 1e-12);
        assert!((table.lookup(&w("about")) - FREQUENCY_FLOOR).abs() < f64::EPSILON);
    }

    #[test]
    fn load_without_entries_fails() {
        let path = std::env::temp_dir().join(format!("wordle_ranker_nofreq_{}.txt", std::process::id()));
        fs::write(&path, "# nothing here\nbroken\n").unwrap();

        let result = FrequencyTable::load(&path, DEFAULT_LANGUAGE);
        fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(SolverError::CorpusLoad { .. })));
    }

    #[test]
    fn load_missing_file_fails() {
        let result = FrequencyTable::load("/definitely/not/here/freq.txt", "en");
        assert!(matches!(result, Err(SolverError::CorpusLoad { .. })));
    }
}
