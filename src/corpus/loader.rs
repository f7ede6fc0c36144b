//! Word list loading utilities
//!
//! Turns raw text (one word per line) into an ordered, de-duplicated list of
//! five-letter words.

use crate::core::Word;
use crate::error::SolverError;
use rustc_hash::FxHashSet;
use std::fs;
use std::path::Path;

/// Parse words from text, one per line
///
/// Lines are trimmed and lowercased; only lines that form a valid five-letter
/// word are kept. Blank lines and `#` comments are ignored. Order follows the
/// input and repeated words keep their first position.
///
/// # Examples
/// ```
/// use wordle_ranker::corpus::loader::parse_words;
///
/// let words = parse_words("CRANE\nslate\n\ntoolong\ncrane\n");
/// let texts: Vec<&str> = words.iter().map(|w| w.text()).collect();
/// assert_eq!(texts, ["crane", "slate"]);
/// ```
#[must_use]
pub fn parse_words(content: &str) -> Vec<Word> {
    let mut seen = FxHashSet::default();
    let mut skipped = 0usize;

    let words: Vec<Word> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| match Word::new(line) {
            Ok(word) => Some(word),
            Err(_) => {
                skipped += 1;
                None
            }
        })
        .filter(|word| seen.insert(*word))
        .collect();

    if skipped > 0 {
        log::debug!("skipped {skipped} lines that are not five-letter words");
    }
    words
}

/// Load words from a file
///
/// # Errors
///
/// Returns `SolverError::CorpusLoad` if the file cannot be read or contains no
/// five-letter words.
///
/// # Examples
/// ```no_run
/// use wordle_ranker::corpus::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, SolverError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| SolverError::corpus_file(path, e))?;

    let words = parse_words(&content);
    if words.is_empty() {
        return Err(SolverError::corpus_file(path, "no five-letter words found"));
    }

    log::debug!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_ranker::corpus::loader::words_from_slice;
/// use wordle_ranker::corpus::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    let mut seen = FxHashSet::default();
    slice
        .iter()
        .filter_map(|&s| Word::new(s).ok())
        .filter(|word| seen.insert(*word))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["crane", "slate", "irate"]);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
        assert_eq!(words[2].text(), "irate");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["crane", "toolong", "abc", "slate"]);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
    }

    #[test]
    fn parse_words_normalizes_and_filters() {
        let content = "# comment\n  Crane \nSLATE\nab1de\nfour\nsixsix\n\ncrane\nstale\n";
        let words = parse_words(content);
        let texts: Vec<&str> = words.iter().map(Word::text).collect();

        assert_eq!(texts, ["crane", "slate", "stale"]);
    }

    #[test]
    fn load_from_file_reads_words() {
        let path = std::env::temp_dir().join(format!("wordle_ranker_words_{}.txt", std::process::id()));
        {
            let mut file = fs::File::create(&path).unwrap();
            writeln!(file, "crane\nslate\nxx").unwrap();
        }

        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(words.len(), 2);
    }

    #[test]
    fn load_from_file_missing_is_corpus_error() {
        let result = load_from_file("/definitely/not/here/words.txt");
        assert!(matches!(result, Err(SolverError::CorpusLoad { .. })));
    }

    #[test]
    fn load_from_file_without_words_is_corpus_error() {
        let path = std::env::temp_dir().join(format!("wordle_ranker_empty_{}.txt", std::process::id()));
        fs::write(&path, "toolong\nab\n").unwrap();

        let result = load_from_file(&path);
        fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(SolverError::CorpusLoad { .. })));
    }
}
