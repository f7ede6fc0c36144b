//! Wordle word representation
//!
//! A Word is five lowercase ASCII letters stored inline, so it is `Copy` and
//! cheap to use as a hash key for the feedback cache.

use crate::error::InputError;
use std::fmt;

/// Number of letters in every word the solver handles
pub const WORD_LENGTH: usize = 5;

/// A 5-letter Wordle word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    chars: [u8; WORD_LENGTH],
}

impl Word {
    /// Create a new Word from a string, normalizing to lowercase
    ///
    /// # Errors
    /// Returns `InputError` if:
    /// - Length is not exactly 5
    /// - Contains anything other than ASCII letters
    ///
    /// # Examples
    /// ```
    /// use wordle_ranker::core::Word;
    ///
    /// let word = Word::new("CRANE").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, InputError> {
        let text = text.trim();
        let len = text.chars().count();
        if len != WORD_LENGTH {
            return Err(InputError::WordLength(len));
        }

        if !text.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(InputError::NonAlphabetic(text.to_string()));
        }

        let mut chars = [0u8; WORD_LENGTH];
        for (slot, byte) in chars.iter_mut().zip(text.bytes()) {
            *slot = byte.to_ascii_lowercase();
        }

        Ok(Self { chars })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        // Construction only admits ASCII letters.
        std::str::from_utf8(&self.chars).unwrap_or_default()
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LENGTH] {
        &self.chars
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.chars[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.chars.contains(&letter)
    }

    /// Number of times a letter occurs in the word
    #[inline]
    #[must_use]
    pub fn count_of(&self, letter: u8) -> usize {
        self.chars.iter().filter(|&&c| c == letter).count()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

impl std::str::FromStr for Word {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
