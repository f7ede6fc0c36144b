//! Wordle feedback evaluation and representation
//!
//! A pattern encodes the feedback for one guess using base-3 digits:
//! - 0 = Absent (gray, B)
//! - 1 = Present (yellow, Y)
//! - 2 = Correct (green, G)
//!
//! The pattern is stored as a single u8 value (0-242), where each position
//! contributes digit × 3^position to the total.

use super::word::{WORD_LENGTH, Word};
use crate::error::InputError;
use std::fmt;

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    Absent,
    Present,
    Correct,
}

impl Feedback {
    /// Parse one feedback symbol
    ///
    /// # Errors
    /// Returns `InputError::FeedbackSymbol` for anything outside G/Y/B, `-`/`_`
    /// and the square emojis.
    pub fn from_symbol(symbol: char) -> Result<Self, InputError> {
        match symbol {
            'G' | 'g' | '🟩' => Ok(Self::Correct),
            'Y' | 'y' | '🟨' => Ok(Self::Present),
            'B' | 'b' | '-' | '_' | '⬜' | '⬛' => Ok(Self::Absent),
            other => Err(InputError::FeedbackSymbol(other)),
        }
    }

    /// Letter used in the textual encoding
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => 'B',
        }
    }

    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    const fn digit(self) -> u8 {
        match self {
            Self::Absent => 0,
            Self::Present => 1,
            Self::Correct => 2,
        }
    }

    const fn from_digit(digit: u8) -> Self {
        match digit {
            2 => Self::Correct,
            1 => Self::Present,
            _ => Self::Absent,
        }
    }
}

/// Feedback pattern for a whole guess
///
/// Represents the colored feedback as a single byte value.
/// Value range: 0-242 (3^5 - 1 = 243 possible patterns)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern(u8);

impl Pattern {
    /// All greens (perfect match)
    pub const PERFECT: Self = Self(242); // 2 + 2×3 + 2×9 + 2×27 + 2×81

    /// All grays
    pub const ALL_ABSENT: Self = Self(0);

    /// Number of distinct patterns
    pub const COUNT: usize = 243;

    /// Create a new pattern from a raw value
    ///
    /// # Panics
    /// Panics in debug mode if value >= 243
    #[inline]
    #[must_use]
    pub const fn new(value: u8) -> Self {
        debug_assert!((value as usize) < Self::COUNT, "Pattern value must be < 243");
        Self(value)
    }

    /// Get the raw pattern value (0-242)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.0 == Self::PERFECT.0
    }

    #[inline]
    #[must_use]
    pub const fn is_all_absent(self) -> bool {
        self.0 == Self::ALL_ABSENT.0
    }

    /// Build a pattern from per-position feedback
    #[must_use]
    pub fn from_symbols(symbols: [Feedback; WORD_LENGTH]) -> Self {
        let mut pattern = 0u8;
        let mut multiplier = 1u8;
        for symbol in symbols {
            pattern += symbol.digit() * multiplier;
            multiplier *= 3;
        }
        Self(pattern)
    }

    /// Decode the pattern into per-position feedback
    #[must_use]
    pub fn symbols(self) -> [Feedback; WORD_LENGTH] {
        let mut result = [Feedback::Absent; WORD_LENGTH];
        let mut val = self.0;
        for slot in &mut result {
            *slot = Feedback::from_digit(val % 3);
            val /= 3;
        }
        result
    }

    /// Calculate the pattern when `guess` is played and `solution` is the target
    ///
    /// Two passes, so repeated letters are credited the way the game does it:
    /// 1. Exact position matches are Correct and consume that solution letter.
    /// 2. Every other guess letter takes the leftmost unconsumed equal letter
    ///    of the solution (Present), or is Absent if none is left.
    ///
    /// # Examples
    /// ```
    /// use wordle_ranker::core::{Pattern, Word};
    ///
    /// let guess = Word::new("apple").unwrap();
    /// let solution = Word::new("allee").unwrap();
    /// assert_eq!(Pattern::evaluate(&guess, &solution).to_string(), "GBBYG");
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, solution: &Word) -> Self {
        let guess = guess.chars();
        let solution = solution.chars();
        let mut result = [Feedback::Absent; WORD_LENGTH];
        let mut consumed = [false; WORD_LENGTH];

        for i in 0..WORD_LENGTH {
            if guess[i] == solution[i] {
                result[i] = Feedback::Correct;
                consumed[i] = true;
            }
        }

        for i in 0..WORD_LENGTH {
            if result[i] == Feedback::Correct {
                continue;
            }
            let hit = (0..WORD_LENGTH).find(|&j| !consumed[j] && solution[j] == guess[i]);
            if let Some(j) = hit {
                result[i] = Feedback::Present;
                consumed[j] = true;
            }
        }

        Self::from_symbols(result)
    }

    /// Parse a pattern from a string like "GYBBG" or "🟩🟨⬜⬜🟩"
    ///
    /// # Errors
    /// Returns `InputError` when the string is not exactly five valid symbols.
    ///
    /// # Examples
    /// ```
    /// use wordle_ranker::core::Pattern;
    ///
    /// let p1 = Pattern::parse("GY-GY").unwrap();
    /// let p2 = Pattern::parse("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(p1, p2);
    /// assert!(Pattern::parse("GYX").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, InputError> {
        let s = s.trim();
        let len = s.chars().count();
        if len != WORD_LENGTH {
            return Err(InputError::FeedbackLength(len));
        }

        let mut symbols = [Feedback::Absent; WORD_LENGTH];
        for (slot, ch) in symbols.iter_mut().zip(s.chars()) {
            *slot = Feedback::from_symbol(ch)?;
        }

        Ok(Self::from_symbols(symbols))
    }

    /// Convert pattern to emoji string, e.g. "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.symbols().iter().map(|s| s.emoji()).collect()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in self.symbols() {
            write!(f, "{}", symbol.symbol())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Pattern {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Compute the feedback `guess` receives when `solution` is the answer
#[inline]
#[must_use]
pub fn evaluate(guess: &Word, solution: &Word) -> Pattern {
    Pattern::evaluate(guess, solution)
}

/// Whether `candidate` could be the answer given `observed` feedback for `guess`
///
/// This is the only consistency test between a reported pattern and a
/// hypothetical solution.
#[inline]
#[must_use]
pub fn equals_pattern(guess: &Word, candidate: &Word, observed: Pattern) -> bool {
    Pattern::evaluate(guess, candidate) == observed
}
