//! Accumulated letter constraints
//!
//! `ConstraintState` is the running summary of every round's feedback:
//! letters proven at a position, letters known present but excluded from
//! some positions, and letters reported absent. It only ever grows.
//!
//! Repeated letters are handled with per-letter occurrence bounds. A round
//! that marks a letter green or yellow `k` times proves the solution holds at
//! least `k` of it; if the same round also marks that letter gray, the
//! solution holds exactly `k`. A gray letter therefore only rejects words that
//! carry more copies than the feedback accounted for, never the copies already
//! justified by a green or yellow elsewhere.

use super::feedback::{Feedback, Pattern};
use super::word::{WORD_LENGTH, Word};
use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt;

const ALPHABET: usize = 26;

#[inline]
fn letter_index(letter: u8) -> usize {
    usize::from(letter - b'a')
}

/// Running constraint summary for one solving session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstraintState {
    fixed: [Option<u8>; WORD_LENGTH],
    present: FxHashMap<u8, FxHashSet<usize>>,
    absent: FxHashSet<u8>,
    min_counts: [u8; ALPHABET],
    max_counts: [Option<u8>; ALPHABET],
}

impl ConstraintState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one round of feedback into the state
    ///
    /// Green fixes the position, yellow records a forbidden position for the
    /// letter, gray marks the letter absent. Nothing recorded earlier is ever
    /// removed; a green that contradicts an earlier green is logged and ignored.
    ///
    /// # Examples
    /// ```
    /// use wordle_ranker::core::{ConstraintState, Pattern, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let mut state = ConstraintState::new();
    /// state.absorb(&guess, Pattern::parse("BBGBG").unwrap());
    ///
    /// assert_eq!(state.fixed_at(2), Some(b'a'));
    /// assert!(state.is_absent(b'c'));
    /// ```
    pub fn absorb(&mut self, guess: &Word, pattern: Pattern) {
        let mut confirmed = [0u8; ALPHABET];
        let mut rejected = [false; ALPHABET];

        for (i, (&letter, symbol)) in guess.chars().iter().zip(pattern.symbols()).enumerate() {
            let idx = letter_index(letter);
            match symbol {
                Feedback::Correct => {
                    match self.fixed[i] {
                        Some(existing) if existing != letter => log::warn!(
                            "position {i} already fixed to '{}', ignoring '{}'",
                            char::from(existing),
                            char::from(letter)
                        ),
                        _ => self.fixed[i] = Some(letter),
                    }
                    confirmed[idx] += 1;
                }
                Feedback::Present => {
                    self.present.entry(letter).or_default().insert(i);
                    confirmed[idx] += 1;
                }
                Feedback::Absent => {
                    self.absent.insert(letter);
                    rejected[idx] = true;
                }
            }
        }

        for idx in 0..ALPHABET {
            self.min_counts[idx] = self.min_counts[idx].max(confirmed[idx]);
            if rejected[idx] {
                let cap = self.max_counts[idx].map_or(confirmed[idx], |c| c.min(confirmed[idx]));
                self.max_counts[idx] = Some(cap);
            }
        }
    }

    /// Hard-mode check: could `word` still be the answer under this state?
    ///
    /// Rejects a word when a fixed position differs, when a present letter is
    /// missing or sits at one of its excluded positions, or when a letter
    /// occurs more or fewer times than the feedback allows.
    #[must_use]
    pub fn is_consistent(&self, word: &Word) -> bool {
        let fixed_ok = self
            .fixed
            .iter()
            .enumerate()
            .all(|(i, fixed)| fixed.is_none_or(|letter| word.char_at(i) == letter));
        if !fixed_ok {
            return false;
        }

        let present_ok = self.present.iter().all(|(&letter, positions)| {
            word.has_letter(letter) && positions.iter().all(|&p| word.char_at(p) != letter)
        });
        if !present_ok {
            return false;
        }

        let absent_ok = self.absent.iter().all(|&letter| {
            let cap = self.max_counts[letter_index(letter)].unwrap_or(0);
            word.count_of(letter) <= usize::from(cap)
        });
        if !absent_ok {
            return false;
        }

        (b'a'..=b'z').all(|letter| {
            word.count_of(letter) >= usize::from(self.min_counts[letter_index(letter)])
        })
    }

    /// True when no round has been absorbed yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fixed.iter().all(Option::is_none) && self.present.is_empty() && self.absent.is_empty()
    }

    #[must_use]
    pub fn fixed_at(&self, position: usize) -> Option<u8> {
        self.fixed.get(position).copied().flatten()
    }

    /// Positions the letter is known not to occupy, if it is known present
    #[must_use]
    pub fn excluded_positions(&self, letter: u8) -> Option<&FxHashSet<usize>> {
        self.present.get(&letter)
    }

    #[must_use]
    pub fn is_absent(&self, letter: u8) -> bool {
        self.absent.contains(&letter)
    }

    /// Lower and upper occurrence bounds recorded for a letter
    ///
    /// The upper bound is `None` until some round marks the letter gray.
    #[must_use]
    pub fn letter_bounds(&self, letter: u8) -> (u8, Option<u8>) {
        let idx = letter_index(letter);
        (self.min_counts[idx], self.max_counts[idx])
    }
}

impl fmt::Display for ConstraintState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fixed: String = (0..WORD_LENGTH)
            .map(|i| self.fixed_at(i).map_or('.', char::from))
            .collect();
        write!(f, "fixed {fixed}")?;

        let mut wrote_present = false;
        for letter in b'a'..=b'z' {
            let Some(positions) = self.excluded_positions(letter) else {
                continue;
            };
            if !wrote_present {
                f.write_str(" | present")?;
                wrote_present = true;
            }
            let mut positions: Vec<_> = positions.iter().map(|p| p + 1).collect();
            positions.sort_unstable();
            write!(f, " {}∉{positions:?}", char::from(letter))?;
        }

        // Gray letters split into banned outright and capped by other marks
        let mut absent = String::new();
        let mut capped = Vec::new();
        for letter in (b'a'..=b'z').filter(|&l| self.is_absent(l)) {
            match self.letter_bounds(letter).1 {
                Some(cap) if cap > 0 => capped.push(format!("{}×{cap}", char::from(letter))),
                _ => absent.push(char::from(letter)),
            }
        }
        if !absent.is_empty() {
            write!(f, " | absent {absent}")?;
        }
        if !capped.is_empty() {
            write!(f, " | at most {}", capped.join(" "))?;
        }
        Ok(())
    }
}
