//! Formatting utilities for terminal output

use crate::core::{Feedback, Pattern, Word};
use colored::{ColoredString, Colorize};

/// Upper-case a guess and paint each letter with its feedback color
#[must_use]
pub fn colored_guess(word: &Word, pattern: Pattern) -> String {
    word.text()
        .to_uppercase()
        .chars()
        .zip(pattern.symbols())
        .map(|(letter, feedback)| paint(letter, feedback).to_string())
        .collect()
}

fn paint(letter: char, feedback: Feedback) -> ColoredString {
    let cell = format!(" {letter} ");
    match feedback {
        Feedback::Correct => cell.black().on_green().bold(),
        Feedback::Present => cell.black().on_yellow().bold(),
        Feedback::Absent => cell.white().on_bright_black(),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Clamped to [0, width]
    let filled = ((value / max).max(0.0) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format entropy as a bar scaled to `max_entropy` bits
#[must_use]
pub fn entropy_bar(entropy: f64, max_entropy: f64, width: usize) -> String {
    if max_entropy <= 0.0 {
        return create_progress_bar(0.0, 1.0, width);
    }
    create_progress_bar(entropy, max_entropy, width)
}

/// Usage weight in scientific notation, e.g. `4.00e-4`
#[must_use]
pub fn format_frequency(frequency: f64) -> String {
    format!("{frequency:.2e}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colored_guess_keeps_letters() {
        colored::control::set_override(false);
        let word = Word::new("crane").unwrap();
        let text = colored_guess(&word, Pattern::parse("BBGBG").unwrap());
        assert_eq!(text, " C  R  A  N  E ");
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn entropy_bar_handles_zero_scale() {
        assert_eq!(entropy_bar(1.0, 0.0, 4), "░░░░");
        assert_eq!(entropy_bar(2.0, 4.0, 4), "██░░");
    }

    #[test]
    fn frequency_uses_scientific_notation() {
        assert_eq!(format_frequency(4.0e-4), "4.00e-4");
    }
}
