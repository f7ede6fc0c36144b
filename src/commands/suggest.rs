//! One-shot suggestion command
//!
//! Replays rounds given on the command line as `guess:FEEDBACK` and prints the
//! ranking for the next guess.

use crate::core::{Pattern, Word};
use crate::error::{InputError, SolverError};
use crate::solver::{RankedSuggestion, RankingStrategy, Round, Session};

/// Everything the suggest command reports
#[derive(Debug, Clone)]
pub struct SuggestReport {
    pub rounds: Vec<Round>,
    pub remaining: usize,
    pub strategy: RankingStrategy,
    pub suggestions: Vec<RankedSuggestion>,
}

/// Parse a round written as `guess:FEEDBACK`, e.g. `crane:BBGBG`
///
/// # Errors
///
/// Returns `InputError::MalformedRound` when the separator is missing, or the
/// word/feedback validation error for either half.
///
/// # Examples
/// ```
/// use wordle_ranker::commands::parse_round;
///
/// let (guess, pattern) = parse_round("crane:BBGBG").unwrap();
/// assert_eq!(guess.text(), "crane");
/// assert_eq!(pattern.to_string(), "BBGBG");
/// assert!(parse_round("crane").is_err());
/// ```
pub fn parse_round(text: &str) -> Result<(Word, Pattern), InputError> {
    let (guess, feedback) = text
        .split_once(':')
        .ok_or_else(|| InputError::MalformedRound(text.to_string()))?;

    Ok((Word::new(guess)?, Pattern::parse(feedback)?))
}

/// Apply every round, then rank the next guess
///
/// All rounds are validated before any of them touches the session.
///
/// # Errors
///
/// Returns `SolverError::InvalidInput` for a malformed round and
/// `SolverError::ExhaustedCandidates` when the rounds rule out every word.
pub fn suggest<S: AsRef<str>>(
    session: &mut Session<'_>,
    rounds: &[S],
) -> Result<SuggestReport, SolverError> {
    let parsed = rounds
        .iter()
        .map(|round| parse_round(round.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;

    let rounds: Vec<Round> = parsed
        .into_iter()
        .map(|(guess, pattern)| session.apply(guess, pattern))
        .collect();

    let suggestions = session.suggestions()?;

    Ok(SuggestReport {
        rounds,
        remaining: session.candidates().len(),
        strategy: session.strategy(),
        suggestions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::Corpus;

    fn corpus() -> Corpus {
        Corpus::from_slice(&["crane", "slate", "stale", "tales", "least"]).unwrap()
    }

    #[test]
    fn parse_round_accepts_symbols_and_case() {
        let (guess, pattern) = parse_round("CRANE:bbgbg").unwrap();
        assert_eq!(guess.text(), "crane");
        assert_eq!(pattern, Pattern::parse("BBGBG").unwrap());

        let (_, pattern) = parse_round("crane:--G-G").unwrap();
        assert_eq!(pattern, Pattern::parse("BBGBG").unwrap());
    }

    #[test]
    fn parse_round_rejects_bad_input() {
        assert_eq!(
            parse_round("crane-BBGBG").unwrap_err(),
            InputError::MalformedRound("crane-BBGBG".to_string())
        );
        assert_eq!(
            parse_round("cran:BBGBG").unwrap_err(),
            InputError::WordLength(4)
        );
        assert_eq!(
            parse_round("crane:BBGBGB").unwrap_err(),
            InputError::FeedbackLength(6)
        );
    }

    #[test]
    fn suggest_without_rounds_ranks_whole_corpus() {
        let corpus = corpus();
        let mut session = Session::new(&corpus);
        let report = suggest::<&str>(&mut session, &[]).unwrap();

        assert!(report.rounds.is_empty());
        assert_eq!(report.remaining, 5);
        assert_eq!(report.suggestions.len(), 5);
    }

    #[test]
    fn suggest_after_rounds() {
        let corpus = corpus();
        let mut session = Session::new(&corpus);
        let report = suggest(&mut session, &["crane:BBGBG"]).unwrap();

        assert_eq!(report.rounds.len(), 1);
        assert_eq!(report.remaining, 2);
        let words: Vec<&str> = report.suggestions.iter().map(|s| s.word.text()).collect();
        assert!(words.contains(&"slate"));
        assert!(words.contains(&"stale"));
    }

    #[test]
    fn bad_round_leaves_session_untouched() {
        let corpus = corpus();
        let mut session = Session::new(&corpus);
        let err = suggest(&mut session, &["crane:BBGBG", "slate"]).unwrap_err();

        assert!(matches!(
            err,
            SolverError::InvalidInput(InputError::MalformedRound(_))
        ));
        assert!(session.history().is_empty());
    }

    #[test]
    fn contradictory_rounds_exhaust() {
        let corpus = corpus();
        let mut session = Session::new(&corpus);
        let err = suggest(&mut session, &["zzzzz:GGGGG"]).unwrap_err();
        assert_eq!(err, SolverError::ExhaustedCandidates);
    }
}
