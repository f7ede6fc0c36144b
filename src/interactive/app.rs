//! TUI application state and logic

use crate::core::{Pattern, Word};
use crate::error::SolverError;
use crate::solver::{RankedSuggestion, Session};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Candidates listed in the candidates panel
pub const CANDIDATE_PREVIEW: usize = 20;

const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App<'c> {
    pub session: Session<'c>,
    pub suggestions: Vec<RankedSuggestion>,
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub pending_guess: Option<Word>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Typing the word that was played
    Guess,
    /// Typing the feedback the game showed for `pending_guess`
    Feedback,
    Solved,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub guess_distribution: [usize; 7],
}

impl<'c> App<'c> {
    #[must_use]
    pub fn new(session: Session<'c>) -> Self {
        let mut app = Self {
            session,
            suggestions: Vec::new(),
            input_mode: InputMode::Guess,
            input_buffer: String::new(),
            pending_guess: None,
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
        };
        app.add_message(
            "Welcome! Suggestions weigh information gain by word frequency.",
            MessageStyle::Info,
        );
        app.add_message(
            "Type your guess, or press Enter to play the top suggestion.",
            MessageStyle::Info,
        );
        app.refresh_suggestions();
        app
    }

    /// Re-rank after the session changed
    pub fn refresh_suggestions(&mut self) {
        match self.session.suggestions() {
            Ok(suggestions) => self.suggestions = suggestions,
            Err(SolverError::ExhaustedCandidates) => {
                self.suggestions.clear();
                self.add_message(
                    "No candidates remain - feedback may be wrong. Ctrl-U to undo.",
                    MessageStyle::Error,
                );
            }
            Err(e) => {
                self.suggestions.clear();
                self.add_message(&e.to_string(), MessageStyle::Error);
            }
        }
    }

    /// Top-ranked word, if any
    #[must_use]
    pub fn top_suggestion(&self) -> Option<Word> {
        self.suggestions.first().map(|s| s.word)
    }

    /// Accept the guess typed so far; an empty buffer means the top suggestion
    pub fn submit_guess(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);

        let guess = if input.trim().is_empty() {
            match self.top_suggestion() {
                Some(word) => word,
                None => {
                    self.add_message("No suggestion to play.", MessageStyle::Error);
                    return;
                }
            }
        } else {
            match Word::new(&input) {
                Ok(word) => word,
                Err(e) => {
                    self.add_message(&e.to_string(), MessageStyle::Error);
                    self.input_buffer = input;
                    return;
                }
            }
        };

        if !self.session.corpus().contains(&guess) {
            self.add_message(
                &format!("{} is not in the word list", guess.text().to_uppercase()),
                MessageStyle::Info,
            );
        }

        self.pending_guess = Some(guess);
        self.input_mode = InputMode::Feedback;
        self.add_message(
            &format!(
                "Enter feedback for {} (e.g. 'GY-GY' or '🟩🟨⬜🟩🟨')",
                guess.text().to_uppercase()
            ),
            MessageStyle::Info,
        );
    }

    /// Apply the typed feedback to the pending guess
    pub fn submit_feedback(&mut self) {
        let Some(guess) = self.pending_guess else {
            self.input_mode = InputMode::Guess;
            return;
        };

        let pattern = match Pattern::parse(&self.input_buffer) {
            Ok(pattern) => pattern,
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                return;
            }
        };

        self.input_buffer.clear();
        self.pending_guess = None;
        let round = self.session.apply(guess, pattern);

        if self.session.is_solved() {
            self.record_win();
            return;
        }

        self.input_mode = InputMode::Guess;
        self.refresh_suggestions();
        if round.candidates_after > 0 {
            self.add_message(
                &format!("{} candidates remaining", round.candidates_after),
                MessageStyle::Info,
            );
        }
    }

    fn record_win(&mut self) {
        let guess_count = self.session.history().len();
        self.stats.games_won += 1;
        self.stats.total_games += 1;
        if let Some(slot) = self.stats.guess_distribution.get_mut(guess_count) {
            *slot += 1;
        }

        self.input_mode = InputMode::Solved;
        self.suggestions.clear();

        let celebration = match guess_count {
            1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
            2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
            3 => "✨ SPLENDID! Three guesses! ✨",
            4 => "👏 GREAT JOB! Four guesses! 👏",
            5 => "🎉 NICE WORK! Five guesses! 🎉",
            6 => "😅 PHEW! Got it in six! 😅",
            _ => "🎊 SOLVED! 🎊",
        };
        self.add_message(celebration, MessageStyle::Success);
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    pub fn new_game(&mut self) {
        if !self.session.history().is_empty() && !self.session.is_solved() {
            self.stats.total_games += 1;
        }

        self.session.reset();
        self.input_buffer.clear();
        self.pending_guess = None;
        self.messages.clear();
        self.input_mode = InputMode::Guess;
        self.add_message("New game started!", MessageStyle::Info);
        self.refresh_suggestions();
    }

    /// Cancel a pending guess, or drop the last played round
    pub fn undo_last(&mut self) {
        self.input_buffer.clear();

        if self.pending_guess.take().is_some() {
            self.input_mode = InputMode::Guess;
            self.add_message("Guess cancelled.", MessageStyle::Info);
            return;
        }

        if self.input_mode == InputMode::Solved {
            self.stats.games_won = self.stats.games_won.saturating_sub(1);
            self.stats.total_games = self.stats.total_games.saturating_sub(1);
            let guess_count = self.session.history().len();
            if let Some(slot) = self.stats.guess_distribution.get_mut(guess_count) {
                *slot = slot.saturating_sub(1);
            }
        }

        match self.session.undo() {
            Some(round) => {
                self.input_mode = InputMode::Guess;
                self.add_message(
                    &format!("Undone {}", round.guess.text().to_uppercase()),
                    MessageStyle::Info,
                );
                self.refresh_suggestions();
            }
            None => self.add_message("Nothing to undo!", MessageStyle::Error),
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    #[must_use]
    pub fn candidates_count(&self) -> usize {
        self.session.candidates().len()
    }

    /// Handle one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('u') if ctrl => self.undo_last(),
            KeyCode::Char('r') if ctrl => self.new_game(),
            _ => match self.input_mode {
                InputMode::Solved => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                    KeyCode::Char('n') => self.new_game(),
                    _ => {}
                },
                InputMode::Guess => match key.code {
                    KeyCode::Esc => self.should_quit = true,
                    KeyCode::Char(c) if c.is_ascii_alphabetic() && self.input_buffer.len() < 5 => {
                        self.input_buffer.push(c.to_ascii_lowercase());
                    }
                    KeyCode::Backspace => {
                        self.input_buffer.pop();
                    }
                    KeyCode::Enter => self.submit_guess(),
                    _ => {}
                },
                InputMode::Feedback => match key.code {
                    KeyCode::Esc => self.undo_last(),
                    KeyCode::Char(c) if self.input_buffer.chars().count() < 5 => {
                        self.input_buffer.push(c);
                    }
                    KeyCode::Backspace => {
                        self.input_buffer.pop();
                    }
                    KeyCode::Enter => self.submit_feedback(),
                    _ => {}
                },
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (Windows also reports releases)
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::Corpus;

    fn corpus() -> Corpus {
        Corpus::from_slice(&["crane", "slate", "stale", "tales", "least"]).unwrap()
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn ctrl(app: &mut App, c: char) {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn starts_with_suggestions() {
        let corpus = corpus();
        let app = App::new(Session::new(&corpus));

        assert_eq!(app.input_mode, InputMode::Guess);
        assert_eq!(app.suggestions.len(), 5);
        assert_eq!(app.candidates_count(), 5);
    }

    #[test]
    fn empty_enter_plays_top_suggestion() {
        let corpus = corpus();
        let mut app = App::new(Session::new(&corpus));
        let top = app.top_suggestion().unwrap();

        press(&mut app, KeyCode::Enter);

        assert_eq!(app.input_mode, InputMode::Feedback);
        assert_eq!(app.pending_guess, Some(top));
    }

    #[test]
    fn typed_round_narrows_candidates() {
        let corpus = corpus();
        let mut app = App::new(Session::new(&corpus));

        type_text(&mut app, "crane");
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "BBGBG");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.input_mode, InputMode::Guess);
        assert_eq!(app.candidates_count(), 2);
        assert_eq!(app.session.history().len(), 1);
        assert_eq!(app.suggestions.len(), 2);
    }

    #[test]
    fn invalid_feedback_keeps_waiting() {
        let corpus = corpus();
        let mut app = App::new(Session::new(&corpus));

        type_text(&mut app, "crane");
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "BBXBG");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.input_mode, InputMode::Feedback);
        assert!(app.session.history().is_empty());
        assert_eq!(
            app.messages.last().map(|m| m.style),
            Some(MessageStyle::Error)
        );
    }

    #[test]
    fn winning_round_switches_to_solved() {
        let corpus = corpus();
        let mut app = App::new(Session::new(&corpus));

        type_text(&mut app, "slate");
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "GGGGG");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.input_mode, InputMode::Solved);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.guess_distribution[1], 1);

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.input_mode, InputMode::Guess);
        assert_eq!(app.candidates_count(), 5);
    }

    #[test]
    fn ctrl_u_undoes_last_round() {
        let corpus = corpus();
        let mut app = App::new(Session::new(&corpus));

        type_text(&mut app, "crane");
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "BBGBG");
        press(&mut app, KeyCode::Enter);
        ctrl(&mut app, 'u');

        assert!(app.session.history().is_empty());
        assert_eq!(app.candidates_count(), 5);
    }

    #[test]
    fn exhausted_feedback_clears_suggestions() {
        let corpus = corpus();
        let mut app = App::new(Session::new(&corpus));

        type_text(&mut app, "zzzzz");
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "GGGGB");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.candidates_count(), 0);
        assert!(app.suggestions.is_empty());
    }

    #[test]
    fn ctrl_c_and_esc_quit() {
        let corpus = corpus();
        let mut app = App::new(Session::new(&corpus));
        ctrl(&mut app, 'c');
        assert!(app.should_quit);

        let mut app = App::new(Session::new(&corpus));
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }
}
