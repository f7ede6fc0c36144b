//! TUI rendering with ratatui
//!
//! Visualizations for the Wordle ranker interface.

use super::app::{App, CANDIDATE_PREVIEW, InputMode, MessageStyle};
use crate::core::{Feedback, Pattern, Word};
use crate::output::formatters::{entropy_bar, format_frequency};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);
    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 WORDLE RANKER - Interactive Mode")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_suggestions(f, app, chunks[0]);
    render_history(f, app, chunks[1]);
}

fn render_suggestions(f: &mut Frame, app: &App, area: Rect) {
    let max_entropy = (app.candidates_count().max(1) as f64).log2();

    let content: Vec<Line> = if app.suggestions.is_empty() {
        vec![Line::from("No suggestion available")]
    } else {
        app.suggestions
            .iter()
            .enumerate()
            .map(|(i, s)| {
                let word_style = if i == 0 {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };
                Line::from(vec![
                    Span::raw(format!("{}. ", i + 1)),
                    Span::styled(s.word.text().to_uppercase(), word_style),
                    Span::raw(format!("  score {:.2e}  ", s.score)),
                    Span::styled(
                        entropy_bar(s.entropy, max_entropy, 10),
                        Style::default().fg(Color::Green),
                    ),
                    Span::raw(format!(" {:.2} bits", s.entropy)),
                    Span::styled(
                        format!("  freq {}", format_frequency(s.frequency)),
                        Style::default().fg(Color::DarkGray),
                    ),
                ])
            })
            .collect()
    };

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(format!(" Top Suggestions ({}) ", app.session.strategy()))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn feedback_color(feedback: Feedback) -> Color {
    match feedback {
        Feedback::Correct => Color::Green,
        Feedback::Present => Color::Yellow,
        Feedback::Absent => Color::DarkGray,
    }
}

fn tiles(word: &Word, pattern: Pattern) -> Vec<Span<'static>> {
    word.text()
        .to_uppercase()
        .chars()
        .zip(pattern.symbols())
        .map(|(letter, feedback)| {
            Span::styled(
                format!(" {letter} "),
                Style::default()
                    .fg(Color::Black)
                    .bg(feedback_color(feedback))
                    .add_modifier(Modifier::BOLD),
            )
        })
        .collect()
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let history = app.session.history();

    let items: Vec<ListItem> = history
        .iter()
        .enumerate()
        .map(|(i, round)| {
            let mut spans = vec![Span::raw(format!("{}: ", i + 1))];
            spans.extend(tiles(&round.guess, round.pattern));

            let gained = if round.candidates_after > 0 {
                (round.candidates_before as f64 / round.candidates_after as f64).log2()
            } else {
                0.0
            };
            spans.push(Span::raw(format!(
                "  {} → {}  [{gained:.1} bits]",
                round.candidates_before, round.candidates_after
            )));
            ListItem::new(Line::from(spans))
        })
        .collect();

    let title = if app.session.state().is_empty() {
        " History ".to_string()
    } else {
        format!(" History | {} ", app.session.state())
    };
    let list = List::new(items).block(Block::default().title(title).borders(Borders::ALL));
    f.render_widget(list, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),      // Search space gauge
            Constraint::Percentage(60), // Candidates
            Constraint::Min(4),         // Messages
        ])
        .split(area);

    render_search_progress(f, app, chunks[0]);
    render_candidates(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_search_progress(f: &mut Frame, app: &App, area: Rect) {
    let total = app.session.corpus().len().max(1) as f64;
    let remaining = app.candidates_count();
    let total_bits = total.log2();
    let bits_gained = if remaining == 0 {
        total_bits
    } else {
        total_bits - (remaining as f64).log2()
    };
    let ratio = if total_bits > 0.0 {
        (bits_gained / total_bits).clamp(0.0, 1.0)
    } else {
        1.0
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Information Gained ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio(ratio)
        .label(format!("{bits_gained:.1}/{total_bits:.1} bits"));

    f.render_widget(gauge, area);
}

fn render_candidates(f: &mut Frame, app: &App, area: Rect) {
    let candidates = app.session.candidates();

    let mut lines: Vec<Line> = candidates
        .chunks(4)
        .take(CANDIDATE_PREVIEW.div_ceil(4))
        .map(|row| {
            Line::from(
                row.iter()
                    .map(|w| format!("{:<7}", w.text().to_uppercase()))
                    .collect::<String>(),
            )
        })
        .collect();

    if candidates.len() > CANDIDATE_PREVIEW {
        lines.push(Line::styled(
            format!("… and {} more", candidates.len() - CANDIDATE_PREVIEW),
            Style::default().fg(Color::DarkGray),
        ));
    }
    if candidates.is_empty() {
        lines.push(Line::styled(
            "No word fits the feedback",
            Style::default().fg(Color::Red),
        ));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(format!(" Candidates ({}) ", candidates.len()))
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );

    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let list = List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));
    f.render_widget(list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let guess_title;
    let (title, color) = match app.input_mode {
        InputMode::Solved => (
            " 🎉 CONGRATULATIONS! 🎉 | Press 'n' for new game or 'q' to quit ",
            Color::Green,
        ),
        InputMode::Guess => {
            guess_title = app.top_suggestion().map_or_else(
                || " Enter Guess ".to_string(),
                |w| format!(" Enter Guess | Enter alone plays {} ", w.text().to_uppercase()),
            );
            (guess_title.as_str(), Color::Cyan)
        }
        InputMode::Feedback => (
            " Enter Feedback (G=Green Y=Yellow B/-=Gray, or emojis) | ESC to cancel ",
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(app.input_buffer.as_str())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(20),
            Constraint::Percentage(50),
        ])
        .split(area);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        if app.stats.total_games > 0 {
            app.stats.games_won as f64 / app.stats.total_games as f64 * 100.0
        } else {
            0.0
        }
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[0],
    );

    let turn_text = format!("Turn {}", app.session.history().len() + 1);
    f.render_widget(
        Paragraph::new(turn_text).alignment(Alignment::Center),
        chunks[1],
    );

    let help = Paragraph::new("Ctrl-U: Undo | Ctrl-R: Restart | Esc/Ctrl-C: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::Corpus;
    use crate::solver::Session;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 32)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn renders_suggestions_and_candidates() {
        let corpus = Corpus::from_slice(&["crane", "slate", "stale", "tales", "least"]).unwrap();
        let app = App::new(Session::new(&corpus));
        let text = screen(&app);

        assert!(text.contains("Top Suggestions"));
        assert!(text.contains("Candidates (5)"));
        assert!(text.contains("SLATE"));
    }

    #[test]
    fn renders_empty_candidate_set() {
        let corpus = Corpus::from_slice(&["crane", "slate"]).unwrap();
        let mut session = Session::new(&corpus);
        session.submit("zzzzz", "GGGGG").unwrap();
        let app = App::new(session);

        assert!(screen(&app).contains("No suggestion available"));
    }
}
