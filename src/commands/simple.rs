//! Simple interactive CLI mode
//!
//! Text-based interactive solver without TUI

use crate::core::{Pattern, Word};
use crate::output::formatters::colored_guess;
use crate::output::print_suggestions;
use crate::solver::Session;
use anyhow::Context;
use colored::Colorize;
use std::io::{self, Write};

/// One line of user input, classified
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Quit,
    New,
    Undo,
    Win,
    Text(String),
}

impl Reply {
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => Self::Quit,
            "new" | "n" => Self::New,
            "undo" | "u" => Self::Undo,
            "win" | "correct" | "solved" => Self::Win,
            _ => Self::Text(input.to_string()),
        }
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading from stdin or writing to stdout fails.
pub fn run_simple(session: &mut Session<'_>) -> anyhow::Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║              Wordle Ranker - Interactive Mode                ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Suggestions are ranked by information gain weighted by word frequency.");
    println!("Type your guess (or press Enter to play the top suggestion), then");
    println!("enter the feedback the game showed:\n");
    println!("  - Use G/g/🟩 for green (correct position)");
    println!("  - Use Y/y/🟨 for yellow (wrong position)");
    println!("  - Use B/-/_/⬜ for gray (not in word)");
    println!("  - Or type 'win' if you got it right!\n");
    println!("Commands: 'quit' to exit, 'new' for new game, 'undo' to undo last guess\n");

    loop {
        if session.is_exhausted() {
            println!("\n❌ No candidates remain! Your feedback may be incorrect.");
            println!("Type 'undo' to go back, or 'new' to start over.\n");

            match Reply::parse(&get_user_input("Command")?) {
                Reply::Quit => break,
                Reply::Undo => undo(session),
                Reply::New => new_game(session),
                _ => {}
            }
            continue;
        }

        let suggestions = match session.suggestions() {
            Ok(suggestions) => suggestions,
            Err(e) if e.is_recoverable() => {
                println!("❌ {e}\n");
                continue;
            }
            Err(e) => return Err(e.into()),
        };
        let remaining = session.candidates().len();

        println!("────────────────────────────────────────────────────────────");
        println!(
            "Turn {}: {remaining} candidates remaining",
            session.history().len() + 1
        );
        println!("────────────────────────────────────────────────────────────");
        print_suggestions(&suggestions, remaining);

        if !session.state().is_empty() {
            println!("\n🔎 Known: {}", session.state());
        }

        if remaining <= 10 {
            println!("\nRemaining candidates:");
            for candidate in session.candidates() {
                println!("  • {}", candidate.text().to_uppercase());
            }
        }
        println!();

        let top = suggestions.first().map(|s| s.word);
        let prompt = top.map_or_else(
            || "Guess".to_string(),
            |word| format!("Guess (Enter = {})", word.text().to_uppercase()),
        );

        let guess = match Reply::parse(&get_user_input(&prompt)?) {
            Reply::Quit => break,
            Reply::New => {
                new_game(session);
                continue;
            }
            Reply::Undo => {
                undo(session);
                continue;
            }
            Reply::Win => {
                println!("Enter the guess first, then 'win' as its feedback.\n");
                continue;
            }
            Reply::Text(text) if text.is_empty() => match top {
                Some(word) => word,
                None => continue,
            },
            Reply::Text(text) => match Word::new(&text) {
                Ok(word) => word,
                Err(e) => {
                    println!("❌ {e}\n");
                    continue;
                }
            },
        };

        let pattern = loop {
            let prompt = format!(
                "Feedback for {} (G/Y/B, 'win', or command)",
                guess.text().to_uppercase()
            );
            match Reply::parse(&get_user_input(&prompt)?) {
                Reply::Quit => {
                    goodbye();
                    return Ok(());
                }
                Reply::New => {
                    new_game(session);
                    break None;
                }
                Reply::Undo => {
                    println!("Guess discarded.\n");
                    break None;
                }
                Reply::Win => break Some(Pattern::PERFECT),
                Reply::Text(text) => match Pattern::parse(&text) {
                    Ok(pattern) => break Some(pattern),
                    Err(e) => println!("❌ {e}\n"),
                },
            }
        };

        let Some(pattern) = pattern else {
            continue;
        };

        let round = session.apply(guess, pattern);
        println!(
            "\n{}  {} → {} candidates\n",
            colored_guess(&round.guess, round.pattern),
            round.candidates_before,
            round.candidates_after
        );

        if session.is_solved() {
            celebrate(session);

            let again = get_user_input("Play again? (yes/no)")?.to_lowercase();
            if !matches!(again.as_str(), "yes" | "y") {
                break;
            }
            new_game(session);
        }
    }

    goodbye();
    Ok(())
}

fn goodbye() {
    println!("\n👋 Thanks for playing!\n");
}

fn new_game(session: &mut Session<'_>) {
    session.reset();
    println!("\n🔄 New game started!\n");
}

fn undo(session: &mut Session<'_>) {
    match session.undo() {
        Some(round) => println!(
            "✓ Undone {}! Back to turn {}\n",
            round.guess.text().to_uppercase(),
            session.history().len() + 1
        ),
        None => println!("Nothing to undo!\n"),
    }
}

fn celebrate(session: &Session<'_>) {
    let turns = session.history().len();

    println!("\n{}", "═".repeat(70).bright_cyan());
    println!(
        "{}",
        "    🎉 🎊 ✨  W O R D L E   S O L V E D !  ✨ 🎊 🎉    "
            .bright_green()
            .bold()
    );
    println!("{}", "═".repeat(70).bright_cyan());

    let (headline, remark) = match turns {
        1 => ("🏆 Perfect!", "Incredible hole-in-one!"),
        2 => ("⭐ Excellent!", "Outstanding performance!"),
        3 => ("💫 Great!", "Very well played!"),
        4 => ("✨ Good!", "Nice work!"),
        5 => ("👍 Solved!", "Got it!"),
        _ => ("✓ Complete!", "Success!"),
    };

    println!("\n  {}", headline.bright_yellow().bold());
    println!("  {}", remark.bright_white());
    println!(
        "\n  Solution found in {} {}",
        turns.to_string().bright_cyan().bold(),
        if turns == 1 { "guess" } else { "guesses" }
    );

    println!("\n  Guess history:");
    for (i, round) in session.history().iter().enumerate() {
        println!(
            "    {}. {} {}",
            (i + 1).to_string().bright_black(),
            round.guess.text().to_uppercase().bright_white().bold(),
            round.pattern.to_emoji()
        );
    }

    println!("\n{}", "═".repeat(70).bright_cyan());
    println!();
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> anyhow::Result<String> {
    print!("{prompt}: ");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .context("failed to read from stdin")?;
    if read == 0 {
        // EOF behaves like quit
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}
