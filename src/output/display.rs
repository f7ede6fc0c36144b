//! Display functions for command results

use super::formatters::{colored_guess, create_progress_bar, entropy_bar, format_frequency};
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult, SuggestReport};
use crate::solver::RankedSuggestion;
use colored::Colorize;

/// Print a ranked suggestion table
pub fn print_suggestions(suggestions: &[RankedSuggestion], remaining: usize) {
    let max_entropy = (remaining.max(1) as f64).log2();

    println!(
        "\n📊 {} ({remaining} candidates remaining)",
        "Top suggestions".bright_cyan().bold()
    );
    for (i, suggestion) in suggestions.iter().enumerate() {
        println!(
            "   {}. {}  score {:.3e}  [{}] {:.3} bits  freq {}",
            i + 1,
            suggestion.word.text().to_uppercase().bright_white().bold(),
            suggestion.score,
            entropy_bar(suggestion.entropy, max_entropy, 12).green(),
            suggestion.entropy,
            format_frequency(suggestion.frequency)
        );
    }
}

/// Print the result of the suggest command
pub fn print_suggest_report(report: &SuggestReport) {
    for round in &report.rounds {
        println!(
            "{}  {} → {}",
            colored_guess(&round.guess, round.pattern),
            round.candidates_before,
            round.candidates_after
        );
    }
    print_suggestions(&report.suggestions, report.remaining);
    println!("   {}", format!("strategy: {}", report.strategy).bright_black());
}

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            colored_guess(&step.word, step.pattern),
            step.pattern.to_emoji()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            println!("  Entropy:    {:.3} bits", step.entropy);
            println!("  Score:      {:.3e}", step.score);

            if step.candidates_after > 0 {
                let ratio = step.candidates_before as f64 / step.candidates_after as f64;
                println!(
                    "  Info gained: {:.3} bits ({ratio:.1}x reduction)",
                    ratio.log2()
                );
            }
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.guesses.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "ENTROPY ANALYSIS:".bright_cyan().bold(),
        result.word.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let max_entropy = (result.total_candidates.max(1) as f64).log2();
    let bar = entropy_bar(result.entropy, max_entropy, 30);

    println!("\n📊 Against {} words:", result.total_candidates);
    println!(
        "   Entropy:     [{}] {}",
        bar.green(),
        format!("{:.3} bits", result.entropy).bright_yellow()
    );
    println!("   Info gain:   {:.1}x reduction", result.expected_reduction);
    println!(
        "   Expected:    {:.1} candidates remain",
        result.expected_remaining
    );
    println!("   Worst case:  {} candidates", result.max_partition);
    let source = if result.weighted {
        format!("{} usage", result.language)
    } else {
        format!("floor, no {} weight", result.language)
    };
    println!(
        "   Frequency:   {} ({source})",
        format_frequency(result.frequency)
    );
    println!("   Score:       {:.3e}", result.score);

    if !result.in_corpus {
        println!(
            "\n   {}",
            "Not in the word list: it can be played but is never suggested.".yellow()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Solved:           {}",
        format!("{}/{}", result.solved, result.total_words).green()
    );
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    if result.total_words == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (&guess_count, &count) in &result.distribution {
        let pct = (count as f64 / result.total_words as f64) * 100.0;
        println!(
            "   {guess_count}: {} {count:4} ({pct:5.1}%)",
            create_progress_bar(pct, 100.0, 40).green()
        );
    }

    if !result.failed.is_empty() {
        let failed: Vec<String> = result
            .failed
            .iter()
            .map(|word| word.text().to_uppercase())
            .collect();
        println!(
            "\n❌ {} {}",
            "Unsolved:".red().bold(),
            failed.join(", ")
        );
    }
}
