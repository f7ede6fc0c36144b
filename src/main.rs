//! Wordle Ranker - CLI
//!
//! Interactive Wordle helper with TUI and CLI modes, ranking guesses by
//! frequency-weighted information gain.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wordle_ranker::{
    commands::{SolveConfig, analyze_word, pick_targets, run_benchmark, run_simple, solve_word, suggest},
    corpus::{Corpus, CorpusSource, DEFAULT_LANGUAGE, FrequencyTable},
    output::{print_analysis_result, print_benchmark_result, print_solve_result, print_suggest_report},
    solver::{DEFAULT_TOP_N, Session, SessionConfig, StrategyChoice},
};

#[derive(Parser)]
#[command(
    name = "wordle_ranker",
    about = "Wordle helper ranking guesses by frequency-weighted information gain",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file, one word per line (default: embedded list)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Frequency file of `word weight` lines (default: embedded English table)
    #[arg(short = 'f', long, global = true)]
    frequencies: Option<PathBuf>,

    /// Language tag of the --frequencies file
    #[arg(short, long, global = true, default_value = DEFAULT_LANGUAGE)]
    language: String,

    /// Ranking strategy: auto (default), exhaustive, fast
    #[arg(short, long, global = true, default_value = "auto")]
    strategy: String,

    /// Number of suggestions to show
    #[arg(short, long, global = true, default_value_t = DEFAULT_TOP_N)]
    top: usize,

    /// Debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (interactive solver without TUI)
    Simple,

    /// Rank the next guess after the given rounds
    Suggest {
        /// A played round as GUESS:FEEDBACK, e.g. crane:BBGBG (repeatable)
        #[arg(short, long = "round")]
        rounds: Vec<String>,
    },

    /// Solve a specific target word by self-play
    Solve {
        /// The target word to solve
        word: String,
    },

    /// Analyze a word as an opening guess
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Self-play a random sample of the word list
    Benchmark {
        /// Number of random words to test
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// Seed for a reproducible sample
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn load_corpus(cli: &Cli) -> Result<Corpus> {
    let source = cli
        .wordlist
        .clone()
        .map_or(CorpusSource::Embedded, CorpusSource::File);
    let corpus = Corpus::load(&source).context("could not load the word list")?;

    match &cli.frequencies {
        Some(path) => {
            let table = FrequencyTable::load(path, &cli.language)
                .context("could not load the frequency table")?;
            Ok(corpus.with_frequencies(table))
        }
        None => Ok(corpus),
    }
}

fn session_config(cli: &Cli) -> Result<SessionConfig> {
    let strategy = StrategyChoice::from_name(&cli.strategy).with_context(|| {
        format!(
            "unknown strategy '{}' (expected auto, exhaustive or fast)",
            cli.strategy
        )
    })?;

    Ok(SessionConfig {
        top_n: cli.top,
        strategy,
        ..SessionConfig::default()
    })
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    wordle_ranker::log::init_logger(cli.verbose);

    let corpus = load_corpus(&cli)?;
    let config = session_config(&cli)?;

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => {
            use wordle_ranker::interactive::{App, run_tui};

            run_tui(App::new(Session::with_config(&corpus, config)))
        }
        Commands::Simple => run_simple(&mut Session::with_config(&corpus, config)),
        Commands::Suggest { rounds } => {
            let mut session = Session::with_config(&corpus, config);
            let report = suggest(&mut session, &rounds)?;
            print_suggest_report(&report);
            Ok(())
        }
        Commands::Solve { word } => {
            let solve = SolveConfig {
                session: config,
                ..SolveConfig::new(word)
            };
            let result = solve_word(solve, &corpus)?;
            print_solve_result(&result, cli.verbose);
            Ok(())
        }
        Commands::Analyze { word } => {
            let result = analyze_word(&word, &corpus)?;
            print_analysis_result(&result);
            Ok(())
        }
        Commands::Benchmark { count, seed } => {
            let targets = pick_targets(&corpus, count, seed);
            println!("Running benchmark on {} random words...", targets.len());

            let result = run_benchmark(&corpus, config, &targets, true)?;
            print_benchmark_result(&result);
            Ok(())
        }
    }
}
