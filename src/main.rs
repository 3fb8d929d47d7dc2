//! Wordle Duel - CLI
//!
//! Two players race to guess their own hidden word. Guesses are locked in secretly
//! and revealed together, one row at a time.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{info, warn};
use wordle_duel::{
    commands::{run_simple, score_words},
    config::GameConfig,
    core::WordLength,
    logging::{LogTarget, init_logging},
    output::print_score_result,
    session::Session,
    wordlists::{RandomWordSource, WordList, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_duel",
    about = "Two-player simultaneous Wordle: lock in your guess, reveal together",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word length for the first game: 4, 5 (default) or 6
    #[arg(short, long, global = true, default_value = "5")]
    length: WordLength,

    /// Milliseconds a revealed row stays up before the next row opens
    #[arg(long, global = true, default_value_t = 300)]
    settle_ms: u64,

    /// Seed for reproducible solutions
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Write logs to this file (the TUI logs nowhere otherwise)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Hot-seat line mode without TUI
    Simple,

    /// Score one guess against a solution
    Score {
        /// The guessed word
        guess: String,

        /// The hidden word
        solution: String,
    },
}

/// Load the wordlist named by the -w flag
fn load_wordlist(mode: &str) -> Result<WordList> {
    match mode {
        "embedded" => Ok(WordList::embedded()),
        path => {
            let words = load_from_file(path)
                .with_context(|| format!("Failed to load wordlist from {path}"))?;
            for length in WordLength::ALL {
                if words.words(length).is_empty() {
                    warn!(%length, path, "wordlist has no words of this length");
                }
            }
            Ok(words)
        }
    }
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);

    let log_target = match (&command, cli.log_file.as_deref()) {
        (_, Some(path)) => LogTarget::File(path),
        (Commands::Play, None) => LogTarget::Off,
        (_, None) => LogTarget::Stderr,
    };
    init_logging(log_target)?;

    match command {
        Commands::Score { guess, solution } => run_score_command(&guess, &solution),
        Commands::Play => {
            let session = build_session(&cli)?;
            run_play_command(session)
        }
        Commands::Simple => {
            let session = build_session(&cli)?;
            run_simple(session)
        }
    }
}

fn build_session(cli: &Cli) -> Result<Session<RandomWordSource>> {
    let words = load_wordlist(&cli.wordlist)?;
    info!(words = words.len(), seed = ?cli.seed, "wordlist loaded");

    let source = match cli.seed {
        Some(seed) => RandomWordSource::seeded(words, seed),
        None => RandomWordSource::new(words),
    };
    let config = GameConfig::new(cli.length, Duration::from_millis(cli.settle_ms));

    Ok(Session::new(config, source, Instant::now()))
}

fn run_score_command(guess: &str, solution: &str) -> Result<()> {
    let result = score_words(guess, solution).map_err(|e| anyhow::anyhow!(e))?;
    print_score_result(&result);
    Ok(())
}

fn run_play_command(session: Session<RandomWordSource>) -> Result<()> {
    use wordle_duel::interactive::{App, run_tui};

    run_tui(App::new(session))
}
