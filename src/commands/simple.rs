//! Simple hot-seat CLI mode
//!
//! Text-based two-player game without TUI. Each line types a whole guess for one
//! player; the words are fed to the session key by key, exactly like the TUI does.

use crate::core::WordLength;
use crate::output::print_board;
use crate::round::{Key, KeyOutcome, PlayerId};
use crate::session::Session;
use crate::wordlists::WordSource;
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, Write};
use std::thread;
use std::time::Instant;

/// One line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineCommand {
    Guess { player: PlayerId, word: String },
    NewGame(Option<WordLength>),
    Board,
    Help,
    Quit,
}

/// Parse a line such as `left crane`, `r slate`, `new 6` or `quit`
#[must_use]
pub fn parse_command(line: &str) -> Option<LineCommand> {
    let mut parts = line.split_whitespace();
    let head = parts.next()?.to_lowercase();

    match head.as_str() {
        "quit" | "q" | "exit" => Some(LineCommand::Quit),
        "help" | "h" | "?" => Some(LineCommand::Help),
        "board" | "b" => Some(LineCommand::Board),
        "new" | "n" => match parts.next() {
            None => Some(LineCommand::NewGame(None)),
            Some(len) => len.parse().ok().map(|l| LineCommand::NewGame(Some(l))),
        },
        other => {
            let player = other.parse().ok()?;
            let word = parts.next()?.to_string();
            if parts.next().is_some() {
                return None;
            }
            Some(LineCommand::Guess { player, word })
        }
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<W: WordSource>(mut session: Session<W>) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Wordle Duel - Hot Seat Mode                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    print_help();

    session.run_due(Instant::now());
    print_board(session.round());

    loop {
        let Some(line) = get_user_input("duel")? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };

        let Some(command) = parse_command(&line) else {
            println!("{}", "❌ Unknown command, type 'help'".red());
            continue;
        };

        match command {
            LineCommand::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            LineCommand::Help => print_help(),
            LineCommand::Board => print_board(session.round()),
            LineCommand::NewGame(length) => {
                let length = length.unwrap_or(session.round().word_length());
                session.new_game(length, Instant::now());
                session.run_due(Instant::now());
                println!("\n🔄 New game with {length}-letter words!");
                print_board(session.round());
            }
            LineCommand::Guess { player, word } => {
                play_guess(&mut session, player, &word);
            }
        }

        if session.round().is_game_over() {
            println!("{}", "🏁 Game over! Type 'new' to play again.".bright_cyan());
        }
    }
}

fn play_guess<W: WordSource>(session: &mut Session<W>, player: PlayerId, word: &str) {
    let length = session.round().word_length();
    if word.chars().count() != length.get() || !word.chars().all(|c| c.is_ascii_alphabetic()) {
        println!("{}", format!("❌ Guesses must be {length} letters").red());
        return;
    }

    let now = Instant::now();
    for letter in word.chars() {
        session.press_key(player, Key::Letter(letter), now);
    }

    match session.press_key(player, Key::Enter, now) {
        KeyOutcome::Locked => {
            println!(
                "🔒 {} locked in. Waiting for {}...",
                player.label(),
                player.other().label().to_lowercase()
            );
        }
        KeyOutcome::Revealed => {
            print_board(session.round());
            thread::sleep(session.config().settle_delay);
            session.run_due(Instant::now());
            print_board(session.round());
        }
        KeyOutcome::Edited | KeyOutcome::Ignored => {
            // Leave nothing half-typed behind
            while session.press_key(player, Key::Backspace, now) == KeyOutcome::Edited {}
            println!(
                "{}",
                format!(
                    "❌ {} cannot play '{word}' now (already locked in or finished)",
                    player.label()
                )
                .red()
            );
        }
    }
}

fn print_help() {
    println!("Each player secretly guesses their own word. Guesses are revealed together.\n");
    println!("  left <word>   / l <word>   submit a guess for the left player");
    println!("  right <word>  / r <word>   submit a guess for the right player");
    println!("  new [4|5|6]                start a new game");
    println!("  board                      show both boards");
    println!("  quit                       exit\n");
}

/// Get user input with a prompt; `None` on end of input
fn get_user_input(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}> ");
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .context("Failed to read input")?;

    if read == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}
