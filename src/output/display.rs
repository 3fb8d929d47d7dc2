//! Display functions for command results

use super::formatters::{colored_guess, colored_keyboard, colored_tile, empty_row};
use crate::commands::ScoreResult;
use crate::core::{LetterState, MAX_GUESSES};
use crate::round::{Outcome, PlayerId, RoundCoordinator};
use colored::Colorize;

/// Print the result of scoring a single guess
pub fn print_score_result(result: &ScoreResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Guess {} against {}",
        result.guess.to_uppercase().bright_yellow().bold(),
        result.solution.to_uppercase().bright_cyan().bold()
    );
    println!("{}", "─".repeat(40).cyan());

    println!(
        "\n  {}   {}",
        colored_guess(&result.guess, &result.feedback),
        result.feedback.to_emoji()
    );
    println!(
        "\n  Correct: {}  Present: {}  Absent: {}",
        result.feedback.count(LetterState::Correct).to_string().green(),
        result.feedback.count(LetterState::Present).to_string().yellow(),
        result.feedback.count(LetterState::Absent).to_string().bright_black()
    );

    if result.feedback.is_solved() {
        println!("\n{}", "✅ Solved!".green().bold());
    }
    println!();
}

/// Print both players' grids and keyboards
pub fn print_board(round: &RoundCoordinator) {
    let length = round.word_length();

    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " Row {} | Status: {} | {} letters",
        (round.row() + 1).to_string().bright_yellow().bold(),
        round.status().to_string().bright_cyan(),
        length
    );
    println!("{}", "═".repeat(60).cyan());

    for id in PlayerId::ALL {
        let player = round.player(id);
        let outcome = match player.outcome() {
            Outcome::Playing => "playing".normal(),
            Outcome::Won => "won".green().bold(),
            Outcome::Lost => "lost".red().bold(),
        };
        println!("\n {} ({outcome})", id.label().bright_white().bold());

        let feedback = player.feedback(length);
        for (guess, scored) in player.guesses().iter().zip(&feedback) {
            println!("   {}", colored_guess(guess, scored));
        }

        let mut shown = player.guesses().len();
        if player.is_submitted() {
            println!("   {}", "  locked in, waiting...".bright_black());
            shown += 1;
        } else if !player.buffer().is_empty() {
            let typed: String = player
                .buffer()
                .chars()
                .map(|c| colored_tile(c, LetterState::Unset).to_string())
                .collect();
            println!("   {typed}");
            shown += 1;
        }
        for _ in shown..MAX_GUESSES {
            println!("   {}", empty_row(length.get()).bright_black());
        }

        println!();
        for (indent, row) in colored_keyboard(&player.keyboard(length)).iter().enumerate() {
            println!("   {}{row}", " ".repeat(indent * 2));
        }
    }
    println!();
}
