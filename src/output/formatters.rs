//! Formatting utilities for terminal output

use crate::core::{Feedback, KeyboardState, LetterState};
use colored::{ColoredString, Colorize};

/// On-screen keyboard layout
pub const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Paint one letter tile according to its state
#[must_use]
pub fn colored_tile(letter: char, state: LetterState) -> ColoredString {
    let text = format!(" {} ", letter.to_ascii_uppercase());
    match state {
        LetterState::Correct => text.black().on_green().bold(),
        LetterState::Present => text.black().on_yellow().bold(),
        LetterState::Absent => text.white().on_bright_black(),
        LetterState::Unset => text.normal(),
    }
}

/// Paint a scored guess as a row of tiles
#[must_use]
pub fn colored_guess(guess: &str, feedback: &Feedback) -> String {
    guess
        .chars()
        .zip(feedback.states())
        .map(|(letter, &state)| colored_tile(letter, state).to_string())
        .collect()
}

/// Paint the keyboard, one string per row
#[must_use]
pub fn colored_keyboard(keyboard: &KeyboardState) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .map(|row| {
            row.chars()
                .map(|letter| colored_tile(letter, keyboard.get(letter)).to_string())
                .collect()
        })
        .collect()
}

/// Placeholder row for a guess not yet typed
#[must_use]
pub fn empty_row(width: usize) -> String {
    " _ ".repeat(width)
}
