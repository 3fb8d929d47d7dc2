//! Core domain types for Wordle Duel
//!
//! This module contains the scoring engine: pure functions and value types with no
//! state and no side effects. Everything here is deterministic and cheap to test.

mod feedback;
mod keyboard;
mod length;
mod letter;
mod word;

pub use feedback::{Feedback, score_guess};
pub use keyboard::{KeyboardState, aggregate_keyboard_state};
pub use length::{WordLength, WordLengthError};
pub use letter::{LetterState, fold_letter};
pub use word::{Word, WordError};

/// Maximum number of committed guesses per player per game
pub const MAX_GUESSES: usize = 6;
