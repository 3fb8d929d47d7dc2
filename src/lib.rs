//! Wordle Duel
//!
//! Two players guess their own hidden word at the same time. Guesses are locked
//! individually and revealed together, one row at a time.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_duel::core::{score_guess, LetterState, WordLength};
//! use wordle_duel::round::{Key, KeyOutcome, PlayerId, RoundCoordinator};
//!
//! // Score a guess
//! let feedback = score_guess("react", "crane", WordLength::Five);
//! assert_eq!(feedback.states()[2], LetterState::Correct);
//!
//! // Drive a round
//! let mut round = RoundCoordinator::with_solutions(WordLength::Five, "crane", "slate");
//! for player in PlayerId::ALL {
//!     for letter in "audio".chars() {
//!         round.press_key(player, Key::Letter(letter));
//!     }
//! }
//! round.press_key(PlayerId::Left, Key::Enter);
//! assert_eq!(round.press_key(PlayerId::Right, Key::Enter), KeyOutcome::Revealed);
//! ```

// Scoring engine and core domain types
pub mod core;

// Round state machine
pub mod round;

// Scheduled tasks and session ownership
pub mod session;

// Session settings
pub mod config;

// Word lists and word sources
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Tracing subscriber setup
pub mod logging;
