//! One-shot scoring of a guess against a solution

use crate::core::{Feedback, Word, WordError};
use std::fmt;

/// Outcome of scoring one guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreResult {
    pub guess: String,
    pub solution: String,
    pub feedback: Feedback,
}

/// Why a pair of words could not be scored
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScoreError {
    InvalidWord(WordError),
    LengthMismatch { guess: usize, solution: usize },
}

impl fmt::Display for ScoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWord(err) => write!(f, "{err}"),
            Self::LengthMismatch { guess, solution } => write!(
                f,
                "Guess has {guess} letters but the solution has {solution}"
            ),
        }
    }
}

impl std::error::Error for ScoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidWord(err) => Some(err),
            Self::LengthMismatch { .. } => None,
        }
    }
}

impl From<WordError> for ScoreError {
    fn from(err: WordError) -> Self {
        Self::InvalidWord(err)
    }
}

/// Validate both words and score the guess
///
/// # Errors
///
/// Returns `ScoreError` if either word is invalid or their lengths differ.
///
/// # Examples
/// ```
/// use wordle_duel::commands::score_words;
///
/// let result = score_words("CRANE", "crane").unwrap();
/// assert!(result.feedback.is_solved());
/// assert!(score_words("moat", "crane").is_err());
/// ```
pub fn score_words(guess: &str, solution: &str) -> Result<ScoreResult, ScoreError> {
    let guess = Word::new(guess)?;
    let solution = Word::new(solution)?;

    if guess.length() != solution.length() {
        return Err(ScoreError::LengthMismatch {
            guess: guess.length().get(),
            solution: solution.length().get(),
        });
    }

    let feedback = Feedback::score(guess.text(), solution.text(), solution.length());
    Ok(ScoreResult {
        guess: guess.into_string(),
        solution: solution.into_string(),
        feedback,
    })
}
