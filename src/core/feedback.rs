//! Guess scoring
//!
//! Turns a (guess, solution) pair into one [`LetterState`] per position using the
//! classic two-pass rule, so duplicate letters are never credited more often than
//! they occur in the solution.

use super::{LetterState, WordLength, fold_letter};
use rustc_hash::FxHashMap;

/// Per-position feedback for a single guess
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<LetterState>);

impl Feedback {
    /// Feedback made only of [`LetterState::Unset`] markers
    #[must_use]
    pub fn unscored(length: WordLength) -> Self {
        Self(vec![LetterState::Unset; length.get()])
    }

    /// Score `guess` against `solution`
    ///
    /// Comparison is case-insensitive. An empty guess or an empty solution yields
    /// [`Feedback::unscored`]. Positions past the end of a short guess stay `Unset`.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and remove them from the pool of solution letters
    /// 2. Second pass: mark misplaced letters while the pool still holds them
    ///
    /// # Examples
    /// ```
    /// use wordle_duel::core::{Feedback, LetterState, WordLength};
    ///
    /// let feedback = Feedback::score("react", "crane", WordLength::Five);
    /// assert_eq!(
    ///     feedback.states(),
    ///     &[
    ///         LetterState::Present,
    ///         LetterState::Present,
    ///         LetterState::Correct,
    ///         LetterState::Present,
    ///         LetterState::Absent,
    ///     ]
    /// );
    /// ```
    #[must_use]
    pub fn score(guess: &str, solution: &str, length: WordLength) -> Self {
        if guess.is_empty() || solution.is_empty() {
            return Self::unscored(length);
        }

        let guess: Vec<char> = guess.chars().map(fold_letter).collect();
        let solution: Vec<char> = solution.chars().map(fold_letter).collect();

        let mut available: FxHashMap<char, usize> = FxHashMap::default();
        for &letter in &solution {
            *available.entry(letter).or_insert(0) += 1;
        }

        let mut states = vec![LetterState::Unset; length.get()];

        // First pass: exact position matches
        for (i, state) in states.iter_mut().enumerate() {
            let Some(&letter) = guess.get(i) else {
                continue;
            };
            if solution.get(i) == Some(&letter) {
                *state = LetterState::Correct;
                if let Some(count) = available.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: misplaced letters from what is left
        for (i, state) in states.iter_mut().enumerate() {
            if *state == LetterState::Correct {
                continue;
            }
            let Some(&letter) = guess.get(i) else {
                continue;
            };
            *state = match available.get_mut(&letter) {
                Some(count) if *count > 0 => {
                    *count -= 1;
                    LetterState::Present
                }
                _ => LetterState::Absent,
            };
        }

        Self(states)
    }

    /// Per-position states
    #[inline]
    #[must_use]
    pub fn states(&self) -> &[LetterState] {
        &self.0
    }

    /// Number of positions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when there are no positions at all
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Every position is an exact match
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&s| s == LetterState::Correct)
    }

    /// Count positions with the given state
    #[must_use]
    pub fn count(&self, state: LetterState) -> usize {
        self.0.iter().filter(|&&s| s == state).count()
    }

    /// Render as an emoji row like "🟩🟨⬛🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|s| s.to_emoji()).collect()
    }
}

/// Score `guess` against `solution`; see [`Feedback::score`]
#[inline]
#[must_use]
pub fn score_guess(guess: &str, solution: &str, length: WordLength) -> Feedback {
    Feedback::score(guess, solution, length)
}
