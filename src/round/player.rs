//! Per-player round state

use crate::core::{Feedback, KeyboardState, MAX_GUESSES, WordLength, fold_letter};
use std::fmt;
use std::str::FromStr;

/// Which side of the shared screen a player sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerId {
    Left,
    Right,
}

/// Error returned when a player name does not parse
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerParseError(pub String);

impl fmt::Display for PlayerParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown player '{}', expected 'left' or 'right'", self.0)
    }
}

impl std::error::Error for PlayerParseError {}

impl PlayerId {
    pub const ALL: [Self; 2] = [Self::Left, Self::Right];

    /// Slot in per-player arrays
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Left => 0,
            Self::Right => 1,
        }
    }

    #[inline]
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Human-readable panel title
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Left => "Left player",
            Self::Right => "Right player",
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => write!(f, "left"),
            Self::Right => write!(f, "right"),
        }
    }
}

impl FromStr for PlayerId {
    type Err = PlayerParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "left" | "l" => Ok(Self::Left),
            "right" | "r" => Ok(Self::Right),
            _ => Err(PlayerParseError(s.to_string())),
        }
    }
}

/// Result of a player's game so far
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Outcome {
    #[default]
    Playing,
    Won,
    Lost,
}

impl Outcome {
    /// Won and lost are final
    #[inline]
    #[must_use]
    pub const fn is_finished(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Playing => write!(f, "playing"),
            Self::Won => write!(f, "won"),
            Self::Lost => write!(f, "lost"),
        }
    }
}

/// A discrete key event from the input layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Letter(char),
    Enter,
    Backspace,
}

/// Everything the coordinator tracks for one player
///
/// `locked` holds the submitted guess between commit and reveal; a player is
/// submitted exactly when it is `Some`, and the buffer is then always empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PlayerRoundState {
    solution: String,
    guesses: Vec<String>,
    buffer: String,
    locked: Option<String>,
    outcome: Outcome,
}

impl PlayerRoundState {
    /// Fresh state for a new game; the solution is lowercased
    #[must_use]
    pub fn new(solution: &str) -> Self {
        Self {
            solution: solution.chars().map(fold_letter).collect(),
            ..Self::default()
        }
    }

    #[inline]
    #[must_use]
    pub fn solution(&self) -> &str {
        &self.solution
    }

    /// Committed guesses, oldest first
    #[inline]
    #[must_use]
    pub fn guesses(&self) -> &[String] {
        &self.guesses
    }

    /// In-progress input
    #[inline]
    #[must_use]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Guess submitted this row, hidden until the reveal
    #[inline]
    #[must_use]
    pub fn locked_guess(&self) -> Option<&str> {
        self.locked.as_deref()
    }

    #[inline]
    #[must_use]
    pub const fn is_submitted(&self) -> bool {
        self.locked.is_some()
    }

    #[inline]
    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Whether this player may still edit or submit
    #[must_use]
    pub fn accepts_input(&self) -> bool {
        !self.is_submitted() && !self.outcome.is_finished() && self.guesses.len() < MAX_GUESSES
    }

    /// Feedback for every committed guess
    #[must_use]
    pub fn feedback(&self, length: WordLength) -> Vec<Feedback> {
        self.guesses
            .iter()
            .map(|guess| Feedback::score(guess, &self.solution, length))
            .collect()
    }

    /// Keyboard hints folded from the whole history
    #[must_use]
    pub fn keyboard(&self, length: WordLength) -> KeyboardState {
        KeyboardState::from_history(&self.guesses, &self.solution, length)
    }

    pub(crate) fn push_letter(&mut self, letter: char, length: WordLength) -> bool {
        if !self.accepts_input() || self.buffer.chars().count() >= length.get() {
            return false;
        }
        self.buffer.push(fold_letter(letter));
        true
    }

    pub(crate) fn pop_letter(&mut self) -> bool {
        if !self.accepts_input() {
            return false;
        }
        self.buffer.pop().is_some()
    }

    pub(crate) fn lock(&mut self, length: WordLength) -> bool {
        if !self.accepts_input() || self.buffer.chars().count() != length.get() {
            return false;
        }
        self.locked = Some(std::mem::take(&mut self.buffer));
        true
    }

    /// Move the locked guess into the history
    pub(crate) fn commit_locked(&mut self) {
        if let Some(guess) = self.locked.take() {
            self.guesses.push(guess);
        }
    }

    /// Decide the outcome after a reveal and reopen input
    ///
    /// A finished outcome is sticky; it is never recomputed.
    pub(crate) fn settle(&mut self) {
        self.buffer.clear();
        self.locked = None;

        if self.outcome.is_finished() {
            return;
        }

        let won = !self.solution.is_empty()
            && self
                .guesses
                .last()
                .is_some_and(|guess| *guess == self.solution);

        self.outcome = if won {
            Outcome::Won
        } else if self.guesses.len() >= MAX_GUESSES {
            Outcome::Lost
        } else {
            Outcome::Playing
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIVE: WordLength = WordLength::Five;

    fn typed(state: &mut PlayerRoundState, text: &str) {
        for letter in text.chars() {
            state.push_letter(letter, FIVE);
        }
    }

    #[test]
    fn player_id_parsing() {
        assert_eq!("left".parse::<PlayerId>(), Ok(PlayerId::Left));
        assert_eq!("R".parse::<PlayerId>(), Ok(PlayerId::Right));
        assert!("middle".parse::<PlayerId>().is_err());
        assert_eq!(PlayerId::Left.other(), PlayerId::Right);
        assert_eq!(PlayerId::Right.index(), 1);
    }

    #[test]
    fn buffer_is_capped_at_word_length() {
        let mut state = PlayerRoundState::new("crane");
        typed(&mut state, "CRANES");
        assert_eq!(state.buffer(), "crane");
    }

    #[test]
    fn lock_requires_full_buffer() {
        let mut state = PlayerRoundState::new("crane");
        typed(&mut state, "cran");
        assert!(!state.lock(FIVE));
        assert!(!state.is_submitted());

        typed(&mut state, "e");
        assert!(state.lock(FIVE));
        assert!(state.is_submitted());
        assert_eq!(state.buffer(), "");
        assert_eq!(state.locked_guess(), Some("crane"));
    }

    #[test]
    fn locked_player_rejects_edits() {
        let mut state = PlayerRoundState::new("crane");
        typed(&mut state, "slate");
        assert!(state.lock(FIVE));
        assert!(!state.push_letter('a', FIVE));
        assert!(!state.pop_letter());
        assert_eq!(state.buffer(), "");
    }

    #[test]
    fn settle_marks_win() {
        let mut state = PlayerRoundState::new("CRANE");
        typed(&mut state, "crane");
        state.lock(FIVE);
        state.commit_locked();
        state.settle();
        assert_eq!(state.outcome(), Outcome::Won);
        assert!(!state.accepts_input());
    }

    #[test]
    fn settle_marks_loss_after_sixth_guess() {
        let mut state = PlayerRoundState::new("crane");
        for round in 0..MAX_GUESSES {
            typed(&mut state, "slate");
            assert!(state.lock(FIVE));
            state.commit_locked();
            state.settle();
            let expected = if round + 1 == MAX_GUESSES {
                Outcome::Lost
            } else {
                Outcome::Playing
            };
            assert_eq!(state.outcome(), expected);
        }
    }

    #[test]
    fn empty_solution_never_wins() {
        let mut state = PlayerRoundState::new("");
        typed(&mut state, "crane");
        state.lock(FIVE);
        state.commit_locked();
        state.settle();
        assert_eq!(state.outcome(), Outcome::Playing);
    }
}
