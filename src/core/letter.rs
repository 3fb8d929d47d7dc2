//! Per-letter classification

/// Lowercase a letter to exactly one character
///
/// Letters whose full lowercase form is longer (`İ` → `i̇`) keep only the first
/// character, so every typed key fills exactly one position.
#[inline]
#[must_use]
pub fn fold_letter(letter: char) -> char {
    letter.to_lowercase().next().unwrap_or(letter)
}

/// Classification of one guessed letter against the solution
///
/// The variant order is the precedence used everywhere hints are merged:
/// `Correct > Present > Absent > Unset`. Merging two states is `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum LetterState {
    /// Not evaluated yet (empty cell, missing solution)
    #[default]
    Unset,
    /// Letter does not occur in the remaining solution letters
    Absent,
    /// Letter occurs in the solution at another position
    Present,
    /// Letter matches the solution at this position
    Correct,
}

impl LetterState {
    /// Whether this state came out of an actual comparison
    #[inline]
    #[must_use]
    pub const fn is_scored(self) -> bool {
        !matches!(self, Self::Unset)
    }

    /// Keep the stronger of two hints
    #[inline]
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        self.max(other)
    }

    /// Emoji tile for this state
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬛',
            Self::Unset => '⬜',
        }
    }
}
