//! Supported solution lengths

use std::fmt;
use std::str::FromStr;

/// Length of the hidden word, selectable at new-game time only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum WordLength {
    Four,
    #[default]
    Five,
    Six,
}

/// Error type for unsupported word lengths
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordLengthError {
    Unsupported(usize),
    NotANumber(String),
}

impl fmt::Display for WordLengthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsupported(len) => {
                write!(f, "Word length must be 4, 5 or 6, got {len}")
            }
            Self::NotANumber(text) => write!(f, "Word length must be a number, got '{text}'"),
        }
    }
}

impl std::error::Error for WordLengthError {}

impl WordLength {
    /// Every supported length, shortest first
    pub const ALL: [Self; 3] = [Self::Four, Self::Five, Self::Six];

    /// Number of letters
    #[inline]
    #[must_use]
    pub const fn get(self) -> usize {
        match self {
            Self::Four => 4,
            Self::Five => 5,
            Self::Six => 6,
        }
    }
}

impl TryFrom<usize> for WordLength {
    type Error = WordLengthError;

    fn try_from(len: usize) -> Result<Self, Self::Error> {
        match len {
            4 => Ok(Self::Four),
            5 => Ok(Self::Five),
            6 => Ok(Self::Six),
            other => Err(WordLengthError::Unsupported(other)),
        }
    }
}

impl FromStr for WordLength {
    type Err = WordLengthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len: usize = s
            .trim()
            .parse()
            .map_err(|_| WordLengthError::NotANumber(s.to_string()))?;
        Self::try_from(len)
    }
}

impl fmt::Display for WordLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}
