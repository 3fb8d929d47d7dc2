//! Session configuration

use crate::core::WordLength;
use std::time::Duration;

/// Delay between a reveal and the next row opening
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(300);

/// Settings for one session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Length used by the first game; later games pick their own
    pub word_length: WordLength,
    /// How long the revealed row stays up before the next row opens
    pub settle_delay: Duration,
}

impl GameConfig {
    #[must_use]
    pub const fn new(word_length: WordLength, settle_delay: Duration) -> Self {
        Self {
            word_length,
            settle_delay,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(WordLength::default(), DEFAULT_SETTLE_DELAY)
    }
}
