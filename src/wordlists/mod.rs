//! Word lists and word sources
//!
//! Provides embedded solution lists compiled into the binary, a file loader, and the
//! [`WordSource`] seam the session draws solutions from.

mod embedded;
pub mod loader;
mod source;

pub use embedded::{WORDS_4, WORDS_4_COUNT, WORDS_5, WORDS_5_COUNT, WORDS_6, WORDS_6_COUNT};
pub use loader::WordList;
pub use source::{RandomWordSource, WordSource};

use crate::core::WordLength;

/// Embedded list for a given length
#[must_use]
pub const fn embedded_words(length: WordLength) -> &'static [&'static str] {
    match length {
        WordLength::Four => WORDS_4,
        WordLength::Five => WORDS_5,
        WordLength::Six => WORDS_6,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_match_consts() {
        assert_eq!(WORDS_4.len(), WORDS_4_COUNT);
        assert_eq!(WORDS_5.len(), WORDS_5_COUNT);
        assert_eq!(WORDS_6.len(), WORDS_6_COUNT);
    }

    #[test]
    fn embedded_words_have_expected_length() {
        for length in WordLength::ALL {
            let words = embedded_words(length);
            assert!(!words.is_empty());
            for &word in words {
                assert_eq!(word.len(), length.get(), "Word '{word}' has wrong length");
                assert!(
                    word.chars().all(|c| c.is_ascii_lowercase()),
                    "Word '{word}' contains non-lowercase chars"
                );
            }
        }
    }
}
