//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use the embedded constants.

use super::embedded_words;
use crate::core::{Word, WordLength};
use std::fs;
use std::io;
use std::path::Path;

/// Solution candidates grouped by length
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    by_length: [Vec<Word>; 3],
}

impl WordList {
    /// The lists compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        let mut list = Self::default();
        for length in WordLength::ALL {
            list.extend(words_from_slice(embedded_words(length)));
        }
        list
    }

    /// Words of the given length
    #[must_use]
    pub fn words(&self, length: WordLength) -> &[Word] {
        &self.by_length[slot(length)]
    }

    /// Total number of words across all lengths
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_length.iter().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_length.iter().all(Vec::is_empty)
    }

    fn extend(&mut self, words: impl IntoIterator<Item = Word>) {
        for word in words {
            self.by_length[slot(word.length())].push(word);
        }
    }
}

impl FromIterator<Word> for WordList {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        let mut list = Self::default();
        list.extend(iter);
        list
    }
}

const fn slot(length: WordLength) -> usize {
    match length {
        WordLength::Four => 0,
        WordLength::Five => 1,
        WordLength::Six => 2,
    }
}

/// Load words from a file
///
/// One word per line; blank lines and entries that are not 4-6 ASCII letters are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_duel::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words5.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<WordList> {
    let content = fs::read_to_string(path)?;
    Ok(parse_words(&content))
}

/// Parse newline-separated words, skipping invalid entries
#[must_use]
pub fn parse_words(content: &str) -> WordList {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect()
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_duel::wordlists::loader::words_from_slice;
/// use wordle_duel::wordlists::WORDS_5;
///
/// let words = words_from_slice(WORDS_5);
/// assert_eq!(words.len(), WORDS_5.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
