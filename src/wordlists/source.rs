//! Where solutions come from

use super::WordList;
use crate::core::WordLength;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

/// Supplier of random solutions
///
/// `None` (or an empty word) means the fetch failed; callers degrade to an empty
/// solution instead of failing.
pub trait WordSource {
    fn fetch_random_word(&mut self, length: WordLength) -> Option<String>;
}

impl<F> WordSource for F
where
    F: FnMut(WordLength) -> Option<String>,
{
    fn fetch_random_word(&mut self, length: WordLength) -> Option<String> {
        self(length)
    }
}

/// Uniform random pick from a [`WordList`]
#[derive(Debug, Clone)]
pub struct RandomWordSource {
    words: WordList,
    rng: StdRng,
}

impl RandomWordSource {
    /// Seeded from the OS
    #[must_use]
    pub fn new(words: WordList) -> Self {
        Self {
            words,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible sequence of picks
    #[must_use]
    pub fn seeded(words: WordList, seed: u64) -> Self {
        Self {
            words,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Embedded lists, optionally seeded
    #[must_use]
    pub fn embedded(seed: Option<u64>) -> Self {
        let words = WordList::embedded();
        match seed {
            Some(seed) => Self::seeded(words, seed),
            None => Self::new(words),
        }
    }
}

impl WordSource for RandomWordSource {
    fn fetch_random_word(&mut self, length: WordLength) -> Option<String> {
        self.words
            .words(length)
            .choose(&mut self.rng)
            .map(|word| word.text().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::parse_words;

    #[test]
    fn picks_word_of_requested_length() {
        let mut source = RandomWordSource::embedded(Some(7));
        for length in WordLength::ALL {
            let word = source.fetch_random_word(length).unwrap();
            assert_eq!(word.len(), length.get());
        }
    }

    #[test]
    fn same_seed_same_words() {
        let mut a = RandomWordSource::embedded(Some(42));
        let mut b = RandomWordSource::embedded(Some(42));
        for _ in 0..10 {
            assert_eq!(
                a.fetch_random_word(WordLength::Five),
                b.fetch_random_word(WordLength::Five)
            );
        }
    }

    #[test]
    fn missing_length_fails() {
        let mut source = RandomWordSource::seeded(parse_words("crane\nslate"), 1);
        assert!(source.fetch_random_word(WordLength::Six).is_none());
        assert!(source.fetch_random_word(WordLength::Five).is_some());
    }

    #[test]
    fn closures_are_sources() {
        let mut source = |length: WordLength| Some("x".repeat(length.get()));
        assert_eq!(
            source.fetch_random_word(WordLength::Four).as_deref(),
            Some("xxxx")
        );
    }
}
