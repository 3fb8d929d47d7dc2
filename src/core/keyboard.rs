//! Cumulative per-key hints

use super::{Feedback, LetterState, WordLength, fold_letter};
use rustc_hash::FxHashMap;

/// Best known [`LetterState`] for every letter a player has typed
///
/// Always rebuilt from the full guess history, never patched incrementally.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardState {
    keys: FxHashMap<char, LetterState>,
}

impl KeyboardState {
    /// Fold the whole guess history into per-letter hints
    ///
    /// # Examples
    /// ```
    /// use wordle_duel::core::{KeyboardState, LetterState, WordLength};
    ///
    /// let keyboard = KeyboardState::from_history(&["react", "crane"], "crane", WordLength::Five);
    /// assert_eq!(keyboard.get('c'), LetterState::Correct);
    /// assert_eq!(keyboard.get('t'), LetterState::Absent);
    /// assert_eq!(keyboard.get('z'), LetterState::Unset);
    /// ```
    #[must_use]
    pub fn from_history<S: AsRef<str>>(guesses: &[S], solution: &str, length: WordLength) -> Self {
        let mut keys: FxHashMap<char, LetterState> = FxHashMap::default();

        for guess in guesses {
            let guess = guess.as_ref();
            if guess.is_empty() {
                continue;
            }
            let feedback = Feedback::score(guess, solution, length);
            let letters = guess.chars().map(fold_letter);

            for (letter, &state) in letters.zip(feedback.states()) {
                if !state.is_scored() {
                    continue;
                }
                let entry = keys.entry(letter).or_default();
                *entry = entry.merge(state);
            }
        }

        Self { keys }
    }

    /// Hint for a letter (case-insensitive); `Unset` when never typed
    #[must_use]
    pub fn get(&self, letter: char) -> LetterState {
        self.keys.get(&fold_letter(letter)).copied().unwrap_or_default()
    }

    /// Number of letters with a hint
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// True when no letter has a hint yet
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Iterate over (letter, hint) pairs in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (char, LetterState)> + '_ {
        self.keys.iter().map(|(&letter, &state)| (letter, state))
    }
}

/// Fold a guess history into keyboard hints; see [`KeyboardState::from_history`]
#[must_use]
pub fn aggregate_keyboard_state<S: AsRef<str>>(
    guesses: &[S],
    solution: &str,
    length: WordLength,
) -> KeyboardState {
    KeyboardState::from_history(guesses, solution, length)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_history_has_no_hints() {
        let keyboard = aggregate_keyboard_state::<&str>(&[], "crane", WordLength::Five);
        assert!(keyboard.is_empty());
        assert_eq!(keyboard.get('a'), LetterState::Unset);
    }

    #[test]
    fn correct_is_never_downgraded() {
        // 'a' correct in the first guess, misplaced-or-absent later
        let keyboard =
            aggregate_keyboard_state(&["brave", "alarm"], "crane", WordLength::Five);
        assert_eq!(keyboard.get('a'), LetterState::Correct);
        assert_eq!(keyboard.get('r'), LetterState::Correct);
        assert_eq!(keyboard.get('m'), LetterState::Absent);
    }

    #[test]
    fn present_is_not_downgraded_to_absent() {
        // "enter" marks E present, "eerie" scores it absent twice and correct once
        let keyboard = aggregate_keyboard_state(&["enter", "eerie"], "crane", WordLength::Five);
        assert_eq!(keyboard.get('e'), LetterState::Correct);

        let keyboard = aggregate_keyboard_state(&["enter", "speed"], "crane", WordLength::Five);
        assert_eq!(keyboard.get('e'), LetterState::Present);
        assert_eq!(keyboard.get('s'), LetterState::Absent);
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let keyboard = aggregate_keyboard_state(&["CRANE"], "crane", WordLength::Five);
        assert_eq!(keyboard.get('C'), LetterState::Correct);
        assert_eq!(keyboard.get('c'), LetterState::Correct);
        assert_eq!(keyboard.len(), 5);
    }

    #[test]
    fn missing_solution_records_nothing() {
        let keyboard = aggregate_keyboard_state(&["crane", "slate"], "", WordLength::Five);
        assert!(keyboard.is_empty());
    }

    #[test]
    fn duplicate_letter_in_one_guess_keeps_best() {
        // "eerie" vs "crane": E absent, absent, correct
        let keyboard = aggregate_keyboard_state(&["eerie"], "crane", WordLength::Five);
        assert_eq!(keyboard.get('e'), LetterState::Correct);
        assert_eq!(keyboard.get('i'), LetterState::Absent);
    }
}
