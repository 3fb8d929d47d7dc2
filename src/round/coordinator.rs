//! Round synchronization state machine
//!
//! Two players type independently. A commit locks that player's guess without
//! showing it; once every player still in the game has locked, all locked guesses
//! are appended in one transition (the reveal). A later settle decides outcomes
//! and reopens input for the next row.
//!
//! Every operation is a synchronous reducer: it either applies completely or
//! leaves the state untouched.

use super::player::{Key, PlayerId, PlayerRoundState};
use crate::core::WordLength;
use std::fmt;
use tracing::debug;

/// Global round status shared by both players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RoundStatus {
    #[default]
    Typing,
    WaitingForBoth,
    Revealed,
}

impl fmt::Display for RoundStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Typing => write!(f, "typing"),
            Self::WaitingForBoth => write!(f, "waiting_for_both"),
            Self::Revealed => write!(f, "revealed"),
        }
    }
}

/// Identity of one row of one game
///
/// Anything scheduled or stamped against a round carries this; a mismatch with
/// the coordinator's current value marks it stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoundId {
    pub game: u64,
    pub row: u32,
}

impl fmt::Display for RoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "game {} row {}", self.game, self.row + 1)
    }
}

/// What a key event did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyOutcome {
    /// Rejected by a guard; nothing changed
    Ignored,
    /// Buffer changed
    Edited,
    /// Guess locked, still waiting on the other player
    Locked,
    /// Last outstanding guess locked; every locked guess is now in its history
    Revealed,
}

/// Owner of both players' round state and of the global status
#[derive(Debug, Clone)]
pub struct RoundCoordinator {
    word_length: WordLength,
    players: [PlayerRoundState; 2],
    status: RoundStatus,
    game: u64,
    row: u32,
    solutions_ready: bool,
}

impl RoundCoordinator {
    /// Coordinator waiting for the solutions of game 0
    #[must_use]
    pub fn new(word_length: WordLength) -> Self {
        Self {
            word_length,
            players: Default::default(),
            status: RoundStatus::Typing,
            game: 0,
            row: 0,
            solutions_ready: false,
        }
    }

    /// Coordinator with solutions already installed
    ///
    /// # Examples
    /// ```
    /// use wordle_duel::core::WordLength;
    /// use wordle_duel::round::{Key, KeyOutcome, PlayerId, RoundCoordinator, RoundStatus};
    ///
    /// let mut round = RoundCoordinator::with_solutions(WordLength::Four, "moat", "atom");
    /// for letter in "boat".chars() {
    ///     round.press_key(PlayerId::Left, Key::Letter(letter));
    /// }
    /// assert_eq!(round.press_key(PlayerId::Left, Key::Enter), KeyOutcome::Locked);
    /// assert_eq!(round.status(), RoundStatus::WaitingForBoth);
    /// ```
    #[must_use]
    pub fn with_solutions(word_length: WordLength, left: &str, right: &str) -> Self {
        let mut coordinator = Self::new(word_length);
        coordinator.install_solutions(0, Some(left.to_string()), Some(right.to_string()));
        coordinator
    }

    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> WordLength {
        self.word_length
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> RoundStatus {
        self.status
    }

    /// Zero-based row counter, shared by both players
    #[inline]
    #[must_use]
    pub const fn row(&self) -> u32 {
        self.row
    }

    #[inline]
    #[must_use]
    pub const fn game(&self) -> u64 {
        self.game
    }

    #[inline]
    #[must_use]
    pub const fn round_id(&self) -> RoundId {
        RoundId {
            game: self.game,
            row: self.row,
        }
    }

    /// False between a new game and the arrival of its solutions
    #[inline]
    #[must_use]
    pub const fn solutions_ready(&self) -> bool {
        self.solutions_ready
    }

    #[inline]
    #[must_use]
    pub fn player(&self, id: PlayerId) -> &PlayerRoundState {
        &self.players[id.index()]
    }

    /// Both players have a final outcome
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.players.iter().all(|p| p.outcome().is_finished())
    }

    /// Throw away the current game and wait for new solutions
    ///
    /// Returns the new game number; solutions must be installed against it.
    pub fn begin_game(&mut self, word_length: WordLength) -> u64 {
        self.game += 1;
        self.word_length = word_length;
        self.players = Default::default();
        self.status = RoundStatus::Typing;
        self.row = 0;
        self.solutions_ready = false;
        debug!(game = self.game, length = %word_length, "game started");
        self.game
    }

    /// Install both solutions, replacing both players wholesale
    ///
    /// A missing word becomes an empty solution. Completions for any game other
    /// than the current one are stale and dropped. Returns whether it applied.
    pub fn install_solutions(
        &mut self,
        game: u64,
        left: Option<String>,
        right: Option<String>,
    ) -> bool {
        if game != self.game {
            debug!(stale = game, current = self.game, "dropping stale solutions");
            return false;
        }

        self.players = [
            PlayerRoundState::new(left.as_deref().unwrap_or_default()),
            PlayerRoundState::new(right.as_deref().unwrap_or_default()),
        ];
        self.status = RoundStatus::Typing;
        self.row = 0;
        self.solutions_ready = true;
        debug!(game, "solutions installed");
        true
    }

    /// Apply a key event for the current round
    pub fn press_key(&mut self, player: PlayerId, key: Key) -> KeyOutcome {
        if !self.solutions_ready || self.status == RoundStatus::Revealed {
            return KeyOutcome::Ignored;
        }

        let length = self.word_length;
        let state = &mut self.players[player.index()];

        match key {
            Key::Letter(letter) => {
                if state.push_letter(letter, length) {
                    KeyOutcome::Edited
                } else {
                    KeyOutcome::Ignored
                }
            }
            Key::Backspace => {
                if state.pop_letter() {
                    KeyOutcome::Edited
                } else {
                    KeyOutcome::Ignored
                }
            }
            Key::Enter => {
                if !state.lock(length) {
                    return KeyOutcome::Ignored;
                }
                debug!(%player, round = %self.round_id(), "guess locked");
                self.after_lock()
            }
        }
    }

    /// Apply a key event stamped with the round it was produced in
    ///
    /// Events from any other round are dropped.
    pub fn press_key_in(&mut self, round: RoundId, player: PlayerId, key: Key) -> KeyOutcome {
        if round != self.round_id() {
            debug!(%player, stale = %round, current = %self.round_id(), "dropping stale key");
            return KeyOutcome::Ignored;
        }
        self.press_key(player, key)
    }

    /// Revealed → Typing for the given round
    ///
    /// Outcomes are decided once here and stay final. Returns whether it applied;
    /// a settle for any other round, or outside `Revealed`, is stale.
    pub fn settle(&mut self, round: RoundId) -> bool {
        if round != self.round_id() || self.status != RoundStatus::Revealed {
            debug!(stale = %round, current = %self.round_id(), "dropping stale settle");
            return false;
        }

        for state in &mut self.players {
            state.settle();
        }
        self.row += 1;
        self.status = RoundStatus::Typing;
        debug!(
            round = %self.round_id(),
            left = %self.players[0].outcome(),
            right = %self.players[1].outcome(),
            "round settled"
        );
        true
    }

    fn after_lock(&mut self) -> KeyOutcome {
        let all_locked = self
            .players
            .iter()
            .all(|p| p.is_submitted() || p.outcome().is_finished());

        if !all_locked {
            self.status = RoundStatus::WaitingForBoth;
            return KeyOutcome::Locked;
        }

        for state in &mut self.players {
            state.commit_locked();
        }
        self.status = RoundStatus::Revealed;
        debug!(round = %self.round_id(), "guesses revealed");
        KeyOutcome::Revealed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MAX_GUESSES;
    use crate::round::Outcome;

    const FIVE: WordLength = WordLength::Five;

    fn type_word(round: &mut RoundCoordinator, player: PlayerId, word: &str) {
        for letter in word.chars() {
            round.press_key(player, Key::Letter(letter));
        }
    }

    fn submit(round: &mut RoundCoordinator, player: PlayerId, word: &str) -> KeyOutcome {
        type_word(round, player, word);
        round.press_key(player, Key::Enter)
    }

    fn play_row(round: &mut RoundCoordinator, left: &str, right: &str) {
        submit(round, PlayerId::Left, left);
        assert_eq!(submit(round, PlayerId::Right, right), KeyOutcome::Revealed);
        assert!(round.settle(round.round_id()));
    }

    #[test]
    fn keys_ignored_until_solutions_arrive() {
        let mut round = RoundCoordinator::new(FIVE);
        assert_eq!(
            round.press_key(PlayerId::Left, Key::Letter('a')),
            KeyOutcome::Ignored
        );
        assert_eq!(round.player(PlayerId::Left).buffer(), "");
    }

    #[test]
    fn first_submit_waits_for_other_player() {
        let mut round = RoundCoordinator::with_solutions(FIVE, "crane", "slate");
        assert_eq!(submit(&mut round, PlayerId::Left, "react"), KeyOutcome::Locked);
        assert_eq!(round.status(), RoundStatus::WaitingForBoth);

        let left = round.player(PlayerId::Left);
        assert!(left.is_submitted());
        assert_eq!(left.buffer(), "");
        assert!(left.guesses().is_empty(), "locked guess stays hidden");
    }

    #[test]
    fn second_submit_reveals_both_rows() {
        let mut round = RoundCoordinator::with_solutions(FIVE, "crane", "slate");
        submit(&mut round, PlayerId::Left, "react");
        assert_eq!(submit(&mut round, PlayerId::Right, "audio"), KeyOutcome::Revealed);
        assert_eq!(round.status(), RoundStatus::Revealed);
        assert_eq!(round.player(PlayerId::Left).guesses(), &["react"]);
        assert_eq!(round.player(PlayerId::Right).guesses(), &["audio"]);
    }

    #[test]
    fn other_player_keeps_typing_while_waiting() {
        let mut round = RoundCoordinator::with_solutions(FIVE, "crane", "slate");
        submit(&mut round, PlayerId::Left, "react");
        assert_eq!(
            round.press_key(PlayerId::Right, Key::Letter('s')),
            KeyOutcome::Edited
        );
        assert_eq!(
            round.press_key(PlayerId::Left, Key::Letter('s')),
            KeyOutcome::Ignored
        );
        assert_eq!(round.player(PlayerId::Right).buffer(), "s");
    }

    #[test]
    fn short_commit_changes_nothing() {
        let mut round = RoundCoordinator::with_solutions(FIVE, "crane", "slate");
        type_word(&mut round, PlayerId::Left, "cra");
        let before = round.clone();
        assert_eq!(
            round.press_key(PlayerId::Left, Key::Enter),
            KeyOutcome::Ignored
        );
        assert_eq!(round.player(PlayerId::Left), before.player(PlayerId::Left));
        assert_eq!(round.status(), RoundStatus::Typing);
    }

    #[test]
    fn backspace_edits_buffer() {
        let mut round = RoundCoordinator::with_solutions(FIVE, "crane", "slate");
        type_word(&mut round, PlayerId::Left, "cra");
        assert_eq!(
            round.press_key(PlayerId::Left, Key::Backspace),
            KeyOutcome::Edited
        );
        assert_eq!(round.player(PlayerId::Left).buffer(), "cr");
        round.press_key(PlayerId::Left, Key::Backspace);
        round.press_key(PlayerId::Left, Key::Backspace);
        assert_eq!(
            round.press_key(PlayerId::Left, Key::Backspace),
            KeyOutcome::Ignored
        );
    }

    #[test]
    fn keys_ignored_while_revealed() {
        let mut round = RoundCoordinator::with_solutions(FIVE, "crane", "slate");
        submit(&mut round, PlayerId::Left, "react");
        submit(&mut round, PlayerId::Right, "audio");
        assert_eq!(
            round.press_key(PlayerId::Left, Key::Letter('a')),
            KeyOutcome::Ignored
        );
    }

    #[test]
    fn settle_advances_row_and_reopens_input() {
        let mut round = RoundCoordinator::with_solutions(FIVE, "crane", "slate");
        play_row(&mut round, "react", "audio");
        assert_eq!(round.row(), 1);
        assert_eq!(round.status(), RoundStatus::Typing);
        for id in PlayerId::ALL {
            let player = round.player(id);
            assert!(!player.is_submitted());
            assert_eq!(player.outcome(), Outcome::Playing);
        }
        assert_eq!(
            round.press_key(PlayerId::Left, Key::Letter('a')),
            KeyOutcome::Edited
        );
    }

    #[test]
    fn stale_settle_is_dropped() {
        let mut round = RoundCoordinator::with_solutions(FIVE, "crane", "slate");
        let stale = round.round_id();
        assert!(!round.settle(stale), "not revealed yet");

        play_row(&mut round, "react", "audio");
        assert!(!round.settle(stale), "row already advanced");
        assert_eq!(round.row(), 1);
    }

    #[test]
    fn settle_from_previous_game_is_dropped() {
        let mut round = RoundCoordinator::with_solutions(FIVE, "crane", "slate");
        submit(&mut round, PlayerId::Left, "react");
        submit(&mut round, PlayerId::Right, "audio");
        let old_game = round.round_id();

        let game = round.begin_game(FIVE);
        assert!(round.install_solutions(game, Some("moist".into()), Some("plumb".into())));
        submit(&mut round, PlayerId::Left, "react");
        assert_eq!(submit(&mut round, PlayerId::Right, "audio"), KeyOutcome::Revealed);

        assert_eq!(old_game.row, round.round_id().row);
        assert!(!round.settle(old_game), "same row, older game");
        assert_eq!(round.status(), RoundStatus::Revealed);
        assert_eq!(round.row(), 0);
        assert!(round.settle(round.round_id()));
    }

    #[test]
    fn one_key_adds_one_letter() {
        let mut round = RoundCoordinator::with_solutions(FIVE, "crane", "slate");
        type_word(&mut round, PlayerId::Left, "cran");
        assert_eq!(
            round.press_key(PlayerId::Left, Key::Letter('İ')),
            KeyOutcome::Edited
        );
        assert_eq!(round.player(PlayerId::Left).buffer(), "crani");
        assert_eq!(
            round.press_key(PlayerId::Left, Key::Letter('x')),
            KeyOutcome::Ignored
        );
        assert_eq!(
            round.press_key(PlayerId::Left, Key::Enter),
            KeyOutcome::Locked
        );
    }

    #[test]
    fn stale_key_is_dropped() {
        let mut round = RoundCoordinator::with_solutions(FIVE, "crane", "slate");
        let first_row = round.round_id();
        play_row(&mut round, "react", "audio");
        assert_eq!(
            round.press_key_in(first_row, PlayerId::Left, Key::Letter('a')),
            KeyOutcome::Ignored
        );
        assert_eq!(
            round.press_key_in(round.round_id(), PlayerId::Left, Key::Letter('a')),
            KeyOutcome::Edited
        );
    }

    #[test]
    fn submit_order_does_not_matter() {
        let mut left_first = RoundCoordinator::with_solutions(FIVE, "crane", "slate");
        submit(&mut left_first, PlayerId::Left, "react");
        submit(&mut left_first, PlayerId::Right, "audio");

        let mut right_first = RoundCoordinator::with_solutions(FIVE, "crane", "slate");
        submit(&mut right_first, PlayerId::Right, "audio");
        submit(&mut right_first, PlayerId::Left, "react");

        assert_eq!(left_first.status(), right_first.status());
        for id in PlayerId::ALL {
            assert_eq!(left_first.player(id), right_first.player(id));
        }
    }

    #[test]
    fn winner_stops_blocking_the_other_player() {
        let mut round = RoundCoordinator::with_solutions(FIVE, "crane", "slate");
        play_row(&mut round, "crane", "audio");
        assert_eq!(round.player(PlayerId::Left).outcome(), Outcome::Won);

        assert_eq!(
            round.press_key(PlayerId::Left, Key::Letter('a')),
            KeyOutcome::Ignored
        );
        assert_eq!(submit(&mut round, PlayerId::Right, "slate"), KeyOutcome::Revealed);
        assert_eq!(round.player(PlayerId::Left).guesses().len(), 1);
        assert!(round.settle(round.round_id()));
        assert_eq!(round.player(PlayerId::Right).outcome(), Outcome::Won);
        assert_eq!(round.player(PlayerId::Left).outcome(), Outcome::Won);
        assert!(round.is_game_over());
    }

    #[test]
    fn six_misses_lose_for_both() {
        let mut round = RoundCoordinator::with_solutions(FIVE, "crane", "slate");
        for _ in 0..MAX_GUESSES {
            play_row(&mut round, "audio", "audio");
        }
        for id in PlayerId::ALL {
            assert_eq!(round.player(id).outcome(), Outcome::Lost);
            assert_eq!(round.player(id).guesses().len(), MAX_GUESSES);
            assert_eq!(round.press_key(id, Key::Letter('a')), KeyOutcome::Ignored);
            assert_eq!(round.press_key(id, Key::Backspace), KeyOutcome::Ignored);
            assert_eq!(round.press_key(id, Key::Enter), KeyOutcome::Ignored);
        }
        assert!(round.is_game_over());
    }

    #[test]
    fn new_game_replaces_everything() {
        let mut round = RoundCoordinator::with_solutions(FIVE, "crane", "slate");
        play_row(&mut round, "react", "audio");

        let game = round.begin_game(WordLength::Six);
        assert_eq!(game, 1);
        assert_eq!(round.row(), 0);
        assert_eq!(round.word_length(), WordLength::Six);
        assert!(!round.solutions_ready());
        assert!(round.player(PlayerId::Left).guesses().is_empty());

        assert!(!round.install_solutions(0, Some("stale".into()), None));
        assert!(round.install_solutions(game, Some("Bottle".into()), None));
        assert_eq!(round.player(PlayerId::Left).solution(), "bottle");
        assert_eq!(round.player(PlayerId::Right).solution(), "");
    }
}
