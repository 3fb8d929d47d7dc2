//! Game session
//!
//! The session is the single owner of everything mutable: the round coordinator,
//! the pending tasks and the word source. Front ends feed it key events and the
//! current time; it never reads a clock itself.

mod scheduler;

pub use scheduler::{Scheduler, Task};

use crate::config::GameConfig;
use crate::core::WordLength;
use crate::round::{Key, KeyOutcome, PlayerId, RoundCoordinator, RoundId};
use crate::wordlists::WordSource;
use std::time::Instant;
use tracing::{debug, info, warn};

/// One two-player session
pub struct Session<W> {
    config: GameConfig,
    round: RoundCoordinator,
    scheduler: Scheduler,
    source: W,
}

impl<W: WordSource> Session<W> {
    /// Start a session; the first game's solutions are fetched on the first
    /// [`Session::run_due`] at or after `now`
    ///
    /// # Examples
    /// ```
    /// use std::time::Instant;
    /// use wordle_duel::config::GameConfig;
    /// use wordle_duel::core::WordLength;
    /// use wordle_duel::session::Session;
    ///
    /// let now = Instant::now();
    /// let source = |_: WordLength| Some("crane".to_string());
    /// let mut session = Session::new(GameConfig::default(), source, now);
    /// session.run_due(now);
    /// assert!(session.round().solutions_ready());
    /// ```
    pub fn new(config: GameConfig, source: W, now: Instant) -> Self {
        let mut session = Self {
            config,
            round: RoundCoordinator::new(config.word_length),
            scheduler: Scheduler::new(),
            source,
        };
        session.new_game(config.word_length, now);
        session
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Read-only view for presentation
    #[inline]
    #[must_use]
    pub const fn round(&self) -> &RoundCoordinator {
        &self.round
    }

    /// Earliest pending deadline, if any
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.scheduler.next_deadline()
    }

    /// Number of tasks still pending
    #[must_use]
    pub fn pending_tasks(&self) -> usize {
        self.scheduler.len()
    }

    /// Abandon the current game and start another
    ///
    /// Pending settles and fetches belong to the old game and are cancelled.
    /// Returns the new game number.
    pub fn new_game(&mut self, length: WordLength, now: Instant) -> u64 {
        let cancelled = self.scheduler.cancel_all();
        let game = self.round.begin_game(length);
        self.scheduler
            .schedule(now, Task::FetchSolutions { game, length });
        info!(game, %length, cancelled, "new game");
        game
    }

    /// Forward a key event; a reveal schedules the settle
    pub fn press_key(&mut self, player: PlayerId, key: Key, now: Instant) -> KeyOutcome {
        let outcome = self.round.press_key(player, key);
        self.after_key(outcome, now)
    }

    /// Forward a key event stamped with the round it was typed in
    pub fn press_key_in(
        &mut self,
        round: RoundId,
        player: PlayerId,
        key: Key,
        now: Instant,
    ) -> KeyOutcome {
        let outcome = self.round.press_key_in(round, player, key);
        self.after_key(outcome, now)
    }

    /// Run every task due at `now`; returns how many applied
    pub fn run_due(&mut self, now: Instant) -> usize {
        let mut applied = 0;
        for task in self.scheduler.take_due(now) {
            if self.run_task(task) {
                applied += 1;
            }
        }
        applied
    }

    fn after_key(&mut self, outcome: KeyOutcome, now: Instant) -> KeyOutcome {
        if outcome == KeyOutcome::Revealed {
            let round = self.round.round_id();
            self.scheduler
                .schedule(now + self.config.settle_delay, Task::Settle { round });
            debug!(%round, "settle scheduled");
        }
        outcome
    }

    fn run_task(&mut self, task: Task) -> bool {
        match task {
            Task::FetchSolutions { game, length } => {
                let left = self.fetch(length);
                let right = self.fetch(length);
                self.round.install_solutions(game, left, right)
            }
            Task::Settle { round } => self.round.settle(round),
        }
    }

    fn fetch(&mut self, length: WordLength) -> Option<String> {
        let word = self
            .source
            .fetch_random_word(length)
            .filter(|word| !word.is_empty());
        if word.is_none() {
            warn!(%length, "word source failed, falling back to an empty solution");
        }
        word
    }
}
