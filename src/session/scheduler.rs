//! Deadline-ordered task queue
//!
//! The game loop is single-threaded; "asynchronous" work is a task with a due time
//! that the loop runs once the clock passes it.

use crate::core::WordLength;
use crate::round::RoundId;
use std::time::Instant;

/// Work deferred to a later point of the loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    /// Draw both solutions for a game
    FetchSolutions { game: u64, length: WordLength },
    /// Close a revealed row
    Settle { round: RoundId },
}

#[derive(Debug, Clone)]
struct Scheduled {
    due: Instant,
    seq: u64,
    task: Task,
}

/// Pending tasks, run in due order and FIFO among equal deadlines
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    pending: Vec<Scheduled>,
    next_seq: u64,
}

impl Scheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, due: Instant, task: Task) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.push(Scheduled { due, seq, task });
    }

    /// Drop every pending task; returns how many were dropped
    pub fn cancel_all(&mut self) -> usize {
        let dropped = self.pending.len();
        self.pending.clear();
        dropped
    }

    /// Remove and return every task due at `now`, earliest first
    pub fn take_due(&mut self, now: Instant) -> Vec<Task> {
        let (mut due, rest): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|s| s.due <= now);
        self.pending = rest;
        due.sort_by_key(|s| (s.due, s.seq));
        due.into_iter().map(|s| s.task).collect()
    }

    /// Earliest pending deadline
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().map(|s| s.due).min()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
