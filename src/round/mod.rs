//! Round coordination
//!
//! Per-player round state and the state machine that keeps two players in step.

mod coordinator;
mod player;

pub use coordinator::{KeyOutcome, RoundCoordinator, RoundId, RoundStatus};
pub use player::{Key, Outcome, PlayerId, PlayerParseError, PlayerRoundState};
