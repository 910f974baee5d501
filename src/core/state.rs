//! The game state snapshot.
//!
//! ## GameState
//!
//! One value carries everything a front-end renders:
//! - Upcoming round number and both cumulative scores
//! - The hands of the most recently resolved round
//! - That round's outcome
//!
//! The round engine never mutates a `GameState`. It builds a replacement,
//! and the owner swaps the whole value in. Nothing beyond the latest
//! snapshot is retained; there is no round history.

use serde::{Deserialize, Serialize};

use super::hand::Hand;
use super::outcome::Outcome;

/// Snapshot of a game between rounds.
///
/// `round` numbers the round about to be played, so it is always one
/// ahead of the number of rounds resolved. Scores move by at most one
/// per round, which bounds `user_score + computer_score` by
/// `round - 1`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Upcoming round number (starts at 1).
    pub round: u32,

    /// Rounds the user has won.
    pub user_score: u32,

    /// Rounds the computer has won.
    pub computer_score: u32,

    /// The user's hand in the most recently resolved round.
    pub user_hand: Option<Hand>,

    /// The computer's hand in the most recently resolved round.
    pub computer_hand: Option<Hand>,

    /// Result of the most recently resolved round.
    pub outcome: Outcome,
}

impl GameState {
    /// State of a fresh game: round 1, level scores, no hands shown, and
    /// an unset outcome.
    #[must_use]
    pub fn new() -> Self {
        Self {
            round: 1,
            user_score: 0,
            computer_score: 0,
            user_hand: None,
            computer_hand: None,
            outcome: Outcome::None,
        }
    }

    /// Number of rounds resolved so far.
    ///
    /// Saturates at zero for hand-built snapshots with `round == 0`.
    #[must_use]
    pub fn rounds_resolved(&self) -> u32 {
        self.round.saturating_sub(1)
    }

    /// Number of resolved rounds that ended in a draw.
    ///
    /// Draws move neither score, so the count falls out of the totals.
    /// Saturates at zero for snapshots whose scores exceed the rounds
    /// resolved.
    #[must_use]
    pub fn draws(&self) -> u32 {
        self.rounds_resolved()
            .saturating_sub(self.user_score)
            .saturating_sub(self.computer_score)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
