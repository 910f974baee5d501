//! Per-round result classification.

use serde::{Deserialize, Serialize};

/// Result of a round, from the user's perspective.
///
/// `None` is the unset sentinel a fresh game holds before any round has
/// been resolved. The resolver never produces it; it exists so consumers
/// pattern-match one four-valued field instead of an optional three-valued
/// one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The user's hand dominated the computer's.
    Win,
    /// The computer's hand dominated the user's.
    Lose,
    /// Equal hands. Neither score moves.
    Draw,
    /// No round has been resolved yet.
    #[default]
    None,
}

impl Outcome {
    /// Whether this outcome came from a resolved round.
    #[must_use]
    pub const fn is_resolved(self) -> bool {
        !matches!(self, Outcome::None)
    }

    /// The same round seen from the computer's side.
    ///
    /// Swaps `Win` and `Lose`; `Draw` and `None` are their own reverses.
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Outcome::Win => Outcome::Lose,
            Outcome::Lose => Outcome::Win,
            Outcome::Draw => Outcome::Draw,
            Outcome::None => Outcome::None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Outcome::Win => "Win",
            Outcome::Lose => "Lose",
            Outcome::Draw => "Draw",
            Outcome::None => "None",
        };
        write!(f, "{}", name)
    }
}
