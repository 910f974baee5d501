//! Hand sources: where the computer's choices come from.
//!
//! ## Key Features
//!
//! - **Injected**: the round engine draws from a [`HandSource`] it is
//!   handed, never from ambient randomness
//! - **Deterministic**: the production source is seeded ChaCha8, so the
//!   same seed produces the identical sequence of hands
//! - **Serializable**: O(1) position capture and restore for [`GameRng`]
//!
//! ## Test Usage
//!
//! ```
//! use roshambo::core::{Hand, HandSource, ScriptedHands};
//!
//! let mut source = ScriptedHands::new([Hand::Paper, Hand::Rock]);
//! assert_eq!(source.draw_hand(), Ok(Hand::Paper));
//! assert_eq!(source.draw_hand(), Ok(Hand::Rock));
//! assert!(source.draw_hand().is_err());
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use super::hand::Hand;

/// Error from a hand source that could not produce a value.
///
/// Sources fail loudly; none of them substitutes a default hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawError {
    /// The source has no hands left (a scripted sequence was consumed).
    Exhausted,
}

impl std::fmt::Display for DrawError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DrawError::Exhausted => write!(f, "hand source is exhausted"),
        }
    }
}

impl std::error::Error for DrawError {}

/// Capability to produce the computer's next hand.
pub trait HandSource {
    /// Produce the next computer hand.
    fn draw_hand(&mut self) -> Result<Hand, DrawError>;
}

/// Deterministic production source.
///
/// Uses ChaCha8 for speed while maintaining high-quality randomness.
/// Draws are uniform over [`Hand::ALL`], and the same seed yields the
/// identical sequence, so any game is replayable from its seed.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random index in the given range.
    pub fn gen_range(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl HandSource for GameRng {
    fn draw_hand(&mut self) -> Result<Hand, DrawError> {
        let index = self.gen_range(0..Hand::ALL.len());
        Ok(Hand::ALL[index])
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses ChaCha8 word position for O(1) serialization regardless of
/// how many hands have been drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

/// Scripted source that replays a fixed sequence, front to back.
///
/// The deterministic substitute for tests and replays. Once the script
/// is consumed, further draws return [`DrawError::Exhausted`] instead
/// of inventing a hand.
#[derive(Clone, Debug, Default)]
pub struct ScriptedHands {
    hands: VecDeque<Hand>,
}

impl ScriptedHands {
    /// Create a script from a sequence of hands.
    pub fn new(hands: impl IntoIterator<Item = Hand>) -> Self {
        Self {
            hands: hands.into_iter().collect(),
        }
    }

    /// Number of hands left in the script.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.hands.len()
    }
}

impl HandSource for ScriptedHands {
    fn draw_hand(&mut self) -> Result<Hand, DrawError> {
        self.hands.pop_front().ok_or(DrawError::Exhausted)
    }
}
