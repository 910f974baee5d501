//! Core domain types: hands, outcomes, state, and hand sources.
//!
//! Everything here is presentation-free. Front-ends render these values
//! however they like; the core never carries display text.

pub mod hand;
pub mod outcome;
pub mod rng;
pub mod state;

pub use hand::Hand;
pub use outcome::Outcome;
pub use rng::{DrawError, GameRng, GameRngState, HandSource, ScriptedHands};
pub use state::GameState;
