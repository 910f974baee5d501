//! # roshambo
//!
//! A single-screen rock-paper-scissors round engine.
//!
//! ## Design Principles
//!
//! 1. **Immutable State**: A round never mutates the current [`GameState`].
//!    It produces a brand-new value the owner swaps in wholesale, so a
//!    front-end can treat state as a plain observable value.
//!
//! 2. **Injected Randomness**: The computer's hand comes from a
//!    [`HandSource`] passed into the round engine. Production uses a
//!    seeded, replayable RNG; tests substitute a scripted sequence. The
//!    engine itself never touches ambient randomness.
//!
//! 3. **Presentation-Free Core**: The library exposes only enumerated
//!    domain values. Human-readable labels belong to whatever front-end
//!    renders the state (the bundled `cli` binary, or a host embedding
//!    the serde surface).
//!
//! ## Modules
//!
//! - `core`: hands, outcomes, the game state snapshot, hand sources
//! - `rules`: the dominance table and the round transition
//! - `session`: ownership of the current state across rounds

pub mod core;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    DrawError, GameRng, GameRngState, GameState, Hand, HandSource, Outcome, ScriptedHands,
};

pub use crate::rules::{play_round, resolve};

pub use crate::session::Session;
