//! Game rules: the dominance table and the round transition.
//!
//! `resolve` classifies a single pair of hands; `play_round` folds that
//! classification into the next [`GameState`](crate::core::GameState).
//! Both are pure, and neither knows where hands come from beyond the
//! [`HandSource`](crate::core::HandSource) seam.

pub mod resolve;
pub mod round;

pub use resolve::resolve;
pub use round::play_round;
