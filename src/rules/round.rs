//! The round transition.

use crate::core::{DrawError, GameState, Hand, HandSource, Outcome};

use super::resolve::resolve;

/// Resolve one round and produce the next state.
///
/// Draws the computer's hand from `source`, classifies the pair, and
/// builds the replacement state: the round counter moves by one, the
/// winning side's score moves by one, and both hands and the outcome
/// are recorded for display. The input state is never mutated.
///
/// A failing source propagates its error before any state is built, so
/// the caller's snapshot stays valid.
pub fn play_round<S: HandSource>(
    state: &GameState,
    user: Hand,
    source: &mut S,
) -> Result<GameState, DrawError> {
    let computer = source.draw_hand()?;
    let outcome = resolve(user, computer);

    // Scores move only on a decided round.
    let (user_score, computer_score) = match outcome {
        Outcome::Win => (state.user_score + 1, state.computer_score),
        Outcome::Lose => (state.user_score, state.computer_score + 1),
        Outcome::Draw | Outcome::None => (state.user_score, state.computer_score),
    };

    Ok(GameState {
        round: state.round + 1,
        user_score,
        computer_score,
        user_hand: Some(user),
        computer_hand: Some(computer),
        outcome,
    })
}
