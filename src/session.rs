//! Session: a front-end's handle on a running game.
//!
//! A session owns the two values that live for the whole run: the latest
//! [`GameState`] and the injected hand source. Each play swaps the state
//! for the next one wholesale; nothing else is retained.

use crate::core::{DrawError, GameRng, GameState, Hand, HandSource};
use crate::rules::play_round;

/// A running game: the current state plus the computer's hand source.
///
/// ```
/// use roshambo::core::{Hand, Outcome, ScriptedHands};
/// use roshambo::session::Session;
///
/// let mut session = Session::new(ScriptedHands::new([Hand::Scissors]));
/// let state = session.play(Hand::Rock).unwrap();
///
/// assert_eq!(state.outcome, Outcome::Win);
/// assert_eq!((state.user_score, state.computer_score), (1, 0));
/// ```
#[derive(Clone, Debug)]
pub struct Session<S> {
    state: GameState,
    source: S,
}

impl<S: HandSource> Session<S> {
    /// Start a fresh game over the given hand source.
    #[must_use]
    pub fn new(source: S) -> Self {
        Self {
            state: GameState::new(),
            source,
        }
    }

    /// The latest state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Play one round with the user's chosen hand.
    ///
    /// On success the held state is replaced and a borrow of the new
    /// value is returned. If the source fails, the error propagates and
    /// the held state stays as it was.
    pub fn play(&mut self, user: Hand) -> Result<&GameState, DrawError> {
        let next = play_round(&self.state, user, &mut self.source)?;
        log::trace!(
            "round {} -> {}, user {} computer {}",
            self.state.round,
            next.outcome,
            next.user_score,
            next.computer_score
        );
        self.state = next;
        Ok(&self.state)
    }
}

impl Session<GameRng> {
    /// Start a fresh game drawing computer hands from a seeded RNG.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(GameRng::new(seed))
    }
}
