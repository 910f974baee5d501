//! Session-level tests: scripted scenarios, seed replay, and long-run
//! invariants across many rounds.

use roshambo::core::{DrawError, GameState, Hand, Outcome, ScriptedHands};
use roshambo::rules::play_round;
use roshambo::session::Session;

#[test]
fn test_scripted_full_cycle() {
    // Walk the computer through all three hands against a fixed user hand.
    let script = ScriptedHands::new([Hand::Scissors, Hand::Rock, Hand::Paper]);
    let mut session = Session::new(script);

    // Rock blunts scissors.
    let state = session.play(Hand::Rock).unwrap();
    assert_eq!(state.outcome, Outcome::Win);
    assert_eq!((state.user_score, state.computer_score), (1, 0));

    // Rock meets rock.
    let state = session.play(Hand::Rock).unwrap();
    assert_eq!(state.outcome, Outcome::Draw);
    assert_eq!((state.user_score, state.computer_score), (1, 0));

    // Paper wraps rock.
    let state = session.play(Hand::Rock).unwrap();
    assert_eq!(state.outcome, Outcome::Lose);
    assert_eq!((state.user_score, state.computer_score), (1, 1));

    let state = session.state();
    assert_eq!(state.round, 4);
    assert_eq!(state.draws(), 1);
    assert_eq!(state.user_hand, Some(Hand::Rock));
    assert_eq!(state.computer_hand, Some(Hand::Paper));
}

#[test]
fn test_nine_pair_session_tally() {
    // Every ordered pair exactly once: three user hands, each against a
    // scripted pass over all three computer hands.
    let users = [
        Hand::Scissors,
        Hand::Scissors,
        Hand::Scissors,
        Hand::Rock,
        Hand::Rock,
        Hand::Rock,
        Hand::Paper,
        Hand::Paper,
        Hand::Paper,
    ];
    let script = ScriptedHands::new([
        Hand::Scissors,
        Hand::Rock,
        Hand::Paper,
        Hand::Scissors,
        Hand::Rock,
        Hand::Paper,
        Hand::Scissors,
        Hand::Rock,
        Hand::Paper,
    ]);

    let mut session = Session::new(script);
    for &hand in &users {
        session.play(hand).unwrap();
    }

    let state = session.state();
    assert_eq!(state.round, 10);
    assert_eq!(state.user_score, 3);
    assert_eq!(state.computer_score, 3);
    assert_eq!(state.draws(), 3);
}

#[test]
fn test_seed_replay_matches() {
    let plays = [Hand::Rock, Hand::Paper, Hand::Scissors, Hand::Rock, Hand::Paper];

    let mut first = Session::seeded(12345);
    let mut second = Session::seeded(12345);

    for &hand in &plays {
        let a = first.play(hand).unwrap().clone();
        let b = second.play(hand).unwrap().clone();
        assert_eq!(a, b);
    }
}

#[test]
fn test_different_seeds_diverge() {
    // Two seeds agreeing on thirty straight computer hands would mean a
    // broken RNG.
    let mut first = Session::seeded(1);
    let mut second = Session::seeded(2);

    let mut diverged = false;
    for _ in 0..30 {
        let a = first.play(Hand::Rock).unwrap().clone();
        let b = second.play(Hand::Rock).unwrap().clone();
        if a != b {
            diverged = true;
        }
    }

    assert!(diverged);
}

#[test]
fn test_long_session_counts() {
    let mut session = Session::seeded(42);
    let rounds: u32 = 500;

    for i in 0..rounds {
        let state = session.play(Hand::ALL[(i % 3) as usize]).unwrap();
        assert_eq!(state.round, i + 2);
    }

    let state = session.state();
    assert_eq!(state.round, rounds + 1);
    assert_eq!(state.rounds_resolved(), rounds);
    assert!(state.user_score + state.computer_score <= rounds);
    assert_eq!(
        state.draws(),
        rounds - state.user_score - state.computer_score
    );
    assert!(state.outcome.is_resolved());
}

#[test]
fn test_round_engine_leaves_input_untouched() {
    let fresh = GameState::new();
    let mut source = ScriptedHands::new([Hand::Scissors]);

    let next = play_round(&fresh, Hand::Rock, &mut source).unwrap();

    assert_eq!(fresh, GameState::new());
    assert_eq!(next.round, 2);
    assert_eq!(source.remaining(), 0);
}

#[test]
fn test_exhausted_script_preserves_state() {
    let mut session = Session::new(ScriptedHands::new([Hand::Paper]));

    session.play(Hand::Rock).unwrap();
    let before = session.state().clone();

    assert_eq!(session.play(Hand::Rock).unwrap_err(), DrawError::Exhausted);
    assert_eq!(session.state(), &before);

    // The session is still inspectable after the failure.
    assert_eq!(session.state().round, 2);
    assert_eq!(session.state().outcome, Outcome::Lose);
}
