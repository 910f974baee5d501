//! The dominance relation between hands.

use crate::core::{Hand, Outcome};

/// Classify a round from the user's perspective.
///
/// The classic three-cycle: Rock blunts Scissors, Scissors cut Paper,
/// Paper wraps Rock. All nine ordered pairs are spelled out so the table
/// can be audited against the rules at a glance; there is no wildcard
/// arm to hide a mistake behind.
///
/// Never returns [`Outcome::None`].
///
/// ```
/// use roshambo::core::{Hand, Outcome};
/// use roshambo::rules::resolve;
///
/// assert_eq!(resolve(Hand::Rock, Hand::Scissors), Outcome::Win);
/// assert_eq!(resolve(Hand::Rock, Hand::Rock), Outcome::Draw);
/// assert_eq!(resolve(Hand::Rock, Hand::Paper), Outcome::Lose);
/// ```
#[must_use]
#[rustfmt::skip]
pub fn resolve(user: Hand, computer: Hand) -> Outcome {
    use Hand::*;

    match (user, computer) {
        (Scissors, Scissors) => Outcome::Draw,
        (Rock,     Rock)     => Outcome::Draw,
        (Paper,    Paper)    => Outcome::Draw,

        (Rock,     Scissors) => Outcome::Win,
        (Scissors, Paper)    => Outcome::Win,
        (Paper,    Rock)     => Outcome::Win,

        (Scissors, Rock)     => Outcome::Lose,
        (Paper,    Scissors) => Outcome::Lose,
        (Rock,     Paper)    => Outcome::Lose,
    }
}
