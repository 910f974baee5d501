//! The three playable choices.
//!
//! `Hand` is a closed domain: every value a caller can construct is legal,
//! so nothing downstream validates its input. `Hand::ALL` lists the values
//! in declaration order and is the index space uniform draws range over.

use serde::{Deserialize, Serialize};

/// One of the three playable choices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hand {
    Scissors,
    Rock,
    Paper,
}

impl Hand {
    /// All hands, in declaration order.
    ///
    /// ```
    /// use roshambo::core::Hand;
    ///
    /// assert_eq!(Hand::ALL.len(), 3);
    /// assert_eq!(Hand::ALL[0], Hand::Scissors);
    /// ```
    pub const ALL: [Hand; 3] = [Hand::Scissors, Hand::Rock, Hand::Paper];
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Hand::Scissors => "Scissors",
            Hand::Rock => "Rock",
            Hand::Paper => "Paper",
        };
        write!(f, "{}", name)
    }
}
