//! Outcome types returned by successful plays.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// Summary of a resolved round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Number of rounds resolved so far, this one included.
    pub round: u32,
    /// Index of the player who won the round.
    pub winner: usize,
    /// The cards that were on the table, in seat order.
    pub cards: Vec<Card>,
    /// Points captured by the winner this round.
    pub points: u32,
}

/// What happened after a successful play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayOutcome {
    /// The card went to the table; the round is still open.
    Played {
        /// Index of the player who moves next.
        next: usize,
    },
    /// The card completed the round and the round was resolved.
    RoundWon(RoundResult),
}

impl PlayOutcome {
    /// Returns the round result if this play completed a round.
    #[must_use]
    pub const fn round(&self) -> Option<&RoundResult> {
        match self {
            Self::Played { .. } => None,
            Self::RoundWon(result) => Some(result),
        }
    }
}
