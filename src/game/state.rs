//! Game state types.

use alloc::vec::Vec;

use crate::card::Card;

/// Game state.
///
/// `Dealing` and `RoundEnd` are transient: the engine passes through them
/// while handling a command and never rests there between commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    /// Waiting for the initial deal.
    Uninitialized,
    /// Drawing the trump card and dealing starting hands.
    Dealing,
    /// Waiting for the player under the turn pointer to play.
    Turn,
    /// Resolving a completed round.
    RoundEnd,
    /// The deck cannot refill every hand; players play out their cards.
    Endgame,
    /// Every card has been played.
    GameOver,
}

impl GameState {
    /// Returns whether a card can be played in this state.
    #[must_use]
    pub const fn accepts_plays(self) -> bool {
        matches!(self, Self::Turn | Self::Endgame)
    }

    /// Returns whether the engine only passes through this state.
    #[must_use]
    pub const fn is_transient(self) -> bool {
        matches!(self, Self::Dealing | Self::RoundEnd)
    }
}

/// State that lives for a single round and is reset when it resolves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    /// One slot per seat holding the card played this round.
    pub table: Vec<Option<Card>>,
    /// Seat of the player to move.
    pub turn: usize,
    /// Seat that opened the round.
    pub leader: usize,
    /// Number of rounds resolved so far.
    pub count: u32,
}

impl Round {
    /// Creates an empty round for `seats` players, player 0 to move.
    #[must_use]
    pub fn new(seats: usize) -> Self {
        Self {
            table: alloc::vec![None; seats],
            turn: 0,
            leader: 0,
            count: 0,
        }
    }

    /// Returns whether every seat has played.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.table.iter().all(Option::is_some)
    }

    /// Puts `card` in the current player's slot and passes the turn on.
    pub fn place(&mut self, card: Card) {
        if let Some(slot) = self.table.get_mut(self.turn) {
            *slot = Some(card);
        }
        self.turn = (self.turn + 1) % self.table.len().max(1);
    }

    /// Empties every slot, returning the cards in seat order.
    pub fn clear(&mut self) -> Vec<Card> {
        self.table.iter_mut().filter_map(Option::take).collect()
    }

    /// Starts the next round with `leader` to move.
    pub const fn open(&mut self, leader: usize) {
        self.turn = leader;
        self.leader = leader;
    }
}
