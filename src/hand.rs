//! Per-player card storage.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// A seat at the table: the cards a player holds and the cards they have won.
///
/// The two collections are disjoint. A card leaves the hand when it is
/// played and only ever comes back as part of a won round.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Player {
    /// Cards held, unplayed.
    hand: Vec<Card>,
    /// Cards captured by winning rounds.
    won: Vec<Card>,
}

impl Player {
    /// Creates a player with an empty hand and won-pile.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            hand: Vec::new(),
            won: Vec::new(),
        }
    }

    /// Returns whether the player holds `card`.
    #[must_use]
    pub fn has_card(&self, card: &Card) -> bool {
        self.hand.contains(card)
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.hand.push(card);
    }

    /// Removes a card from the hand.
    ///
    /// Returns `false` if the player did not hold it.
    pub fn remove_card(&mut self, card: &Card) -> bool {
        match self.hand.iter().position(|held| held == card) {
            Some(index) => {
                self.hand.remove(index);
                true
            }
            None => false,
        }
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.hand
    }

    /// Returns the cards this player has won.
    #[must_use]
    pub fn won_cards(&self) -> &[Card] {
        &self.won
    }

    /// Adds a card to the won-pile.
    pub fn add_won_card(&mut self, card: Card) {
        self.won.push(card);
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.hand.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hand.is_empty()
    }
}
