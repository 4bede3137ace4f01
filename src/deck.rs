//! Card supply for the engine.

use alloc::vec::Vec;

use rand::Rng;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, RANKS, Suit};

/// Supplies cards to the engine one at a time.
///
/// The provider decides the order; the engine only ever takes the next card.
pub trait CardProvider {
    /// Takes the next card, or `None` when the provider is exhausted.
    fn next_card(&mut self) -> Option<Card>;

    /// Returns how many cards are left.
    fn remaining(&self) -> usize;
}

/// A finite, ordered pile of cards drawn from the front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    /// Cards stored in reverse draw order so drawing is a `pop`.
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a full, unshuffled Spanish deck in suit-major order.
    #[must_use]
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in RANKS {
                cards.push(Card::new(suit, rank));
            }
        }
        Self::from_draws(cards)
    }

    /// Creates a full deck shuffled with a `ChaCha8` generator seeded by `seed`.
    ///
    /// The same seed always produces the same order.
    #[must_use]
    pub fn shuffled(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self::shuffled_with(&mut rng)
    }

    /// Creates a full deck shuffled with the given generator.
    #[must_use]
    pub fn shuffled_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::standard();
        deck.cards.shuffle(rng);
        deck
    }

    /// Creates a deck that yields `draws` in order, first element first.
    #[must_use]
    pub fn from_draws(mut draws: Vec<Card>) -> Self {
        draws.reverse();
        Self { cards: draws }
    }

    /// Returns the cards left, in draw order.
    #[must_use]
    pub fn cards(&self) -> Vec<Card> {
        self.cards.iter().rev().copied().collect()
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl CardProvider for Deck {
    fn next_card(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    fn remaining(&self) -> usize {
        self.cards.len()
    }
}
