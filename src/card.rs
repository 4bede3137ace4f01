//! Card types for the 40-card Spanish deck.

use core::fmt;

use crate::error::CardError;

/// Card suit of the Spanish deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Oros.
    Coins,
    /// Copas.
    Cups,
    /// Espadas.
    Swords,
    /// Bastos.
    Clubs,
}

impl Suit {
    /// All four suits, in deck order.
    pub const ALL: [Self; 4] = [Self::Coins, Self::Cups, Self::Swords, Self::Clubs];
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Coins => "coins",
            Self::Cups => "cups",
            Self::Swords => "swords",
            Self::Clubs => "clubs",
        };
        f.write_str(name)
    }
}

/// Ranks present in a Spanish deck (1 = As, 10 = Sota, 11 = Caballo, 12 = Rey).
pub const RANKS: [u8; 10] = [1, 2, 3, 4, 5, 6, 7, 10, 11, 12];

/// Number of cards in a Spanish deck.
pub const DECK_SIZE: usize = Suit::ALL.len() * RANKS.len();

/// Returns whether `rank` belongs to the Spanish deck.
#[must_use]
pub const fn is_valid_rank(rank: u8) -> bool {
    matches!(rank, 1..=7 | 10..=12)
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (see [`RANKS`]).
    pub rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. The engine rejects
    /// cards with ranks outside [`RANKS`] when they are played; use
    /// [`Card::try_new`] to validate up front.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// Creates a new card, rejecting ranks that are not part of the deck.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidRank`] if `rank` is not one of [`RANKS`].
    pub const fn try_new(suit: Suit, rank: u8) -> Result<Self, CardError> {
        if is_valid_rank(rank) {
            Ok(Self { suit, rank })
        } else {
            Err(CardError::InvalidRank(rank))
        }
    }

    /// Returns whether the card's rank belongs to the deck.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        is_valid_rank(self.rank)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}
