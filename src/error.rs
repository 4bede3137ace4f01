//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur while building a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// The rank is not part of the Spanish deck.
    #[error("rank {0} is not part of the deck")]
    InvalidRank(u8),
}

/// Errors that can occur during the initial deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// The game has already been dealt.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// The provider cannot supply the trump card plus every starting hand.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
}

/// Errors that can occur when a player plays a card.
///
/// A rejected play leaves the game untouched and emits no event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// The game is not accepting plays (not dealt yet, or over).
    #[error("invalid game state for playing a card")]
    InvalidState,
    /// No player sits at this index.
    #[error("player index out of range")]
    PlayerIndexOutOfRange,
    /// The card's rank is not part of the deck.
    #[error("card is not part of the deck")]
    InvalidCard,
    /// Not this player's turn.
    #[error("not this player's turn")]
    NotYourTurn,
    /// The player does not hold this card.
    #[error("card is not in the player's hand")]
    CardNotInHand,
}
