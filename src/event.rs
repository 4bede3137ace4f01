//! Domain events emitted by the engine.
//!
//! Events are collected while a command runs and delivered to every
//! subscribed observer once the command has finished mutating the game,
//! in the order they happened.

use core::fmt;

use crate::card::Card;

/// Something that happened during a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// The trump card was drawn and set aside.
    TrumpRevealed {
        /// The trump card; its suit is trump for the whole game.
        card: Card,
    },
    /// A card was dealt to a player during the initial deal.
    CardDelivered {
        /// The receiving player.
        player: usize,
        /// The dealt card.
        card: Card,
    },
    /// A player put a card on the table.
    CardPlayed {
        /// The player who played.
        player: usize,
        /// The card played.
        card: Card,
    },
    /// A round was resolved.
    PlayerWonRound {
        /// The winning player.
        winner: usize,
        /// Points captured in the round.
        points: u32,
    },
    /// The deck can no longer refill every hand; players play out what they hold.
    EndgameReached,
    /// Every hand is empty and the game has ended.
    GameOver {
        /// The top scorer, or `None` on a tie.
        winner: Option<usize>,
    },
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TrumpRevealed { card } => write!(f, "trump card is {card}"),
            Self::CardDelivered { player, .. } => write!(f, "card delivered to player {player}"),
            Self::CardPlayed { player, card } => write!(f, "player {player} played {card}"),
            Self::PlayerWonRound { winner, points } => {
                write!(f, "player {winner} won the round ({points} points)")
            }
            Self::EndgameReached => f.write_str("deck exhausted, playing out hands"),
            Self::GameOver {
                winner: Some(winner),
            } => write!(f, "game over, player {winner} wins"),
            Self::GameOver { winner: None } => f.write_str("game over, tied"),
        }
    }
}

/// Handle returned by `Game::subscribe`, used to remove the observer again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(pub u32);
