//! Game configuration options.

use crate::points::PointsTable;

/// Smallest number of seats a game can have.
pub const MIN_PLAYERS: u8 = 2;

/// Largest number of seats a game can have.
pub const MAX_PLAYERS: u8 = 4;

/// How a round is decided when no trump was played and the cards do not
/// all share a suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum UnmatchedSuitRule {
    /// The player the turn pointer rests on when the round completes wins.
    ///
    /// With two players this is always the player who led the round.
    #[default]
    Positional,
    /// Only cards of the suit led compete; they are ranked like a
    /// single-suit round.
    LeadSuit,
}

/// Configuration options for a Brisca game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use brisca::{GameOptions, UnmatchedSuitRule};
///
/// let options = GameOptions::default()
///     .with_players(2)
///     .with_hand_size(3)
///     .with_unmatched_suit_rule(UnmatchedSuitRule::LeadSuit);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Number of seats at the table.
    pub players: u8,
    /// Number of cards each player receives in the initial deal.
    pub hand_size: u8,
    /// Point value of each rank.
    pub points: PointsTable,
    /// Winner rule for rounds with mixed suits and no trump.
    pub unmatched_suit: UnmatchedSuitRule,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            players: 2,
            hand_size: 3,
            points: PointsTable::default(),
            unmatched_suit: UnmatchedSuitRule::Positional,
        }
    }
}

impl GameOptions {
    /// Sets the number of players, clamped to `MIN_PLAYERS..=MAX_PLAYERS`.
    ///
    /// # Example
    ///
    /// ```
    /// use brisca::GameOptions;
    ///
    /// let options = GameOptions::default().with_players(3);
    /// assert_eq!(options.players, 3);
    ///
    /// let options = GameOptions::default().with_players(9);
    /// assert_eq!(options.players, 4);
    /// ```
    #[must_use]
    pub fn with_players(mut self, players: u8) -> Self {
        self.players = players.clamp(MIN_PLAYERS, MAX_PLAYERS);
        self
    }

    /// Sets the starting hand size. At least one card is always dealt.
    ///
    /// # Example
    ///
    /// ```
    /// use brisca::GameOptions;
    ///
    /// let options = GameOptions::default().with_hand_size(4);
    /// assert_eq!(options.hand_size, 4);
    /// ```
    #[must_use]
    pub fn with_hand_size(mut self, hand_size: u8) -> Self {
        self.hand_size = hand_size.max(1);
        self
    }

    /// Replaces the points table.
    ///
    /// # Example
    ///
    /// ```
    /// use brisca::{Card, GameOptions, PointsTable, Suit};
    ///
    /// let options = GameOptions::default().with_points(PointsTable::empty().with(7, 5));
    /// assert_eq!(options.points.value(&Card::new(Suit::Cups, 7)), 5);
    /// assert_eq!(options.points.value(&Card::new(Suit::Cups, 1)), 0);
    /// ```
    #[must_use]
    pub fn with_points(mut self, points: PointsTable) -> Self {
        self.points = points;
        self
    }

    /// Sets the rule for rounds with mixed suits and no trump.
    ///
    /// # Example
    ///
    /// ```
    /// use brisca::{GameOptions, UnmatchedSuitRule};
    ///
    /// let options = GameOptions::default().with_unmatched_suit_rule(UnmatchedSuitRule::LeadSuit);
    /// assert_eq!(options.unmatched_suit, UnmatchedSuitRule::LeadSuit);
    /// ```
    #[must_use]
    pub const fn with_unmatched_suit_rule(mut self, rule: UnmatchedSuitRule) -> Self {
        self.unmatched_suit = rule;
        self
    }

    /// Number of cards the initial deal consumes, trump card included.
    #[must_use]
    pub const fn initial_deal_size(&self) -> usize {
        1 + self.players as usize * self.hand_size as usize
    }
}
