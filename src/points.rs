//! Card point values.

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::card::Card;

/// Point values of the traditional Brisca scoring.
pub const DEFAULT_POINTS: [(u8, u32); 5] = [(1, 11), (3, 10), (12, 4), (11, 3), (10, 2)];

/// Mapping from rank to point value.
///
/// Ranks missing from the table are worth 0 points. They still take part
/// in rank comparisons when no card in a round is worth anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointsTable {
    values: HashMap<u8, u32>,
}

impl PointsTable {
    /// Creates an empty table where every card is worth 0.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Sets the point value of `rank`, returning the updated table.
    #[must_use]
    pub fn with(mut self, rank: u8, points: u32) -> Self {
        self.set(rank, points);
        self
    }

    /// Sets the point value of `rank`. A value of 0 removes the entry.
    pub fn set(&mut self, rank: u8, points: u32) {
        if points == 0 {
            self.values.remove(&rank);
        } else {
            self.values.insert(rank, points);
        }
    }

    /// Returns the point value of a rank.
    #[must_use]
    pub fn rank_value(&self, rank: u8) -> u32 {
        self.values.get(&rank).copied().unwrap_or(0)
    }

    /// Returns the point value of a card.
    #[must_use]
    pub fn value(&self, card: &Card) -> u32 {
        self.rank_value(card.rank)
    }

    /// Sums the point values of `cards`.
    pub fn total<'a, I>(&self, cards: I) -> u32
    where
        I: IntoIterator<Item = &'a Card>,
    {
        cards.into_iter().map(|card| self.value(card)).sum()
    }
}

impl Default for PointsTable {
    fn default() -> Self {
        DEFAULT_POINTS
            .iter()
            .fold(Self::empty(), |table, &(rank, points)| table.with(rank, points))
    }
}
