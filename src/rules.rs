//! Round winner determination.

use crate::card::{Card, Suit};
use crate::options::UnmatchedSuitRule;
use crate::points::PointsTable;

/// The cards of a completed round together with the context needed to
/// decide who took it.
#[derive(Debug, Clone, Copy)]
pub struct Trick<'a> {
    /// One card per seat, in seat order.
    pub cards: &'a [Card],
    /// The game's trump suit, if one has been set.
    pub trump: Option<Suit>,
    /// Turn pointer at the moment the round completed.
    pub turn: usize,
    /// Seat that played first this round.
    pub leader: usize,
}

impl Trick<'_> {
    /// Returns the seat that wins this trick.
    ///
    /// 1. If some but not all cards are trump, the lowest seat holding a
    ///    trump wins.
    /// 2. If the cards are of mixed suits, `rule` decides.
    /// 3. Otherwise every card shares one suit: the highest point value
    ///    wins, or the highest rank when no card is worth anything.
    ///
    /// Ties go to the lowest seat. An empty trick returns `turn`.
    #[must_use]
    pub fn winner(&self, points: &PointsTable, rule: UnmatchedSuitRule) -> usize {
        let Some(first) = self.cards.first() else {
            return self.turn;
        };

        if let Some(trump) = self.trump {
            let all_trump = self.cards.iter().all(|card| card.suit == trump);
            if !all_trump {
                if let Some(seat) = self.cards.iter().position(|card| card.suit == trump) {
                    return seat;
                }
            }
        }

        if self.cards.iter().any(|card| card.suit != first.suit) {
            return match rule {
                UnmatchedSuitRule::Positional => self.turn,
                UnmatchedSuitRule::LeadSuit => {
                    let led = self.cards.get(self.leader).map_or(first.suit, |card| card.suit);
                    strongest(self.cards, points, |card| card.suit == led).unwrap_or(self.leader)
                }
            };
        }

        strongest(self.cards, points, |_| true).unwrap_or(self.turn)
    }
}

/// Picks the strongest competing card, first seat on ties.
///
/// Cards are compared by point value, or by raw rank when none of the
/// competing cards is worth a point.
fn strongest<F>(cards: &[Card], points: &PointsTable, competes: F) -> Option<usize>
where
    F: Fn(&Card) -> bool,
{
    let by_points = cards
        .iter()
        .filter(|&card| competes(card))
        .any(|card| points.value(card) > 0);

    let mut best: Option<(usize, u32)> = None;
    for (seat, card) in cards.iter().enumerate() {
        if !competes(card) {
            continue;
        }
        let strength = if by_points {
            points.value(card)
        } else {
            u32::from(card.rank)
        };
        if best.is_none_or(|(_, top)| strength > top) {
            best = Some((seat, strength));
        }
    }

    best.map(|(seat, _)| seat)
}
