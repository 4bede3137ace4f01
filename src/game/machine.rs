//! Transition function for the transient states.
//!
//! A command moves the game into `Dealing` or `RoundEnd`; [`Machine::settle`]
//! then runs the on-enter actions until the game rests in a state that
//! waits for the next command.

use alloc::vec::Vec;

use tracing::{debug, info};

use crate::card::Card;
use crate::deck::CardProvider;
use crate::event::GameEvent;
use crate::hand::Player;
use crate::options::GameOptions;
use crate::result::RoundResult;
use crate::rules::Trick;

use super::state::{GameState, Round};

/// Everything a transition may touch, borrowed for the length of one command.
pub(super) struct Machine<'a, P> {
    pub(super) options: &'a GameOptions,
    pub(super) deck: &'a mut P,
    pub(super) players: &'a mut [Player],
    pub(super) round: &'a mut Round,
    pub(super) trump: &'a mut Option<Card>,
    /// Whether rounds still refill hands from the deck.
    pub(super) drawing: bool,
    /// Events raised so far, in order.
    pub(super) events: Vec<GameEvent>,
    /// The round resolved during this command, if any.
    pub(super) resolved: Option<RoundResult>,
}

impl<P: CardProvider> Machine<'_, P> {
    /// Runs on-enter actions until `state` is no longer transient.
    pub(super) fn settle(&mut self, mut state: GameState) -> GameState {
        loop {
            state = match state {
                GameState::Dealing => self.enter_dealing(),
                GameState::RoundEnd => self.enter_round_end(),
                settled => {
                    debug_assert!(!settled.is_transient());
                    return settled;
                }
            };
        }
    }

    fn enter_dealing(&mut self) -> GameState {
        let Some(trump) = self.deck.next_card() else {
            return self.exhaust();
        };
        *self.trump = Some(trump);
        info!(trump = %trump, "trump card revealed");
        self.events.push(GameEvent::TrumpRevealed { card: trump });

        for seat in 0..self.players.len() {
            for _ in 0..self.options.hand_size {
                let Some(card) = self.deck.next_card() else {
                    return self.exhaust();
                };
                self.players[seat].add_card(card);
                self.events.push(GameEvent::CardDelivered { player: seat, card });
            }
        }

        self.round.open(0);
        info!(
            players = self.players.len(),
            remaining = self.deck.remaining(),
            "initial deal complete"
        );
        GameState::Turn
    }

    fn enter_round_end(&mut self) -> GameState {
        let turn = self.round.turn;
        let cards = self.round.clear();
        let trick = Trick {
            cards: &cards,
            trump: self.trump.map(|card| card.suit),
            turn,
            leader: self.round.leader,
        };
        let winner = trick.winner(&self.options.points, self.options.unmatched_suit);
        let points = self.options.points.total(&cards);

        if let Some(player) = self.players.get_mut(winner) {
            for &card in &cards {
                player.add_won_card(card);
            }
        }

        self.round.count += 1;
        self.round.open(winner);
        info!(round = self.round.count, winner, points, "round won");
        self.events.push(GameEvent::PlayerWonRound { winner, points });
        self.resolved = Some(RoundResult {
            round: self.round.count,
            winner,
            cards,
            points,
        });

        if self.drawing && self.deck.remaining() >= self.players.len() {
            for seat in 0..self.players.len() {
                let Some(card) = self.deck.next_card() else {
                    return self.exhaust();
                };
                self.players[seat].add_card(card);
                debug!(seat, held = self.players[seat].len(), "hand replenished");
            }
            debug!(remaining = self.deck.remaining(), "round refill done");
            return GameState::Turn;
        }

        self.exhaust()
    }

    /// Stops drawing for good and decides whether play can continue.
    fn exhaust(&mut self) -> GameState {
        if self.drawing {
            self.drawing = false;
            info!(remaining = self.deck.remaining(), "deck exhausted, entering endgame");
            self.events.push(GameEvent::EndgameReached);
        }

        if self.players.iter().all(Player::is_empty) {
            let winner = top_scorer(self.players, self.options);
            info!(?winner, rounds = self.round.count, "game over");
            self.events.push(GameEvent::GameOver { winner });
            return GameState::GameOver;
        }

        GameState::Endgame
    }
}

/// Returns the seat with the highest score, or `None` when the top score is shared.
pub(super) fn top_scorer(players: &[Player], options: &GameOptions) -> Option<usize> {
    let scores: Vec<u32> = players
        .iter()
        .map(|player| options.points.total(player.won_cards()))
        .collect();
    let top = scores.iter().copied().max()?;
    let mut leaders = scores.iter().enumerate().filter(|&(_, &score)| score == top);
    let (seat, _) = leaders.next()?;
    if leaders.next().is_some() {
        None
    } else {
        Some(seat)
    }
}
