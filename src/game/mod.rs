//! Game engine and state management.

use core::sync::atomic::{AtomicBool, AtomicU32};

use alloc::boxed::Box;
use alloc::sync::Arc;
use alloc::vec::Vec;
use tracing::debug;

use crate::sync::Mutex;

use crate::card::{Card, Suit};
use crate::deck::{CardProvider, Deck};
use crate::error::DealError;
use crate::event::{GameEvent, SubscriptionId};
use crate::hand::Player;
use crate::options::{GameOptions, MAX_PLAYERS, MIN_PLAYERS};

mod machine;
mod observers;
mod play;
pub mod state;

pub use state::{GameState, Round};

use machine::Machine;

/// Callback invoked for every event the game emits.
pub type Observer = Box<dyn FnMut(&GameEvent) + Send>;

/// A Brisca game engine that manages the deck, players, and round flow.
///
/// The game owns the card provider, every player's hand and won-pile, and
/// the state of the round in progress. Use [`GameOptions`] to configure
/// seats, hand size, and scoring.
pub struct Game<P = Deck> {
    /// Card provider the game draws from.
    pub deck: Mutex<P>,
    /// Game options.
    pub options: GameOptions,
    /// Current game state.
    state: Mutex<GameState>,
    /// One entry per seat.
    players: Mutex<Vec<Player>>,
    /// Table slots, turn pointer, and round counter.
    round: Mutex<Round>,
    /// The card that set the trump suit, once dealt.
    trump: Mutex<Option<Card>>,
    /// Whether rounds still refill hands from the deck.
    drawing: Mutex<bool>,
    /// Subscribed observers, in subscription order.
    observers: Mutex<Vec<(SubscriptionId, Arc<Mutex<Observer>>)>>,
    /// Next subscription ID to assign.
    next_subscription: AtomicU32,
    /// Events raised by finished commands, not yet delivered.
    pending: Mutex<Vec<GameEvent>>,
    /// Set while a caller is delivering `pending`.
    dispatching: AtomicBool,
}

impl Game<Deck> {
    /// Creates a new game with a full deck shuffled from `seed`.
    ///
    /// # Example
    ///
    /// ```
    /// use brisca::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// game.start_deal().unwrap();
    /// assert_eq!(game.state(), GameState::Turn);
    /// assert_eq!(game.current_turn(), 0);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self::with_provider(options, Deck::shuffled(seed))
    }
}

impl<P: CardProvider> Game<P> {
    /// Creates a new game that draws from `provider`.
    ///
    /// The player count and hand size are brought back into range if the
    /// options were edited directly.
    #[must_use]
    pub fn with_provider(mut options: GameOptions, provider: P) -> Self {
        options.players = options.players.clamp(MIN_PLAYERS, MAX_PLAYERS);
        options.hand_size = options.hand_size.max(1);
        let seats = usize::from(options.players);

        Self {
            deck: Mutex::new(provider),
            options,
            state: Mutex::new(GameState::Uninitialized),
            players: Mutex::new((0..seats).map(|_| Player::new()).collect()),
            round: Mutex::new(Round::new(seats)),
            trump: Mutex::new(None),
            drawing: Mutex::new(true),
            observers: Mutex::new(Vec::new()),
            next_subscription: AtomicU32::new(0),
            pending: Mutex::new(Vec::new()),
            dispatching: AtomicBool::new(false),
        }
    }

    /// Draws the trump card and deals the starting hands.
    ///
    /// Emits [`GameEvent::TrumpRevealed`] and one
    /// [`GameEvent::CardDelivered`] per dealt card, then leaves the game in
    /// [`GameState::Turn`] with player 0 to move.
    ///
    /// # Errors
    ///
    /// Returns an error if the game has already been dealt, or if the
    /// provider holds fewer cards than the trump card plus every starting
    /// hand. Nothing changes in either case.
    #[expect(
        clippy::significant_drop_tightening,
        reason = "locks are held for entire operation"
    )]
    pub fn start_deal(&self) -> Result<(), DealError> {
        {
            let mut state = self.state.lock();
            if *state != GameState::Uninitialized {
                debug!(state = ?*state, "deal rejected");
                return Err(DealError::InvalidState);
            }

            let mut deck = self.deck.lock();
            if deck.remaining() < self.options.initial_deal_size() {
                debug!(
                    remaining = deck.remaining(),
                    needed = self.options.initial_deal_size(),
                    "deal rejected"
                );
                return Err(DealError::NotEnoughCards);
            }

            let mut players = self.players.lock();
            let mut round = self.round.lock();
            let mut trump = self.trump.lock();
            let mut drawing = self.drawing.lock();

            let mut machine = Machine {
                options: &self.options,
                deck: &mut *deck,
                players: &mut players,
                round: &mut round,
                trump: &mut trump,
                drawing: *drawing,
                events: Vec::new(),
                resolved: None,
            };
            *state = machine.settle(GameState::Dealing);
            *drawing = machine.drawing;
            self.enqueue(machine.events);
        }

        self.dispatch();
        Ok(())
    }

    /// Returns the current game state.
    pub fn state(&self) -> GameState {
        *self.state.lock()
    }

    /// Returns the number of seats.
    pub fn player_count(&self) -> usize {
        self.players.lock().len()
    }

    /// Returns the seat of the player whose move is next.
    pub fn current_turn(&self) -> usize {
        self.round.lock().turn
    }

    /// Returns the seat that opened the current round.
    pub fn leader(&self) -> usize {
        self.round.lock().leader
    }

    /// Returns the number of fully resolved rounds.
    pub fn round_count(&self) -> u32 {
        self.round.lock().count
    }

    /// Returns the cards on the table, one slot per seat.
    pub fn table(&self) -> Vec<Option<Card>> {
        self.round.lock().table.clone()
    }

    /// Returns the trump card, once dealt.
    ///
    /// The trump card is out of play; only its suit matters.
    pub fn trump_card(&self) -> Option<Card> {
        *self.trump.lock()
    }

    /// Returns the trump suit, once dealt.
    pub fn trump_suit(&self) -> Option<Suit> {
        self.trump_card().map(|card| card.suit)
    }

    /// Returns the number of cards left in the provider.
    pub fn cards_remaining(&self) -> usize {
        self.deck.lock().remaining()
    }

    /// Returns a copy of the cards held by `player`.
    ///
    /// Returns `None` if no player sits at that index.
    pub fn hand(&self, player: usize) -> Option<Vec<Card>> {
        self.players
            .lock()
            .get(player)
            .map(|seat| seat.cards().to_vec())
    }

    /// Returns a copy of the cards `player` has won.
    ///
    /// Returns `None` if no player sits at that index.
    pub fn won_cards(&self, player: usize) -> Option<Vec<Card>> {
        self.players
            .lock()
            .get(player)
            .map(|seat| seat.won_cards().to_vec())
    }

    /// Returns the points `player` has captured.
    ///
    /// Returns `None` if no player sits at that index.
    pub fn score_of(&self, player: usize) -> Option<u32> {
        self.players
            .lock()
            .get(player)
            .map(|seat| self.options.points.total(seat.won_cards()))
    }

    /// Returns every player's score in seat order.
    pub fn scores(&self) -> Vec<u32> {
        self.players
            .lock()
            .iter()
            .map(|seat| self.options.points.total(seat.won_cards()))
            .collect()
    }

    /// Returns the winning seat once the game is over.
    ///
    /// Returns `None` while the game is running or when the top score is shared.
    pub fn winner(&self) -> Option<usize> {
        if self.state() != GameState::GameOver {
            return None;
        }
        machine::top_scorer(&self.players.lock(), &self.options)
    }
}
