use tracing::debug;

use crate::card::Card;
use crate::deck::CardProvider;
use crate::error::PlayError;
use crate::event::GameEvent;
use crate::hand::Player;
use crate::result::PlayOutcome;

use super::machine::Machine;
use super::state::{GameState, Round};
use super::Game;

impl<P: CardProvider> Game<P> {
    fn validate_play(
        state: GameState,
        players: &[Player],
        round: &Round,
        player: usize,
        card: &Card,
    ) -> Result<(), PlayError> {
        if !state.accepts_plays() {
            return Err(PlayError::InvalidState);
        }

        let seat = players.get(player).ok_or(PlayError::PlayerIndexOutOfRange)?;

        if !card.is_valid() {
            return Err(PlayError::InvalidCard);
        }

        if player != round.turn {
            return Err(PlayError::NotYourTurn);
        }

        if !seat.has_card(card) {
            return Err(PlayError::CardNotInHand);
        }

        Ok(())
    }

    /// Plays `card` from `player`'s hand onto the table.
    ///
    /// When the play fills the last empty slot the round is resolved before
    /// this returns: the winner collects the cards, takes the lead, and
    /// every hand is refilled from the deck. Once the deck can no longer
    /// refill every hand the game moves to [`GameState::Endgame`], and to
    /// [`GameState::GameOver`] after the last card is played.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not accepting plays, no player sits
    /// at `player`, the card is not part of the deck, it is not the
    /// player's turn, or the player does not hold the card. A rejected play
    /// changes nothing and emits no event.
    #[expect(
        clippy::significant_drop_tightening,
        reason = "locks are held for entire operation"
    )]
    pub fn play_card(&self, player: usize, card: Card) -> Result<PlayOutcome, PlayError> {
        let outcome = {
            let mut state = self.state.lock();
            let mut deck = self.deck.lock();
            let mut players = self.players.lock();
            let mut round = self.round.lock();
            let mut trump = self.trump.lock();
            let mut drawing = self.drawing.lock();

            if let Err(err) = Self::validate_play(*state, &players, &round, player, &card) {
                debug!(player, card = %card, error = %err, "play rejected");
                return Err(err);
            }

            players[player].remove_card(&card);
            round.place(card);
            debug!(player, card = %card, next = round.turn, "card played");

            let events = alloc::vec![GameEvent::CardPlayed { player, card }];

            if round.is_complete() {
                let mut machine = Machine {
                    options: &self.options,
                    deck: &mut *deck,
                    players: &mut players,
                    round: &mut round,
                    trump: &mut trump,
                    drawing: *drawing,
                    events,
                    resolved: None,
                };
                *state = machine.settle(GameState::RoundEnd);
                *drawing = machine.drawing;

                let outcome = match machine.resolved {
                    Some(result) => PlayOutcome::RoundWon(result),
                    None => PlayOutcome::Played {
                        next: machine.round.turn,
                    },
                };
                self.enqueue(machine.events);
                outcome
            } else {
                self.enqueue(events);
                PlayOutcome::Played { next: round.turn }
            }
        };

        self.dispatch();
        Ok(outcome)
    }
}
