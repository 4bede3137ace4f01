//! Shared helpers for integration tests.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, Once};

use brisca::{Card, Deck, Game, GameEvent, Suit};
use tracing_subscriber::{EnvFilter, fmt};

static INIT: Once = Once::new();

/// Installs a test subscriber once per binary.
///
/// Reads `TEST_LOG`, then `RUST_LOG`, and defaults to `warn`.
pub fn init_logging() {
    INIT.call_once(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map_or_else(|_| EnvFilter::new("warn"), EnvFilter::new);

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

pub const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

/// Builds a two-player game whose deck yields `draws` in order.
pub fn scripted_game(draws: &[Card]) -> Game {
    init_logging();
    Game::with_provider(Default::default(), Deck::from_draws(draws.to_vec()))
}

/// Subscribes a probe that records every event.
pub fn record_events(game: &Game) -> Arc<Mutex<Vec<GameEvent>>> {
    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);
    game.subscribe(move |event: &GameEvent| sink.lock().unwrap().push(*event));
    events
}

/// Asserts each of the game's `total` cards is in exactly one place.
pub fn assert_conserved(game: &Game, total: usize) {
    let mut seen: Vec<Card> = game.deck.lock().cards();
    seen.extend(game.trump_card());
    for seat in 0..game.player_count() {
        seen.extend(game.hand(seat).unwrap());
        seen.extend(game.won_cards(seat).unwrap());
    }
    seen.extend(game.table().into_iter().flatten());

    let unique: HashSet<Card> = seen.iter().copied().collect();
    assert_eq!(unique.len(), seen.len(), "a card is in two places");
    assert_eq!(seen.len(), total, "a card went missing");
}
