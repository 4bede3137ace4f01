//! A Brisca rules engine with optional `no_std` support.
//!
//! Brisca is a trick-taking game played with the 40-card Spanish deck. The
//! crate provides a [`Game`] type that draws the trump card, deals, checks
//! every play, decides who takes each round, and keeps score.
//!
//! # Example
//!
//! ```
//! use brisca::{Game, GameEvent, GameOptions};
//!
//! let game = Game::new(GameOptions::default(), 42);
//! game.subscribe(|event: &GameEvent| {
//!     let _ = event;
//! });
//! game.start_deal().unwrap();
//!
//! let player = game.current_turn();
//! let card = game.hand(player).unwrap()[0];
//! game.play_card(player, card).unwrap();
//! assert_eq!(game.current_turn(), 1);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod event;
pub mod game;
pub mod hand;
pub mod options;
pub mod points;
pub mod result;
pub mod rules;
mod sync;

// Re-export main types
pub use card::{Card, DECK_SIZE, RANKS, Suit};
pub use deck::{CardProvider, Deck};
pub use error::{CardError, DealError, PlayError};
pub use event::{GameEvent, SubscriptionId};
pub use game::{Game, GameState, Observer, Round};
pub use hand::Player;
pub use options::{GameOptions, MAX_PLAYERS, MIN_PLAYERS, UnmatchedSuitRule};
pub use points::{DEFAULT_POINTS, PointsTable};
pub use result::{PlayOutcome, RoundResult};
pub use rules::Trick;
