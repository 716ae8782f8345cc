//! A Five Dragon blackjack rules engine with optional `no_std` support.
//!
//! One player bets chips and plays against the dealer. Besides the usual
//! comparison of points, a player who collects five cards without going over
//! 21 wins a five dragon paying five times the bet, and one who goes over 21
//! on the fifth card suffers a dragon bust.
//!
//! The crate provides a [`Game`] type that owns the session state and exposes
//! the round flow as single-step operations: betting, dealing, hitting,
//! standing, and a dealer step function the caller drives at its own pace.
//!
//! # Example
//!
//! ```no_run
//! use wulong::{Chip, Game, GameOptions, Status};
//!
//! let game = Game::new(GameOptions::default(), 42);
//! game.start_new_game().unwrap();
//! game.place_bet(Chip::Hundred).unwrap();
//! game.start_dealing().unwrap();
//! game.stand().unwrap();
//! while game.status() == Status::DealerTurn {
//!     game.dealer_step().unwrap();
//! }
//! println!("{}", game.snapshot().message);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod chip;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
pub mod rules;
mod sync;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use chip::Chip;
pub use deck::Deck;
pub use error::{
    ActionError, BetError, DealError, DealerError, EmptyDeckError, NewGameError, SettleError,
};
pub use game::{
    DEALER_STANDS_ON, DealerPlay, DealerStep, Game, Message, RoundState, Snapshot, Status,
    StopReason,
};
pub use hand::{Hand, MAX_HAND_SIZE, ROUND_CARDS, TWENTY_ONE, score};
pub use options::{DEFAULT_STARTING_CHIPS, GameOptions};
pub use result::{Outcome, RoundResult};
pub use rules::{HandClass, classify, compare, is_bust, is_dragon, is_dragon_bust};
