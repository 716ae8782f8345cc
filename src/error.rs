//! Error types for game operations.
//!
//! A rejected operation leaves the round untouched, so every error here can be
//! ignored safely by a front end that has already disabled the action.

use thiserror::Error;

/// Errors that can occur when starting a new game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NewGameError {
    /// A round is in progress.
    #[error("a round is in progress")]
    RoundInProgress,
}

/// Errors that can occur during betting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Invalid game state for betting.
    #[error("invalid game state for betting")]
    InvalidState,
    /// Insufficient chips.
    #[error("insufficient chips")]
    InsufficientFunds,
    /// Amount is not one of the accepted chip denominations.
    #[error("bet must be 10, 50, 100 or 500")]
    InvalidDenomination,
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// No bet has been placed.
    #[error("no bet has been placed")]
    NoBet,
    /// The deck cannot cover a full round.
    #[error("not enough cards in the deck for a round")]
    NotEnoughCards,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// The hand already holds five cards.
    #[error("hand already holds five cards")]
    HandFull,
}

/// Errors that can occur while the dealer plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealerError {
    /// Invalid game state for the dealer's turn.
    #[error("invalid game state for the dealer's turn")]
    InvalidState,
}

/// Errors that can occur during settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SettleError {
    /// Invalid game state for settlement.
    #[error("invalid game state for settlement")]
    InvalidState,
    /// The dealer must still draw.
    #[error("the dealer must still draw")]
    DealerStillDrawing,
    /// The round has already been settled.
    #[error("the round has already been settled")]
    AlreadySettled,
}

/// Drawing from a deck with no cards left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no cards left in the deck")]
pub struct EmptyDeckError;
