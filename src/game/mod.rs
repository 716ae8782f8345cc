//! Game engine and state management.

extern crate alloc;

use alloc::vec::Vec;

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::sync::Mutex;

use crate::card::Card;
use crate::chip::Chip;
use crate::deck::Deck;
use crate::error::{ActionError, BetError, DealError, DealerError, NewGameError, SettleError};
use crate::options::GameOptions;
use crate::result::RoundResult;

mod actions;
mod bet;
mod dealer;
pub mod state;

pub use dealer::{DEALER_STANDS_ON, DealerStep};
pub use state::{Message, RoundState, Snapshot, Status, StopReason};

/// Everything the dealer did between standing and settlement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DealerPlay {
    /// Cards the dealer drew, in order.
    pub drawn: Vec<Card>,
    /// Why the dealer stopped.
    pub reason: StopReason,
    /// The settlement.
    pub result: RoundResult,
}

/// A Five Dragon session: one player against the dealer.
///
/// The game owns the single [`RoundState`] of the session and the random
/// source used to shuffle. Every operation locks the state, applies one
/// transition and releases it, so a presentation layer can share the game
/// and read [`Game::snapshot`] between calls.
pub struct Game<R = ChaCha8Rng> {
    /// Game options.
    pub options: GameOptions,
    state: Mutex<RoundState>,
    rng: Mutex<R>,
}

impl Game {
    /// Creates a new session with the given seed.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use wulong::{Chip, Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// game.start_new_game().unwrap();
    /// game.place_bet(Chip::Fifty).unwrap();
    /// game.start_dealing().unwrap();
    /// game.stand().unwrap();
    /// let play = game.dealer_play().unwrap();
    /// println!("{:?}", play.result.outcome);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self::with_rng(options, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: RngCore> Game<R> {
    /// Creates a new session that shuffles with `rng`.
    #[must_use]
    pub fn with_rng(options: GameOptions, rng: R) -> Self {
        Self {
            state: Mutex::new(RoundState::new(&options)),
            options,
            rng: Mutex::new(rng),
        }
    }

    /// Ends the session and hands back its final state.
    #[must_use]
    pub fn into_round(self) -> RoundState {
        self.state.into_inner()
    }

    /// Returns a copy of the full round state.
    pub fn round(&self) -> RoundState {
        self.state.lock().clone()
    }

    /// Returns the view a presentation layer renders.
    pub fn snapshot(&self) -> Snapshot {
        self.state.lock().snapshot()
    }

    /// Returns the current round status.
    pub fn status(&self) -> Status {
        self.state.lock().status()
    }

    /// Returns the player's chips not currently at stake.
    pub fn chips(&self) -> u32 {
        self.state.lock().chips()
    }

    /// Returns the bet at stake this round.
    pub fn current_bet(&self) -> u32 {
        self.state.lock().current_bet()
    }

    /// Returns the result of the most recently settled round.
    pub fn last_result(&self) -> Option<RoundResult> {
        self.state.lock().last_result()
    }

    /// Returns whether `chip` can be bet right now.
    pub fn can_place(&self, chip: Chip) -> bool {
        let state = self.state.lock();
        state.status() == Status::Betting && state.chips() >= chip.amount()
    }

    /// Returns the chips that can be bet right now, smallest first.
    pub fn available_chips(&self) -> Vec<Chip> {
        Chip::ALL
            .into_iter()
            .filter(|&chip| self.can_place(chip))
            .collect()
    }

    /// Clears the table and opens betting.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is being played.
    pub fn start_new_game(&self) -> Result<(), NewGameError> {
        self.state.lock().start_new_game()
    }

    /// Adds `chip` to the bet.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in betting state or the player
    /// cannot cover the chip.
    pub fn place_bet(&self, chip: Chip) -> Result<(), BetError> {
        self.state.lock().place_bet(chip)
    }

    /// Shuffles a fresh deck and deals the opening hands.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in betting state or no bet has been
    /// placed.
    pub fn start_dealing(&self) -> Result<(), DealError> {
        let mut state = self.state.lock();
        if state.status() != Status::Betting {
            return Err(DealError::InvalidState);
        }

        let deck = Deck::shuffled(&mut *self.rng.lock());
        state.start_dealing_with(deck)
    }

    /// Deals the opening hands from a prepared deck.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in betting state, no bet has been
    /// placed, or `deck` holds fewer than [`ROUND_CARDS`](crate::ROUND_CARDS)
    /// cards.
    pub fn start_dealing_with(&self, deck: Deck) -> Result<(), DealError> {
        self.state.lock().start_dealing_with(deck)
    }

    /// Player action: Hit (draw a card).
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in playing state.
    pub fn hit(&self) -> Result<Card, ActionError> {
        self.state.lock().hit()
    }

    /// Player action: Stand (keep current hand).
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in playing state.
    pub fn stand(&self) -> Result<(), ActionError> {
        self.state.lock().stand()
    }

    /// Advances the dealer's turn by one step.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the dealer's turn.
    pub fn dealer_step(&self) -> Result<DealerStep, DealerError> {
        self.state.lock().dealer_step()
    }

    /// Runs the dealer's turn to completion without pauses.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the dealer's turn.
    pub fn dealer_play(&self) -> Result<DealerPlay, DealerError> {
        let mut state = self.state.lock();
        let mut drawn = Vec::new();

        loop {
            match state.dealer_step()? {
                DealerStep::Drew(card) => drawn.push(card),
                DealerStep::Stood { reason, result } => {
                    drop(state);
                    return Ok(DealerPlay {
                        drawn,
                        reason,
                        result,
                    });
                }
            }
        }
    }

    /// Settles the round once the dealer has stopped.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is already settled, it is not the dealer's
    /// turn, or the dealer still has to draw.
    pub fn determine_winner(&self) -> Result<RoundResult, SettleError> {
        self.state.lock().determine_winner()
    }
}
