use crate::card::Card;
use crate::error::{DealerError, SettleError};
use crate::result::{Outcome, RoundResult};
use crate::rules::compare;

use super::{Message, RoundState, Status, StopReason};

/// The dealer draws while below this total.
pub const DEALER_STANDS_ON: u8 = 17;

/// What one call to [`RoundState::dealer_step`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealerStep {
    /// The dealer drew a card and may draw again.
    Drew(Card),
    /// The dealer stopped and the round was settled.
    Stood {
        /// Why the dealer stopped.
        reason: StopReason,
        /// The settlement.
        result: RoundResult,
    },
}

impl DealerStep {
    /// Returns whether the dealer's turn is over.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        matches!(self, Self::Stood { .. })
    }
}

impl RoundState {
    /// Returns why the dealer would stop now, or `None` if the dealer must draw.
    #[must_use]
    pub fn dealer_stop_reason(&self) -> Option<StopReason> {
        let value = self.dealer_hand.value();
        if self.dealer_hand.is_full() {
            Some(StopReason::HandFull)
        } else if value >= DEALER_STANDS_ON {
            Some(StopReason::Reached(value))
        } else {
            None
        }
    }

    /// Advances the dealer's turn by one step.
    ///
    /// While the dealer is under 17 with fewer than five cards, each call draws
    /// one card. The first call that finds the dealer done settles the round.
    /// Callers decide how much time passes between calls.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the dealer's turn.
    ///
    /// # Panics
    ///
    /// Panics if the deck runs out, which a deck accepted by
    /// [`RoundState::start_dealing_with`] cannot cause.
    pub fn dealer_step(&mut self) -> Result<DealerStep, DealerError> {
        if self.status != Status::DealerTurn {
            log::debug!("dealer step rejected while {:?}", self.status);
            return Err(DealerError::InvalidState);
        }

        if let Some(reason) = self.dealer_stop_reason() {
            log::debug!("dealer stands: {reason}");
            let result = self
                .determine_winner()
                .expect("the dealer has stopped during the dealer's turn");
            return Ok(DealerStep::Stood { reason, result });
        }

        let card = Self::deal_card(&mut self.deck);
        self.dealer_hand
            .add_card(card)
            .expect("a dealer hand under five cards has room");
        let value = self.dealer_hand.value();
        self.commit(Message::DealerHits { value });

        log::debug!("dealer hits {card}, now {value}");
        Ok(DealerStep::Drew(card))
    }

    /// Settles a round the dealer has finished.
    ///
    /// Calling it again once the round is over changes nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is already settled, it is not the dealer's
    /// turn, or the dealer still has to draw.
    pub fn determine_winner(&mut self) -> Result<RoundResult, SettleError> {
        match self.status {
            Status::DealerTurn => {}
            Status::GameOver => return Err(SettleError::AlreadySettled),
            Status::Idle | Status::Betting | Status::Playing => {
                return Err(SettleError::InvalidState);
            }
        }

        if self.dealer_stop_reason().is_none() {
            return Err(SettleError::DealerStillDrawing);
        }

        let outcome = compare(self.player_hand.cards(), self.dealer_hand.cards());
        Ok(self.settle(outcome))
    }

    /// Credits the payout for `outcome` and ends the round.
    pub(super) fn settle(&mut self, outcome: Outcome) -> RoundResult {
        let bet = self.current_bet;
        let result = RoundResult::new(
            outcome,
            bet,
            self.player_hand.value(),
            self.dealer_hand.value(),
        );

        self.chips = self.chips.saturating_add(result.payout);
        self.last_result = Some(result);
        self.status = Status::GameOver;

        let message = match outcome {
            Outcome::DragonWin => Message::FiveDragon {
                won: result.payout,
            },
            Outcome::DragonBust => Message::DragonBust { lost: bet },
            Outcome::PlayerBust => Message::Bust { lost: bet },
            Outcome::DealerBust | Outcome::PlayerHigher => Message::PlayerWins { won: bet },
            Outcome::DealerHigher => Message::DealerWins { lost: bet },
            Outcome::Tie => Message::Push,
        };
        self.commit(message);

        log::debug!(
            "round settled: {outcome:?} player={} dealer={} payout={} chips={}",
            result.player_value,
            result.dealer_value,
            result.payout,
            self.chips
        );
        result
    }
}
