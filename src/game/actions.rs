use crate::card::Card;
use crate::error::ActionError;
use crate::hand::MAX_HAND_SIZE;
use crate::result::Outcome;
use crate::rules::{HandClass, classify};

use super::{Message, RoundState, Status};

impl RoundState {
    /// Player action: Hit (draw a card).
    ///
    /// After the draw the hand is classified. A five dragon, a dragon bust or
    /// an ordinary bust settles the round immediately. With four cards in hand
    /// the message warns that the next card triggers the dragon check.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in playing state or the hand
    /// already holds five cards.
    ///
    /// # Panics
    ///
    /// Panics if the deck runs out, which a deck accepted by
    /// [`RoundState::start_dealing_with`] cannot cause.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        if self.status != Status::Playing {
            log::debug!("hit rejected while {:?}", self.status);
            return Err(ActionError::InvalidState);
        }

        if self.player_hand.is_full() {
            return Err(ActionError::HandFull);
        }

        let card = Self::deal_card(&mut self.deck);
        self.player_hand
            .add_card(card)
            .expect("the hand was checked for room above");
        log::debug!(
            "player hits {card}, {} cards worth {}",
            self.player_hand.len(),
            self.player_hand.value()
        );

        match classify(self.player_hand.cards()) {
            HandClass::Dragon => {
                self.settle(Outcome::DragonWin);
            }
            HandClass::DragonBust => {
                self.settle(Outcome::DragonBust);
            }
            HandClass::Bust => {
                self.settle(Outcome::PlayerBust);
            }
            HandClass::Open if self.player_hand.len() == MAX_HAND_SIZE - 1 => {
                self.commit(Message::DragonWarning);
            }
            HandClass::Open => self.touch(),
        }

        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// Turns the dealer's hole card face up and hands the turn to the dealer.
    /// The dealer's draws are then driven by [`RoundState::dealer_step`].
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in playing state.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        if self.status != Status::Playing {
            log::debug!("stand rejected while {:?}", self.status);
            return Err(ActionError::InvalidState);
        }

        self.dealer_hand.reveal_all();
        self.status = Status::DealerTurn;
        self.commit(Message::DealerTurn);

        log::debug!(
            "player stands on {}, dealer reveals {}",
            self.player_hand.value(),
            self.dealer_hand.value()
        );
        Ok(())
    }
}
