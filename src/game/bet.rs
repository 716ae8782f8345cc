use crate::card::Card;
use crate::chip::Chip;
use crate::deck::Deck;
use crate::error::{BetError, DealError, NewGameError};
use crate::hand::ROUND_CARDS;

use super::{Message, RoundState, Status};

impl RoundState {
    pub(super) fn deal_card(deck: &mut Deck) -> Card {
        deck.draw()
            .expect("a round never uses more cards than a deck holds")
    }

    /// Clears the table and opens betting.
    ///
    /// Accepted while idle, betting or after a round is over. A bet placed but
    /// not yet dealt is returned to the player's chips.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is being played.
    pub fn start_new_game(&mut self) -> Result<(), NewGameError> {
        match self.status {
            Status::Idle | Status::Betting | Status::GameOver => {}
            Status::Playing | Status::DealerTurn => {
                log::debug!("new game rejected while {:?}", self.status);
                return Err(NewGameError::RoundInProgress);
            }
        }

        if self.status == Status::Betting {
            self.chips = self.chips.saturating_add(self.current_bet);
        }

        self.player_hand.clear();
        self.dealer_hand.clear();
        self.current_bet = 0;
        self.last_result = None;
        self.status = Status::Betting;
        self.commit(Message::PlaceBet);

        log::debug!("new game, chips={}", self.chips);
        Ok(())
    }

    /// Moves one chip from the player's balance onto the bet.
    ///
    /// Bets accumulate until the cards are dealt.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in betting state or the player
    /// cannot cover the chip.
    pub fn place_bet(&mut self, chip: Chip) -> Result<(), BetError> {
        if self.status != Status::Betting {
            log::debug!("bet rejected while {:?}", self.status);
            return Err(BetError::InvalidState);
        }

        let amount = chip.amount();
        if self.chips < amount {
            log::debug!("bet of {amount} rejected, chips={}", self.chips);
            return Err(BetError::InsufficientFunds);
        }

        self.chips -= amount;
        self.current_bet += amount;
        self.touch();

        log::debug!("bet {amount}, total bet={}", self.current_bet);
        Ok(())
    }

    /// Deals two cards to the player and two to the dealer from `deck`.
    ///
    /// The player's cards come off the deck first. The dealer's second card is
    /// dealt face down.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in betting state, no bet has been
    /// placed, or `deck` holds fewer than [`ROUND_CARDS`] cards.
    #[expect(
        clippy::missing_panics_doc,
        reason = "internal expects are guaranteed to succeed"
    )]
    pub fn start_dealing_with(&mut self, mut deck: Deck) -> Result<(), DealError> {
        if self.status != Status::Betting {
            log::debug!("deal rejected while {:?}", self.status);
            return Err(DealError::InvalidState);
        }

        if self.current_bet == 0 {
            log::debug!("deal rejected, no bet");
            return Err(DealError::NoBet);
        }

        if deck.len() < ROUND_CARDS {
            return Err(DealError::NotEnoughCards);
        }

        self.player_hand.clear();
        self.dealer_hand.clear();

        for _ in 0..2 {
            let card = Self::deal_card(&mut deck);
            self.player_hand
                .add_card(card)
                .expect("an empty hand has room for two cards");
        }

        let up = Self::deal_card(&mut deck);
        let hole = Self::deal_card(&mut deck).face_down();
        for card in [up, hole] {
            self.dealer_hand
                .add_card(card)
                .expect("an empty hand has room for two cards");
        }

        self.deck = deck;
        self.status = Status::Playing;
        self.commit(Message::YourTurn);

        log::debug!(
            "dealt player {} + {}, dealer shows {}, bet={}",
            self.player_hand.cards()[0],
            self.player_hand.cards()[1],
            up,
            self.current_bet
        );
        Ok(())
    }
}
