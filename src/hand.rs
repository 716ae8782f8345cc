//! Hand representation and point evaluation.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{Card, Rank, Suit};
use crate::error::ActionError;

/// Maximum number of cards a hand may hold.
pub const MAX_HAND_SIZE: usize = 5;

/// Most cards a single round can draw: two full hands.
pub const ROUND_CARDS: usize = 2 * MAX_HAND_SIZE;

/// Highest total that is not a bust.
pub const TWENTY_ONE: u8 = 21;

/// Computes the best point total of `cards`.
///
/// Every ace is independently valued at 1 or 11. All combinations are tried and
/// the highest total that does not exceed 21 wins. If every combination busts,
/// the total with all aces at 1 is returned.
///
/// Hidden cards are counted with their true rank.
#[must_use]
pub fn score(cards: &[Card]) -> u8 {
    let mut base: u32 = 0;
    let mut aces: u32 = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        } else {
            base += u32::from(card.base_value());
        }
    }

    let all_ones = base + aces;
    if all_ones > u32::from(TWENTY_ONE) {
        // Every other combination is larger still.
        return clamp(all_ones);
    }

    let mut best: Option<u32> = None;
    for mask in 0..(1_u32 << aces) {
        let elevens = mask.count_ones();
        let total = base + elevens * 11 + (aces - elevens);
        if total <= u32::from(TWENTY_ONE) && best.is_none_or(|b| total > b) {
            best = Some(total);
        }
    }

    clamp(best.unwrap_or(all_ones))
}

fn clamp(total: u32) -> u8 {
    u8::try_from(total).unwrap_or(u8::MAX)
}

/// A hand of up to five cards belonging to the player or the dealer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::HandFull`] if the hand already holds five cards.
    pub fn add_card(&mut self, card: Card) -> Result<(), ActionError> {
        if self.is_full() {
            return Err(ActionError::HandFull);
        }
        self.cards.push(card);
        Ok(())
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the value of the hand, including face-down cards.
    #[must_use]
    pub fn value(&self) -> u8 {
        score(&self.cards)
    }

    /// Calculates the value of the face-up cards only.
    #[must_use]
    pub fn visible_value(&self) -> u8 {
        let mut visible = [Card::new(Suit::Spades, Rank::Two); MAX_HAND_SIZE];
        let mut len = 0;
        for card in self.cards.iter().filter(|card| !card.is_hidden()) {
            visible[len] = *card;
            len += 1;
        }
        score(&visible[..len])
    }

    /// Returns whether any card is face down.
    #[must_use]
    pub fn has_hidden(&self) -> bool {
        self.cards.iter().any(Card::is_hidden)
    }

    /// Turns every card face up.
    pub fn reveal_all(&mut self) {
        for card in &mut self.cards {
            card.reveal();
        }
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > TWENTY_ONE
    }

    /// Returns whether the hand holds five cards.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cards.len() >= MAX_HAND_SIZE
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}
