//! Bust and five dragon classification.
//!
//! A hand that reaches five cards without going over 21 is a five dragon and
//! wins outright. A hand that goes over 21 exactly on its fifth card is a
//! dragon bust. Any other hand over 21 is an ordinary bust.

use crate::card::Card;
use crate::hand::{MAX_HAND_SIZE, TWENTY_ONE, score};
use crate::result::Outcome;

/// Classification of a hand after a card has been added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandClass {
    /// Not over 21 and fewer than five cards; play continues.
    Open,
    /// Over 21 before reaching five cards.
    Bust,
    /// Five cards worth 21 or less.
    Dragon,
    /// Four cards worth 21 or less, pushed over 21 by the fifth.
    DragonBust,
}

/// Returns whether the hand is over 21.
#[must_use]
pub fn is_bust(cards: &[Card]) -> bool {
    score(cards) > TWENTY_ONE
}

/// Returns whether the hand is a five dragon.
#[must_use]
pub fn is_dragon(cards: &[Card]) -> bool {
    cards.len() == MAX_HAND_SIZE && score(cards) <= TWENTY_ONE
}

/// Returns whether the hand busted on its fifth card.
#[must_use]
pub fn is_dragon_bust(cards: &[Card]) -> bool {
    cards.len() == MAX_HAND_SIZE
        && score(&cards[..MAX_HAND_SIZE - 1]) <= TWENTY_ONE
        && score(cards) > TWENTY_ONE
}

/// Classifies a hand. Dragon rules are checked before the ordinary bust rule.
#[must_use]
pub fn classify(cards: &[Card]) -> HandClass {
    if is_dragon(cards) {
        HandClass::Dragon
    } else if is_dragon_bust(cards) {
        HandClass::DragonBust
    } else if is_bust(cards) {
        HandClass::Bust
    } else {
        HandClass::Open
    }
}

/// Compares final hands once the dealer has stopped drawing.
///
/// Five-card rules are not applied here; a round that ended on one never
/// reaches the comparison. The checks run in order: player bust, dealer bust,
/// then points.
#[must_use]
pub fn compare(player: &[Card], dealer: &[Card]) -> Outcome {
    let player_value = score(player);
    let dealer_value = score(dealer);

    if player_value > TWENTY_ONE {
        Outcome::PlayerBust
    } else if dealer_value > TWENTY_ONE {
        Outcome::DealerBust
    } else if dealer_value > player_value {
        Outcome::DealerHigher
    } else if dealer_value < player_value {
        Outcome::PlayerHigher
    } else {
        Outcome::Tie
    }
}
