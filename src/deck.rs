//! The 52-card deck.

extern crate alloc;

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::EmptyDeckError;

/// An ordered deck consumed from the front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
    next: usize,
}

impl Deck {
    /// Creates an unshuffled deck with one card per suit and rank.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }

        Self { cards, next: 0 }
    }

    /// Creates a fresh deck and shuffles it.
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::new();
        deck.shuffle(rng);
        deck
    }

    /// Creates a deck that deals `cards` in the given order.
    ///
    /// Note: the cards are not checked for duplicates or count. This is meant
    /// for replays and stacked decks in tests.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards, next: 0 }
    }

    /// Shuffles the undealt cards with a Fisher-Yates pass.
    ///
    /// Every permutation is equally likely given a uniform `rng`.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards[self.next..].shuffle(rng);
    }

    /// Removes and returns the front card.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyDeckError`] if every card has been dealt.
    pub fn draw(&mut self) -> Result<Card, EmptyDeckError> {
        let card = *self.cards.get(self.next).ok_or(EmptyDeckError)?;
        self.next += 1;
        Ok(card)
    }

    /// Returns the undealt cards, front first.
    #[must_use]
    pub fn remaining(&self) -> &[Card] {
        &self.cards[self.next..]
    }

    /// Returns the number of undealt cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len() - self.next
    }

    /// Returns whether every card has been dealt.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
