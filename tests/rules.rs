//! Deck, evaluator and classifier tests.

use std::collections::HashSet;

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use wulong::{
    ActionError, BetError, Card, Chip, DECK_SIZE, Deck, EmptyDeckError, Hand, HandClass, Outcome,
    Rank, RoundResult, Suit, classify, compare, is_bust, is_dragon, is_dragon_bust, score,
};

fn hand_of(ranks: &[Rank]) -> Vec<Card> {
    ranks
        .iter()
        .zip(Suit::ALL.iter().cycle())
        .map(|(&rank, &suit)| Card::new(suit, rank))
        .collect()
}

#[test]
fn new_deck_holds_each_card_once() {
    let deck = Deck::new();
    assert_eq!(deck.len(), DECK_SIZE);

    let faces: HashSet<(Suit, Rank)> = deck
        .remaining()
        .iter()
        .map(|card| (card.suit, card.rank))
        .collect();
    assert_eq!(faces.len(), DECK_SIZE);
    assert!(deck.remaining().iter().all(|card| !card.is_hidden()));
}

#[test]
fn shuffle_keeps_the_same_cards() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let deck = Deck::shuffled(&mut rng);
    let fresh = Deck::new();

    assert_ne!(deck.remaining(), fresh.remaining());

    let shuffled: HashSet<Card> = deck.remaining().iter().copied().collect();
    let ordered: HashSet<Card> = fresh.remaining().iter().copied().collect();
    assert_eq!(shuffled, ordered);
}

#[test]
fn shuffle_is_deterministic_per_seed() {
    let first = Deck::shuffled(&mut ChaCha8Rng::seed_from_u64(9));
    let second = Deck::shuffled(&mut ChaCha8Rng::seed_from_u64(9));
    assert_eq!(first, second);
}

#[test]
fn draw_takes_from_the_front_until_empty() {
    let mut deck = Deck::shuffled(&mut ChaCha8Rng::seed_from_u64(5));
    let order = deck.remaining().to_vec();
    let mut seen = HashSet::new();

    for expected in &order {
        let card = deck.draw().unwrap();
        assert_eq!(&card, expected);
        assert!(seen.insert(card));
        assert_eq!(deck.remaining(), &order[seen.len()..]);
    }

    assert!(deck.is_empty());
    assert_eq!(deck.draw().unwrap_err(), EmptyDeckError);
}

#[test]
fn base_values() {
    assert_eq!(Rank::Ace.base_value(), 11);
    assert_eq!(Rank::Seven.base_value(), 7);
    assert_eq!(Rank::Ten.base_value(), 10);
    assert_eq!(Rank::Jack.base_value(), 10);
    assert_eq!(Rank::Queen.base_value(), 10);
    assert_eq!(Rank::King.base_value(), 10);
    assert_eq!(Card::new(Suit::Hearts, Rank::Queen).to_string(), "Q♥");
}

#[test]
fn score_resolves_aces() {
    assert_eq!(score(&[]), 0);
    assert_eq!(score(&hand_of(&[Rank::Ace, Rank::King])), 21);
    assert_eq!(score(&hand_of(&[Rank::Ace, Rank::Ace])), 12);
    assert_eq!(score(&hand_of(&[Rank::Ace, Rank::Ace, Rank::Nine])), 21);
    assert_eq!(score(&hand_of(&[Rank::Ace, Rank::Five, Rank::Ace])), 17);
    assert_eq!(
        score(&hand_of(&[Rank::Ace, Rank::Ace, Rank::Ace, Rank::Ace])),
        14
    );
    assert_eq!(
        score(&hand_of(&[
            Rank::Five,
            Rank::Four,
            Rank::Three,
            Rank::Two,
            Rank::Ace
        ])),
        15
    );
    assert_eq!(score(&hand_of(&[Rank::Ten, Rank::Ten, Rank::Ace])), 21);
    assert_eq!(
        score(&hand_of(&[Rank::Ten, Rank::Ten, Rank::Ace, Rank::Ace])),
        22
    );
}

#[test]
fn hidden_cards_still_count() {
    let cards = [
        Card::new(Suit::Clubs, Rank::Nine),
        Card::new(Suit::Clubs, Rank::Eight).face_down(),
    ];
    assert_eq!(score(&cards), 17);
    assert!(cards[1].is_hidden());
    assert!(cards[1].same_face(&Card::new(Suit::Clubs, Rank::Eight)));
    assert_ne!(cards[1], Card::new(Suit::Clubs, Rank::Eight));

    let mut hand = Hand::new();
    for card in cards {
        hand.add_card(card).unwrap();
    }
    assert_eq!(hand.value(), 17);
    assert_eq!(hand.visible_value(), 9);

    hand.reveal_all();
    assert_eq!(hand.visible_value(), 17);
    assert!(!hand.has_hidden());
    assert!(!hand.is_bust());

    hand.add_card(Card::new(Suit::Hearts, Rank::King)).unwrap();
    assert!(hand.is_bust());
}

#[test]
fn visible_value_skips_face_down_cards_anywhere_in_the_hand() {
    let mut hand = Hand::new();
    for card in [
        Card::new(Suit::Spades, Rank::Ace).face_down(),
        Card::new(Suit::Hearts, Rank::Ace),
        Card::new(Suit::Clubs, Rank::King).face_down(),
        Card::new(Suit::Diamonds, Rank::Nine),
        Card::new(Suit::Hearts, Rank::Two),
    ] {
        hand.add_card(card).unwrap();
    }

    assert_eq!(hand.visible_value(), 12);
    assert_eq!(hand.value(), 23);

    let mut all_down = Hand::new();
    all_down
        .add_card(Card::new(Suit::Spades, Rank::Ten).face_down())
        .unwrap();
    assert_eq!(all_down.visible_value(), 0);
    assert_eq!(Hand::new().visible_value(), 0);
}

#[test]
fn hand_holds_at_most_five_cards() {
    let mut hand = Hand::new();
    for card in hand_of(&[Rank::Two; 5]) {
        hand.add_card(card).unwrap();
    }
    assert!(hand.is_full());
    assert_eq!(
        hand.add_card(Card::new(Suit::Hearts, Rank::Two))
            .unwrap_err(),
        ActionError::HandFull
    );
    assert_eq!(hand.len(), 5);
}

#[test]
fn classification() {
    let open = hand_of(&[Rank::Two, Rank::Three, Rank::Four, Rank::Five]);
    assert_eq!(classify(&open), HandClass::Open);

    let dragon = hand_of(&[Rank::Two, Rank::Three, Rank::Four, Rank::Five, Rank::Six]);
    assert!(is_dragon(&dragon));
    assert!(!is_dragon_bust(&dragon));
    assert_eq!(classify(&dragon), HandClass::Dragon);

    let dragon_bust = hand_of(&[Rank::Two, Rank::Three, Rank::Four, Rank::Five, Rank::King]);
    assert!(is_bust(&dragon_bust));
    assert!(!is_dragon(&dragon_bust));
    assert!(is_dragon_bust(&dragon_bust));
    assert_eq!(classify(&dragon_bust), HandClass::DragonBust);

    let bust = hand_of(&[Rank::Ten, Rank::Ten, Rank::Five]);
    assert!(!is_dragon_bust(&bust));
    assert_eq!(classify(&bust), HandClass::Bust);

    // Already over 21 after four cards: not a dragon bust.
    let early = hand_of(&[Rank::Ten, Rank::Nine, Rank::Two, Rank::King, Rank::Two]);
    assert!(!is_dragon_bust(&early));
    assert_eq!(classify(&early), HandClass::Bust);
}

#[test]
fn compare_precedence() {
    let twenty = hand_of(&[Rank::King, Rank::Queen]);
    let nineteen = hand_of(&[Rank::King, Rank::Nine]);
    let bust = hand_of(&[Rank::King, Rank::Queen, Rank::Two]);

    assert_eq!(compare(&bust, &bust), Outcome::PlayerBust);
    assert_eq!(compare(&twenty, &bust), Outcome::DealerBust);
    assert_eq!(compare(&nineteen, &twenty), Outcome::DealerHigher);
    assert_eq!(compare(&twenty, &nineteen), Outcome::PlayerHigher);
    assert_eq!(compare(&twenty, &twenty), Outcome::Tie);
}

#[test]
fn payout_table() {
    assert_eq!(Outcome::DragonWin.payout(100), 500);
    assert_eq!(Outcome::DragonBust.payout(100), 0);
    assert_eq!(Outcome::PlayerBust.payout(100), 0);
    assert_eq!(Outcome::DealerBust.payout(100), 200);
    assert_eq!(Outcome::PlayerHigher.payout(100), 200);
    assert_eq!(Outcome::DealerHigher.payout(100), 0);
    assert_eq!(Outcome::Tie.payout(100), 100);

    let result = RoundResult::new(Outcome::DragonBust, 50, 24, 17);
    assert_eq!(result.net, -50);
    assert!(Outcome::DragonBust.is_dragon());
    assert!(!Outcome::DragonBust.is_win());
}

#[test]
fn chip_denominations() {
    let amounts: Vec<u32> = Chip::ALL.into_iter().map(Chip::amount).collect();
    assert_eq!(amounts, vec![10, 50, 100, 500]);
    assert_eq!(Chip::try_from(100_u32), Ok(Chip::Hundred));
    assert_eq!(Chip::try_from(20_u32), Err(BetError::InvalidDenomination));
}

fn brute_force(cards: &[Card]) -> u8 {
    let base: u8 = cards
        .iter()
        .filter(|card| !card.is_ace())
        .map(Card::base_value)
        .sum();
    let aces = cards.iter().filter(|card| card.is_ace()).count() as u8;

    (0..=aces)
        .map(|elevens| base + elevens * 11 + (aces - elevens))
        .filter(|&total| total <= 21)
        .max()
        .unwrap_or(base + aces)
}

proptest! {
    #[test]
    fn score_without_aces_is_the_sum(
        ranks in prop::collection::vec(prop::sample::select(Rank::ALL[1..].to_vec()), 0..=5)
    ) {
        let cards = hand_of(&ranks);
        let sum: u8 = cards.iter().map(Card::base_value).sum();
        prop_assert_eq!(score(&cards), sum);
    }

    #[test]
    fn score_is_best_total_under_22(
        ranks in prop::collection::vec(prop::sample::select(Rank::ALL.to_vec()), 0..=5)
    ) {
        let cards = hand_of(&ranks);
        let value = score(&cards);
        prop_assert_eq!(value, brute_force(&cards));

        let all_ones: u8 = cards
            .iter()
            .map(|card| if card.is_ace() { 1 } else { card.base_value() })
            .sum();
        prop_assert!(value >= all_ones);
        prop_assert_eq!(value <= 21, all_ones <= 21);
    }
}
