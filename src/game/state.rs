//! Round state types.

use core::fmt;

use crate::deck::Deck;
use crate::hand::Hand;
use crate::options::GameOptions;
use crate::result::RoundResult;

/// Round status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// Session started, no round yet.
    Idle,
    /// Accepting bets for the next round.
    Betting,
    /// Waiting for the player to hit or stand.
    Playing,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round has been settled.
    GameOver,
}

/// Why the dealer stopped drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StopReason {
    /// The dealer holds five cards.
    HandFull,
    /// The dealer reached 17 or more.
    Reached(u8),
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HandFull => f.write_str("five-card limit reached"),
            Self::Reached(value) => write!(f, "reached {value} points"),
        }
    }
}

/// Status line shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Message {
    /// Nothing has happened yet.
    Welcome,
    /// Waiting for a bet.
    PlaceBet,
    /// Waiting for hit or stand.
    YourTurn,
    /// The player holds four cards.
    DragonWarning,
    /// Five dragon win.
    FiveDragon {
        /// Chips paid out.
        won: u32,
    },
    /// Bust on the fifth card.
    DragonBust {
        /// Chips lost.
        lost: u32,
    },
    /// Ordinary bust.
    Bust {
        /// Chips lost.
        lost: u32,
    },
    /// The dealer's hole card has been turned over.
    DealerTurn,
    /// The dealer drew a card.
    DealerHits {
        /// Dealer total after the draw.
        value: u8,
    },
    /// Player won on points or dealer bust.
    PlayerWins {
        /// Chips won on top of the returned bet.
        won: u32,
    },
    /// Dealer won on points.
    DealerWins {
        /// Chips lost.
        lost: u32,
    },
    /// Equal points.
    Push,
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Welcome => f.write_str("Welcome to Five Dragon"),
            Self::PlaceBet => f.write_str("Place your bet"),
            Self::YourTurn => f.write_str("Your turn"),
            Self::DragonWarning => {
                f.write_str("Careful: the next card triggers the Five Dragon check!")
            }
            Self::FiveDragon { won } => write!(f, "Five Dragon! You win {won} chips!"),
            Self::DragonBust { lost } => write!(f, "Five Dragon bust! You lose {lost} chips!"),
            Self::Bust { lost } => write!(f, "Bust! You lose {lost} chips!"),
            Self::DealerTurn => f.write_str("Dealer's turn"),
            Self::DealerHits { value } => write!(f, "Dealer hits... ({value} points)"),
            Self::PlayerWins { won } => write!(f, "You win {won} chips!"),
            Self::DealerWins { lost } => write!(f, "You lose {lost} chips!"),
            Self::Push => f.write_str("Push! Bet returned."),
        }
    }
}

/// The single mutable root of a session.
///
/// Every accepted transition increments [`RoundState::version`]; a rejected
/// one leaves the whole value untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    pub(super) status: Status,
    pub(super) deck: Deck,
    pub(super) player_hand: Hand,
    pub(super) dealer_hand: Hand,
    pub(super) chips: u32,
    pub(super) current_bet: u32,
    pub(super) message: Message,
    pub(super) version: u64,
    pub(super) last_result: Option<RoundResult>,
}

impl RoundState {
    /// Creates the state for a fresh session.
    #[must_use]
    pub fn new(options: &GameOptions) -> Self {
        Self {
            status: Status::Idle,
            deck: Deck::new(),
            player_hand: Hand::new(),
            dealer_hand: Hand::new(),
            chips: options.starting_chips,
            current_bet: 0,
            message: Message::Welcome,
            version: 0,
            last_result: None,
        }
    }

    /// Returns the round status.
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Returns the deck in play.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player_hand
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer_hand
    }

    /// Returns the chips not currently at stake.
    #[must_use]
    pub const fn chips(&self) -> u32 {
        self.chips
    }

    /// Returns the bet at stake this round.
    #[must_use]
    pub const fn current_bet(&self) -> u32 {
        self.current_bet
    }

    /// Returns the status line.
    #[must_use]
    pub const fn message(&self) -> Message {
        self.message
    }

    /// Returns the number of accepted transitions so far.
    #[must_use]
    pub const fn version(&self) -> u64 {
        self.version
    }

    /// Returns the result of the most recently settled round.
    #[must_use]
    pub const fn last_result(&self) -> Option<RoundResult> {
        self.last_result
    }

    /// Returns the view handed to a presentation layer.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            status: self.status,
            player_hand: self.player_hand.clone(),
            dealer_hand: self.dealer_hand.clone(),
            chips: self.chips,
            current_bet: self.current_bet,
            message: self.message,
            version: self.version,
        }
    }

    pub(super) fn commit(&mut self, message: Message) {
        self.message = message;
        self.touch();
    }

    pub(super) fn touch(&mut self) {
        self.version += 1;
        log::trace!(
            "state v{} status={:?} chips={} bet={}",
            self.version,
            self.status,
            self.chips,
            self.current_bet
        );
    }
}

/// A point-in-time copy of the state a presentation layer renders.
///
/// Face-down cards are included with [`Card::is_hidden`](crate::Card::is_hidden)
/// set; it is up to the renderer not to show them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Round status.
    pub status: Status,
    /// The player's hand.
    pub player_hand: Hand,
    /// The dealer's hand.
    pub dealer_hand: Hand,
    /// Chips not currently at stake.
    pub chips: u32,
    /// Bet at stake this round.
    pub current_bet: u32,
    /// Status line.
    pub message: Message,
    /// Version of the state this was taken from.
    pub version: u64,
}
