//! Round outcomes and settlement records.

/// How a round ended for the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Player went over 21 before reaching five cards.
    PlayerBust,
    /// Dealer went over 21.
    DealerBust,
    /// Player reached five cards without going over 21.
    DragonWin,
    /// Player went over 21 on the fifth card.
    DragonBust,
    /// Dealer finished with more points.
    DealerHigher,
    /// Player finished with more points.
    PlayerHigher,
    /// Equal points.
    Tie,
}

impl Outcome {
    /// Returns the chips credited back to the player for a round staked at `bet`.
    ///
    /// The bet has already been taken from the player's chips when it was
    /// placed, so a loss credits nothing.
    ///
    /// | Outcome | Credit |
    /// |---|---|
    /// | Dragon win | 5 × bet |
    /// | Dealer bust, player higher | 2 × bet |
    /// | Tie | bet |
    /// | Player bust, dragon bust, dealer higher | 0 |
    #[must_use]
    pub const fn payout(self, bet: u32) -> u32 {
        match self {
            Self::DragonWin => bet.saturating_mul(5),
            Self::DealerBust | Self::PlayerHigher => bet.saturating_mul(2),
            Self::Tie => bet,
            Self::PlayerBust | Self::DragonBust | Self::DealerHigher => 0,
        }
    }

    /// Returns whether the player came out ahead.
    #[must_use]
    pub const fn is_win(self) -> bool {
        matches!(self, Self::DragonWin | Self::DealerBust | Self::PlayerHigher)
    }

    /// Returns whether the round ended on a five-card rule.
    #[must_use]
    pub const fn is_dragon(self) -> bool {
        matches!(self, Self::DragonWin | Self::DragonBust)
    }
}

/// Result of a settled round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// The outcome.
    pub outcome: Outcome,
    /// The bet that was at stake.
    pub bet: u32,
    /// Chips credited to the player at settlement.
    pub payout: u32,
    /// Net result (positive = profit, negative = loss).
    pub net: i64,
    /// The player's final hand value.
    pub player_value: u8,
    /// The dealer's final hand value.
    pub dealer_value: u8,
}

impl RoundResult {
    /// Builds the settlement record for `outcome` with `bet` at stake.
    #[must_use]
    pub fn new(outcome: Outcome, bet: u32, player_value: u8, dealer_value: u8) -> Self {
        let payout = outcome.payout(bet);
        Self {
            outcome,
            bet,
            payout,
            net: i64::from(payout) - i64::from(bet),
            player_value,
            dealer_value,
        }
    }
}
