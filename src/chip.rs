//! Bet denominations.

use core::fmt;

use crate::error::BetError;

/// A chip the player can put on the table.
///
/// Only these four denominations are accepted as bets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Chip {
    /// 10 chips.
    Ten,
    /// 50 chips.
    Fifty,
    /// 100 chips.
    Hundred,
    /// 500 chips.
    FiveHundred,
}

impl Chip {
    /// All denominations, smallest first.
    pub const ALL: [Self; 4] = [Self::Ten, Self::Fifty, Self::Hundred, Self::FiveHundred];

    /// Returns the chip amount.
    #[must_use]
    pub const fn amount(self) -> u32 {
        match self {
            Self::Ten => 10,
            Self::Fifty => 50,
            Self::Hundred => 100,
            Self::FiveHundred => 500,
        }
    }
}

impl TryFrom<u32> for Chip {
    type Error = BetError;

    fn try_from(amount: u32) -> Result<Self, Self::Error> {
        match amount {
            10 => Ok(Self::Ten),
            50 => Ok(Self::Fifty),
            100 => Ok(Self::Hundred),
            500 => Ok(Self::FiveHundred),
            _ => Err(BetError::InvalidDenomination),
        }
    }
}

impl From<Chip> for u32 {
    fn from(chip: Chip) -> Self {
        chip.amount()
    }
}

impl fmt::Display for Chip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.amount())
    }
}
