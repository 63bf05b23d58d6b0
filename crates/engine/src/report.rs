//! Spending report over all recorded bets.

use std::fmt;

use crate::MoneyCents;

/// Totals read from the store at one point in time.
///
/// Pending bets count toward `total_wagered` only, so
/// `total_won + total_lost <= total_wagered`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Report {
    pub total_wagered: MoneyCents,
    pub total_won: MoneyCents,
    pub total_lost: MoneyCents,
}

impl Report {
    /// Won minus lost.
    #[must_use]
    pub fn balance(&self) -> MoneyCents {
        self.total_won - self.total_lost
    }

    #[must_use]
    pub fn status(&self) -> BalanceStatus {
        BalanceStatus::from(self.balance())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BalanceStatus {
    Profit,
    Loss,
    BreakEven,
}

impl From<MoneyCents> for BalanceStatus {
    fn from(balance: MoneyCents) -> Self {
        if balance.is_positive() {
            Self::Profit
        } else if balance.is_negative() {
            Self::Loss
        } else {
            Self::BreakEven
        }
    }
}

impl fmt::Display for BalanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Profit => "profit",
            Self::Loss => "loss",
            Self::BreakEven => "break-even",
        })
    }
}
