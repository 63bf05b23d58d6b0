//! Parsing of single console lines.

use engine::{MoneyCents, Outcome, validation};

pub const INVALID_AMOUNT: &str = "Invalid amount. Enter a value greater than zero.";
pub const INVALID_OUTCOME: &str = "Invalid option. Try again.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    List,
    Add,
    Edit,
    Remove,
    Report,
    Exit,
}

impl MenuChoice {
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim() {
            "1" => Some(Self::List),
            "2" => Some(Self::Add),
            "3" => Some(Self::Edit),
            "4" => Some(Self::Remove),
            "5" => Some(Self::Report),
            "0" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// A strictly positive amount with at most two decimals, capped at
/// [`validation::MAX_WAGER`].
pub fn parse_wager(line: &str) -> Result<MoneyCents, String> {
    line.parse::<MoneyCents>()
        .and_then(validation::wager_amount)
        .map_err(|_| INVALID_AMOUNT.to_string())
}

/// Accepts the outcome sub-menu number or the outcome name in any case.
pub fn parse_outcome(line: &str) -> Result<Outcome, String> {
    match line.trim() {
        "1" => Ok(Outcome::Won),
        "2" => Ok(Outcome::Lost),
        "3" => Ok(Outcome::Pending),
        other => Outcome::try_from(other).map_err(|_| INVALID_OUTCOME.to_string()),
    }
}

pub fn parse_id(line: &str) -> Option<i64> {
    line.trim().parse().ok()
}
