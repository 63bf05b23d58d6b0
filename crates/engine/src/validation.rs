//! Field rules for bet records.
//!
//! The store runs every write through these, and the console uses them to
//! re-prompt before anything reaches the store.

use crate::{EngineError, MoneyCents, ResultEngine};

pub const BOOKMAKER_MAX_CHARS: usize = 200;
pub const DESCRIPTION_MAX_CHARS: usize = 1000;
/// Largest accepted wager (100 000 000 000.00). Keeps the integer `SUM` of
/// the whole table far below `i64::MAX`.
pub const MAX_WAGER: MoneyCents = MoneyCents::new(10_000_000_000_000);

/// Trims the bookmaker name; it must be non-empty and at most
/// [`BOOKMAKER_MAX_CHARS`] characters.
pub fn bookmaker(value: &str) -> ResultEngine<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(EngineError::InvalidName(
            "bookmaker name must not be empty".to_string(),
        ));
    }
    if trimmed.chars().count() > BOOKMAKER_MAX_CHARS {
        return Err(EngineError::InvalidName(format!(
            "bookmaker name exceeds {BOOKMAKER_MAX_CHARS} characters"
        )));
    }
    Ok(trimmed.to_string())
}

/// Blank descriptions become `None`.
pub fn description(value: Option<&str>) -> ResultEngine<Option<String>> {
    let Some(trimmed) = value.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };
    if trimmed.chars().count() > DESCRIPTION_MAX_CHARS {
        return Err(EngineError::InvalidText(format!(
            "description exceeds {DESCRIPTION_MAX_CHARS} characters"
        )));
    }
    Ok(Some(trimmed.to_string()))
}

pub fn wager_amount(amount: MoneyCents) -> ResultEngine<MoneyCents> {
    if !amount.is_positive() {
        return Err(EngineError::InvalidAmount(
            "amount must be > 0".to_string(),
        ));
    }
    if amount > MAX_WAGER {
        return Err(EngineError::InvalidAmount(format!(
            "amount must not exceed {MAX_WAGER}"
        )));
    }
    Ok(amount)
}
