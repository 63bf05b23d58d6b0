//! The module contains the error the engine can throw.
//!
//! Validation errors ([`InvalidAmount`], [`InvalidName`], [`InvalidText`],
//! [`InvalidOutcome`]) are raised before anything touches storage. Missing
//! records are not errors: lookups return `Option` and mutations return
//! `bool`.
//!
//!  [`InvalidAmount`]: EngineError::InvalidAmount
//!  [`InvalidName`]: EngineError::InvalidName
//!  [`InvalidText`]: EngineError::InvalidText
//!  [`InvalidOutcome`]: EngineError::InvalidOutcome
use sea_orm::DbErr;
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Invalid name: {0}")]
    InvalidName(String),
    #[error("Invalid text: {0}")]
    InvalidText(String),
    #[error("Invalid outcome: {0}")]
    InvalidOutcome(String),
    #[error(transparent)]
    Database(#[from] DbErr),
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::InvalidAmount(a), Self::InvalidAmount(b)) => a == b,
            (Self::InvalidName(a), Self::InvalidName(b)) => a == b,
            (Self::InvalidText(a), Self::InvalidText(b)) => a == b,
            (Self::InvalidOutcome(a), Self::InvalidOutcome(b)) => a == b,
            (Self::Database(a), Self::Database(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
