//! Bet record store and spending aggregates on top of sea-orm.
//!
//! [`Engine`] owns the database connection. Build it with
//! [`Engine::builder`], pass it by reference to whatever needs the store and
//! release it with [`Engine::close`].

pub use bets::{Bet, NewBet};
pub use error::EngineError;
pub use money::MoneyCents;
pub use ops::{Engine, EngineBuilder};
pub use outcome::Outcome;
pub use report::{BalanceStatus, Report};

mod bets;
mod error;
mod money;
mod ops;
mod outcome;
mod report;
pub mod validation;

pub type ResultEngine<T> = Result<T, EngineError>;
