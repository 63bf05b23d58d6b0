//! Bet records.
//!
//! A `Bet` is a single wager as the user sees it. `Model` is the row stored in
//! the `bets` table; amounts are kept as integer cents and the outcome as its
//! lowercase name.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveValue, entity::prelude::*};

use crate::{EngineError, MoneyCents, Outcome};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bet {
    /// Assigned by the store, never reused after a delete.
    pub id: i64,
    pub bookmaker: String,
    pub amount: MoneyCents,
    pub outcome: Outcome,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Input for [`Engine::create_bet`](crate::Engine::create_bet).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewBet {
    pub bookmaker: String,
    pub amount: MoneyCents,
    pub outcome: Outcome,
    pub description: Option<String>,
    /// Defaults to the creation instant when `None`.
    pub created_at: Option<DateTime<Utc>>,
}

impl NewBet {
    pub fn new(bookmaker: impl Into<String>, amount: MoneyCents, outcome: Outcome) -> Self {
        Self {
            bookmaker: bookmaker.into(),
            amount,
            outcome,
            description: None,
            created_at: None,
        }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "bets")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub bookmaker: String,
    pub amount_minor: i64,
    pub outcome: String,
    pub description: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<&Bet> for ActiveModel {
    fn from(bet: &Bet) -> Self {
        Self {
            id: ActiveValue::Set(bet.id),
            bookmaker: ActiveValue::Set(bet.bookmaker.clone()),
            amount_minor: ActiveValue::Set(bet.amount.cents()),
            outcome: ActiveValue::Set(bet.outcome.as_str().to_string()),
            description: ActiveValue::Set(bet.description.clone()),
            created_at: ActiveValue::Set(bet.created_at),
        }
    }
}

impl TryFrom<Model> for Bet {
    type Error = EngineError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            bookmaker: model.bookmaker,
            amount: MoneyCents::new(model.amount_minor),
            outcome: Outcome::try_from(model.outcome.as_str())?,
            description: model.description,
            created_at: model.created_at,
        })
    }
}
