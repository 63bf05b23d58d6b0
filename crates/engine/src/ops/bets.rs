use chrono::Utc;
use sea_orm::{ActiveValue, QueryOrder, TransactionTrait, prelude::*};

use crate::{Bet, NewBet, ResultEngine, bets, validation};

use super::{Engine, with_tx};

impl Engine {
    /// Stores a new bet and returns it with the id the database assigned.
    ///
    /// `created_at` defaults to now when the input leaves it unset.
    pub async fn create_bet(&self, new_bet: NewBet) -> ResultEngine<Bet> {
        let bookmaker = validation::bookmaker(&new_bet.bookmaker)?;
        let amount = validation::wager_amount(new_bet.amount)?;
        let description = validation::description(new_bet.description.as_deref())?;
        let created_at = new_bet.created_at.unwrap_or_else(Utc::now);

        let active = bets::ActiveModel {
            id: ActiveValue::NotSet,
            bookmaker: ActiveValue::Set(bookmaker),
            amount_minor: ActiveValue::Set(amount.cents()),
            outcome: ActiveValue::Set(new_bet.outcome.as_str().to_string()),
            description: ActiveValue::Set(description),
            created_at: ActiveValue::Set(created_at),
        };
        let bet = Bet::try_from(active.insert(&self.database).await?)?;

        tracing::debug!(bet_id = bet.id, outcome = %bet.outcome, "bet created");
        Ok(bet)
    }

    /// Point lookup. A missing id is `Ok(None)`.
    pub async fn bet(&self, id: i64) -> ResultEngine<Option<Bet>> {
        bets::Entity::find_by_id(id)
            .one(&self.database)
            .await?
            .map(Bet::try_from)
            .transpose()
    }

    /// All bets, most recent first. Bets created at the same instant are
    /// ordered by descending id.
    pub async fn list_bets(&self) -> ResultEngine<Vec<Bet>> {
        bets::Entity::find()
            .order_by_desc(bets::Column::CreatedAt)
            .order_by_desc(bets::Column::Id)
            .all(&self.database)
            .await?
            .into_iter()
            .map(Bet::try_from)
            .collect()
    }

    /// Overwrites every field of the stored bet with `bet.id`.
    ///
    /// Returns `false`, leaving the store untouched, when no such bet exists.
    pub async fn update_bet(&self, bet: &Bet) -> ResultEngine<bool> {
        let normalized = Bet {
            bookmaker: validation::bookmaker(&bet.bookmaker)?,
            amount: validation::wager_amount(bet.amount)?,
            description: validation::description(bet.description.as_deref())?,
            ..bet.clone()
        };

        let updated = with_tx!(self, |db_tx| {
            let exists = bets::Entity::find_by_id(normalized.id)
                .one(&db_tx)
                .await?
                .is_some();
            if exists {
                bets::ActiveModel::from(&normalized).update(&db_tx).await?;
            }
            ResultEngine::Ok(exists)
        })?;

        if updated {
            tracing::debug!(bet_id = normalized.id, "bet updated");
        }
        Ok(updated)
    }

    /// Permanently removes a bet. Returns `false` when the id is unknown.
    pub async fn delete_bet(&self, id: i64) -> ResultEngine<bool> {
        let deleted = with_tx!(self, |db_tx| {
            match bets::Entity::find_by_id(id).one(&db_tx).await? {
                Some(model) => {
                    model.delete(&db_tx).await?;
                    ResultEngine::Ok(true)
                }
                None => Ok(false),
            }
        })?;

        if deleted {
            tracing::debug!(bet_id = id, "bet deleted");
        }
        Ok(deleted)
    }
}
