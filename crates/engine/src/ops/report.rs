use sea_orm::{ConnectionTrait, Statement, TransactionTrait, Value};

use crate::{MoneyCents, Outcome, Report, ResultEngine};

use super::{Engine, with_tx};

impl Engine {
    /// Sum of every wager, 0.00 for an empty store.
    pub async fn total_wagered(&self) -> ResultEngine<MoneyCents> {
        sum_amount(&self.database, None).await
    }

    /// Sum of the wagers whose outcome is won.
    pub async fn total_won(&self) -> ResultEngine<MoneyCents> {
        sum_amount(&self.database, Some(Outcome::Won)).await
    }

    /// Sum of the wagers whose outcome is lost.
    pub async fn total_lost(&self) -> ResultEngine<MoneyCents> {
        sum_amount(&self.database, Some(Outcome::Lost)).await
    }

    /// Reads the three totals inside one transaction so they describe the
    /// same snapshot.
    pub async fn report(&self) -> ResultEngine<Report> {
        with_tx!(self, |db_tx| {
            let total_wagered = sum_amount(&db_tx, None).await?;
            let total_won = sum_amount(&db_tx, Some(Outcome::Won)).await?;
            let total_lost = sum_amount(&db_tx, Some(Outcome::Lost)).await?;
            ResultEngine::Ok(Report {
                total_wagered,
                total_won,
                total_lost,
            })
        })
    }
}

async fn sum_amount<C>(conn: &C, outcome: Option<Outcome>) -> ResultEngine<MoneyCents>
where
    C: ConnectionTrait,
{
    let backend = conn.get_database_backend();
    // Outcomes are written lowercase, LOWER() keeps rows from older or
    // hand-edited databases in the totals.
    let stmt = match outcome {
        None => Statement::from_string(
            backend,
            "SELECT COALESCE(SUM(amount_minor), 0) AS sum FROM bets",
        ),
        Some(outcome) => Statement::from_sql_and_values(
            backend,
            "SELECT COALESCE(SUM(amount_minor), 0) AS sum \
             FROM bets \
             WHERE LOWER(outcome) = ?",
            vec![Value::from(outcome.as_str())],
        ),
    };

    let sum: i64 = match conn.query_one(stmt).await? {
        Some(row) => row.try_get("", "sum")?,
        None => 0,
    };
    Ok(MoneyCents::new(sum))
}
