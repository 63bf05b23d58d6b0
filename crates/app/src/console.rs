//! Interactive menu on top of the bet store.
//!
//! The session is generic over its input and output so it can be driven by a
//! script in tests. End of input behaves like choosing exit, also in the
//! middle of an operation.

use std::io::{BufRead, Write};

use chrono_tz::Tz;
use engine::{Bet, Engine, NewBet, Outcome, validation};

use crate::{
    error::Result,
    input::{self, MenuChoice},
};

const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M";

/// Whether the session keeps reading after an operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Control {
    Continue,
    Quit,
}

/// Outcome of prompting for an optional change to an existing field.
enum Edit<T> {
    Keep,
    Set(T),
    Quit,
}

pub struct Session<'a, R, W> {
    engine: &'a Engine,
    input: R,
    output: W,
    timezone: Tz,
    currency_symbol: String,
}

impl<'a, R, W> Session<'a, R, W>
where
    R: BufRead,
    W: Write,
{
    pub fn new(engine: &'a Engine, input: R, output: W, timezone: Tz, currency_symbol: String) -> Self {
        Self {
            engine,
            input,
            output,
            timezone,
            currency_symbol,
        }
    }

    /// Runs the menu loop until the user exits or input ends.
    ///
    /// Only storage and terminal failures are returned; bad input is handled
    /// by re-prompting.
    pub async fn run(&mut self) -> Result<()> {
        loop {
            self.print_menu()?;
            let Some(line) = self.prompt("Choice: ")? else {
                break;
            };

            let control = match MenuChoice::parse(&line) {
                Some(MenuChoice::List) => self.list().await?,
                Some(MenuChoice::Add) => self.add().await?,
                Some(MenuChoice::Edit) => self.edit().await?,
                Some(MenuChoice::Remove) => self.remove().await?,
                Some(MenuChoice::Report) => self.report().await?,
                Some(MenuChoice::Exit) => Control::Quit,
                None => {
                    writeln!(self.output, "Invalid option.")?;
                    Control::Continue
                }
            };

            if control == Control::Quit {
                break;
            }
        }

        tracing::debug!("console session finished");
        Ok(())
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "==== Bet Expense Tracker ====")?;
        writeln!(self.output, "1) List bets")?;
        writeln!(self.output, "2) Add bet")?;
        writeln!(self.output, "3) Edit bet")?;
        writeln!(self.output, "4) Remove bet")?;
        writeln!(self.output, "5) Spending report")?;
        writeln!(self.output, "0) Exit")?;
        Ok(())
    }

    async fn list(&mut self) -> Result<Control> {
        let bets = self.engine.list_bets().await?;
        if bets.is_empty() {
            writeln!(self.output, "No bets found.")?;
            return Ok(Control::Continue);
        }

        for bet in &bets {
            self.print_bet(bet)?;
        }
        Ok(Control::Continue)
    }

    fn print_bet(&mut self, bet: &Bet) -> Result<()> {
        let created_at = bet.created_at.with_timezone(&self.timezone);
        writeln!(
            self.output,
            "#{} - {} | {} {} | {} | {}",
            bet.id,
            bet.bookmaker,
            self.currency_symbol,
            bet.amount,
            bet.outcome,
            created_at.format(TIMESTAMP_FORMAT)
        )?;
        if let Some(description) = &bet.description {
            writeln!(self.output, "  {description}")?;
        }
        Ok(())
    }

    async fn add(&mut self) -> Result<Control> {
        let Some(bookmaker) = self.read_required("Bookmaker name: ", |line| {
            validation::bookmaker(line).map_err(|err| err.to_string())
        })?
        else {
            return Ok(Control::Quit);
        };

        let amount_label = format!("Amount wagered ({}): ", self.currency_symbol);
        let Some(amount) = self.read_required(&amount_label, input::parse_wager)? else {
            return Ok(Control::Quit);
        };

        let Some(outcome) = self.read_outcome()? else {
            return Ok(Control::Quit);
        };

        let Some(description) = self.read_required("Description (optional): ", |line| {
            validation::description(Some(line)).map_err(|err| err.to_string())
        })?
        else {
            return Ok(Control::Quit);
        };

        let bet = self
            .engine
            .create_bet(NewBet {
                bookmaker,
                amount,
                outcome,
                description,
                created_at: None,
            })
            .await?;
        tracing::info!(bet_id = bet.id, "bet added");
        writeln!(self.output, "Bet #{} added.", bet.id)?;
        Ok(Control::Continue)
    }

    async fn edit(&mut self) -> Result<Control> {
        let Some(line) = self.prompt("Id of the bet to edit: ")? else {
            return Ok(Control::Quit);
        };
        let Some(id) = input::parse_id(&line) else {
            writeln!(self.output, "Invalid id.")?;
            return Ok(Control::Continue);
        };
        let Some(mut bet) = self.engine.bet(id).await? else {
            writeln!(self.output, "Bet not found.")?;
            return Ok(Control::Continue);
        };

        let label = format!("Bookmaker name ({}): ", bet.bookmaker);
        match self.read_change(&label, |line| {
            validation::bookmaker(line).map_err(|err| err.to_string())
        })? {
            Edit::Keep => {}
            Edit::Set(bookmaker) => bet.bookmaker = bookmaker,
            Edit::Quit => return Ok(Control::Quit),
        }

        let label = format!("Amount wagered ({} {}): ", self.currency_symbol, bet.amount);
        match self.read_change(&label, input::parse_wager)? {
            Edit::Keep => {}
            Edit::Set(amount) => bet.amount = amount,
            Edit::Quit => return Ok(Control::Quit),
        }

        let label = format!("Outcome ({}) [1) Won 2) Lost 3) Pending]: ", bet.outcome);
        match self.read_change(&label, input::parse_outcome)? {
            Edit::Keep => {}
            Edit::Set(outcome) => bet.outcome = outcome,
            Edit::Quit => return Ok(Control::Quit),
        }

        let label = format!(
            "Description ({}) [- to clear]: ",
            bet.description.as_deref().unwrap_or("")
        );
        match self.read_change(&label, |line| {
            if line.trim() == "-" {
                return Ok(None);
            }
            validation::description(Some(line)).map_err(|err| err.to_string())
        })? {
            Edit::Keep => {}
            Edit::Set(description) => bet.description = description,
            Edit::Quit => return Ok(Control::Quit),
        }

        if self.engine.update_bet(&bet).await? {
            tracing::info!(bet_id = bet.id, "bet updated");
            writeln!(self.output, "Updated.")?;
        } else {
            writeln!(self.output, "Update failed: bet not found.")?;
        }
        Ok(Control::Continue)
    }

    async fn remove(&mut self) -> Result<Control> {
        let Some(line) = self.prompt("Id of the bet to remove: ")? else {
            return Ok(Control::Quit);
        };
        let Some(id) = input::parse_id(&line) else {
            writeln!(self.output, "Invalid id.")?;
            return Ok(Control::Continue);
        };

        if self.engine.delete_bet(id).await? {
            tracing::info!(bet_id = id, "bet removed");
            writeln!(self.output, "Removed.")?;
        } else {
            writeln!(self.output, "Bet not found.")?;
        }
        Ok(Control::Continue)
    }

    async fn report(&mut self) -> Result<Control> {
        let report = self.engine.report().await?;
        let symbol = &self.currency_symbol;

        writeln!(self.output)?;
        writeln!(self.output, "==== SPENDING REPORT ====")?;
        writeln!(self.output, "Total wagered: {symbol} {}", report.total_wagered)?;
        writeln!(self.output, "Total won: {symbol} {}", report.total_won)?;
        writeln!(self.output, "Total lost: {symbol} {}", report.total_lost)?;
        writeln!(self.output, "Balance: {symbol} {}", report.balance())?;
        writeln!(
            self.output,
            "Status: {}",
            report.status().to_string().to_uppercase()
        )?;
        Ok(Control::Continue)
    }

    fn read_outcome(&mut self) -> Result<Option<Outcome>> {
        loop {
            writeln!(self.output, "Bet outcome:")?;
            for (index, outcome) in Outcome::ALL.iter().enumerate() {
                writeln!(self.output, "{}) {outcome}", index + 1)?;
            }
            let Some(line) = self.prompt("Choice (1-3): ")? else {
                return Ok(None);
            };
            match input::parse_outcome(&line) {
                Ok(outcome) => return Ok(Some(outcome)),
                Err(message) => writeln!(self.output, "{message}")?,
            }
        }
    }

    /// Prompts until `parse` accepts the line. `None` on end of input.
    fn read_required<T, F>(&mut self, label: &str, parse: F) -> Result<Option<T>>
    where
        F: Fn(&str) -> std::result::Result<T, String>,
    {
        loop {
            let Some(line) = self.prompt(label)? else {
                return Ok(None);
            };
            match parse(&line) {
                Ok(value) => return Ok(Some(value)),
                Err(message) => writeln!(self.output, "{message}")?,
            }
        }
    }

    /// Like [`Self::read_required`], but a blank line keeps the current value.
    fn read_change<T, F>(&mut self, label: &str, parse: F) -> Result<Edit<T>>
    where
        F: Fn(&str) -> std::result::Result<T, String>,
    {
        loop {
            let Some(line) = self.prompt(label)? else {
                return Ok(Edit::Quit);
            };
            if line.trim().is_empty() {
                return Ok(Edit::Keep);
            }
            match parse(&line) {
                Ok(value) => return Ok(Edit::Set(value)),
                Err(message) => writeln!(self.output, "{message}")?,
            }
        }
    }

    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
