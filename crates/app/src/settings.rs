//! Settings for the bet tracker.
//!
//! Sources, later ones win: built-in defaults, an optional TOML file
//! (`config/bet_tracker.toml` unless `--config` is given), `BET_TRACKER__*`
//! environment variables, command line flags.
use chrono_tz::Tz;
use clap::Parser;
use serde::Deserialize;

use crate::error::{AppError, Result};

const DEFAULT_CONFIG_PATH: &str = "config/bet_tracker.toml";
const DEFAULT_DATABASE_URL: &str = "sqlite:./bettingtracker.db?mode=rwc";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct App {
    pub level: String,
    /// IANA name used to display timestamps.
    pub timezone: String,
    pub currency_symbol: String,
}

impl Default for App {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            timezone: "UTC".to_string(),
            currency_symbol: "R$".to_string(),
        }
    }
}

impl App {
    pub fn timezone(&self) -> Result<Tz> {
        self.timezone
            .parse()
            .map_err(|_| AppError::Timezone(self.timezone.clone()))
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Database {
    pub url: String,
}

impl Default for Database {
    fn default() -> Self {
        Self {
            url: DEFAULT_DATABASE_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub app: App,
    pub database: Database,
}

#[derive(Debug, Parser)]
#[command(name = "bet_tracker")]
#[command(about = "Keep track of the money spent on bets")]
struct Args {
    /// Optional config file path (TOML).
    #[arg(long)]
    config: Option<String>,
    /// Database connection string (also read from `DATABASE_URL`).
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,
    /// Override log level (e.g. debug).
    #[arg(long)]
    level: Option<String>,
}

impl Settings {
    pub fn load() -> Result<Self> {
        let args = Args::parse();

        let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
        let mut settings: Settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("BET_TRACKER").separator("__"))
            .build()?
            .try_deserialize()?;

        if let Some(database_url) = args.database_url {
            settings.database.url = database_url;
        }
        if let Some(level) = args.level {
            settings.app.level = level;
        }

        Ok(settings)
    }
}
