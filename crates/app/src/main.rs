use migration::{Migrator, MigratorTrait};

use crate::{console::Session, error::Result, settings::Settings};

mod console;
mod error;
mod input;
mod settings;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("bet_tracker: {err}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let settings = Settings::load()?;

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(format!(
            "bet_tracker={level},engine={level},migration={level}",
            level = settings.app.level
        ))
        .init();

    let timezone = settings.app.timezone()?;

    tracing::info!(url = %settings.database.url, "opening bet store");
    let db = connect_db(&settings.database.url).await?;
    let engine = engine::Engine::builder().database(db).build().await?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let session = Session::new(
        &engine,
        stdin.lock(),
        stdout.lock(),
        timezone,
        settings.app.currency_symbol.clone(),
    )
    .run()
    .await;

    let closed = engine.close().await;
    session?;
    closed?;
    Ok(())
}

async fn connect_db(database_url: &str) -> Result<sea_orm::DatabaseConnection> {
    let db = sea_orm::Database::connect(database_url).await?;
    Migrator::up(&db, None).await?;
    Ok(db)
}
