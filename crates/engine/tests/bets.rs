use chrono::{Duration, TimeZone, Utc};
use sea_orm::{Database, DatabaseConnection};

use engine::{Engine, EngineError, MoneyCents, NewBet, Outcome, validation};
use migration::MigratorTrait;
use uuid::Uuid;

async fn engine_with_db() -> Engine {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    Engine::builder().database(db).build().await.unwrap()
}

async fn connect_file_db(url: &str) -> DatabaseConnection {
    let db = Database::connect(url).await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    db
}

fn file_db_url() -> (String, std::path::PathBuf) {
    let root = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../target/test_dbs");
    std::fs::create_dir_all(&root).unwrap();

    let path = root.join(format!("engine_{}.db", Uuid::new_v4()));
    let url = format!("sqlite:{}?mode=rwc", path.display());
    (url, path)
}

fn cents(value: i64) -> MoneyCents {
    MoneyCents::new(value)
}

#[tokio::test]
async fn create_then_get_returns_same_fields() {
    let engine = engine_with_db().await;

    let created = engine
        .create_bet(NewBet::new("BookA", cents(10_000), Outcome::Won).description("final"))
        .await
        .unwrap();

    let fetched = engine.bet(created.id).await.unwrap().unwrap();
    assert_eq!(fetched, created);
    assert_eq!(fetched.bookmaker, "BookA");
    assert_eq!(fetched.amount, cents(10_000));
    assert_eq!(fetched.outcome, Outcome::Won);
    assert_eq!(fetched.description.as_deref(), Some("final"));
}

#[tokio::test]
async fn create_defaults_created_at_to_now() {
    let engine = engine_with_db().await;
    let before = Utc::now();

    let bet = engine
        .create_bet(NewBet::new("BookA", cents(500), Outcome::Pending))
        .await
        .unwrap();

    assert!(bet.created_at >= before - Duration::seconds(1));
    assert!(bet.created_at <= Utc::now() + Duration::seconds(1));
}

#[tokio::test]
async fn create_normalizes_text_fields() {
    let engine = engine_with_db().await;

    let bet = engine
        .create_bet(NewBet::new("  BookA  ", cents(100), Outcome::Lost).description("   "))
        .await
        .unwrap();

    assert_eq!(bet.bookmaker, "BookA");
    assert_eq!(bet.description, None);
}

#[tokio::test]
async fn create_rejects_invalid_fields_without_writing() {
    let engine = engine_with_db().await;

    let err = engine
        .create_bet(NewBet::new("BookA", MoneyCents::ZERO, Outcome::Won))
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::InvalidAmount(_)));

    let err = engine
        .create_bet(NewBet::new("BookA", cents(-100), Outcome::Won))
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::InvalidAmount(_)));

    let err = engine
        .create_bet(NewBet::new(" ", cents(100), Outcome::Won))
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::InvalidName(_)));

    let err = engine
        .create_bet(NewBet::new("BookA", cents(100), Outcome::Won).description("x".repeat(1001)))
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::InvalidText(_)));

    assert!(engine.list_bets().await.unwrap().is_empty());
}

#[tokio::test]
async fn oversized_wagers_are_rejected_and_totals_still_work() {
    let engine = engine_with_db().await;
    engine
        .create_bet(NewBet::new("BookA", validation::MAX_WAGER, Outcome::Won))
        .await
        .unwrap();

    let huge: MoneyCents = "90000000000000000".parse().unwrap();
    for _ in 0..2 {
        let err = engine
            .create_bet(NewBet::new("BookA", huge, Outcome::Won))
            .await
            .unwrap_err();
        assert!(matches!(err, EngineError::InvalidAmount(_)));
    }

    assert_eq!(engine.list_bets().await.unwrap().len(), 1);
    assert_eq!(engine.total_wagered().await.unwrap(), validation::MAX_WAGER);
    assert_eq!(engine.report().await.unwrap().total_won, validation::MAX_WAGER);
}

#[tokio::test]
async fn get_unknown_id_is_none() {
    let engine = engine_with_db().await;
    assert_eq!(engine.bet(42).await.unwrap(), None);
}

#[tokio::test]
async fn ids_increase_and_are_not_reused_after_delete() {
    let engine = engine_with_db().await;

    let first = engine
        .create_bet(NewBet::new("BookA", cents(100), Outcome::Won))
        .await
        .unwrap();
    let second = engine
        .create_bet(NewBet::new("BookB", cents(200), Outcome::Lost))
        .await
        .unwrap();
    assert!(second.id > first.id);

    assert!(engine.delete_bet(second.id).await.unwrap());

    let third = engine
        .create_bet(NewBet::new("BookC", cents(300), Outcome::Pending))
        .await
        .unwrap();
    assert!(third.id > second.id);
}

#[tokio::test]
async fn list_is_most_recent_first() {
    let engine = engine_with_db().await;
    let base = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();

    for (name, offset) in [("Middle", 1), ("Oldest", 0), ("Newest", 2)] {
        engine
            .create_bet(
                NewBet::new(name, cents(100), Outcome::Pending)
                    .created_at(base + Duration::hours(offset)),
            )
            .await
            .unwrap();
    }

    let bets = engine.list_bets().await.unwrap();
    let names: Vec<&str> = bets.iter().map(|b| b.bookmaker.as_str()).collect();
    assert_eq!(names, ["Newest", "Middle", "Oldest"]);
    assert!(bets.windows(2).all(|w| w[0].created_at >= w[1].created_at));
}

#[tokio::test]
async fn list_breaks_timestamp_ties_by_id() {
    let engine = engine_with_db().await;
    let at = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();

    let a = engine
        .create_bet(NewBet::new("A", cents(100), Outcome::Won).created_at(at))
        .await
        .unwrap();
    let b = engine
        .create_bet(NewBet::new("B", cents(100), Outcome::Won).created_at(at))
        .await
        .unwrap();

    let ids: Vec<i64> = engine
        .list_bets()
        .await
        .unwrap()
        .iter()
        .map(|bet| bet.id)
        .collect();
    assert_eq!(ids, [b.id, a.id]);
}

#[tokio::test]
async fn update_description_keeps_id_and_created_at() {
    let engine = engine_with_db().await;

    let created = engine
        .create_bet(NewBet::new("BookA", cents(2_500), Outcome::Pending).description("old"))
        .await
        .unwrap();

    let mut changed = created.clone();
    changed.description = Some("new".to_string());
    changed.outcome = Outcome::Won;
    assert!(engine.update_bet(&changed).await.unwrap());

    let fetched = engine.bet(created.id).await.unwrap().unwrap();
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.created_at, created.created_at);
    assert_eq!(fetched.description.as_deref(), Some("new"));
    assert_eq!(fetched.outcome, Outcome::Won);
}

#[tokio::test]
async fn update_unknown_id_leaves_store_unchanged() {
    let engine = engine_with_db().await;

    let existing = engine
        .create_bet(NewBet::new("BookA", cents(100), Outcome::Won))
        .await
        .unwrap();
    let before = engine.list_bets().await.unwrap();

    let mut ghost = existing.clone();
    ghost.id = existing.id + 100;
    ghost.bookmaker = "Ghost".to_string();
    assert!(!engine.update_bet(&ghost).await.unwrap());

    assert_eq!(engine.list_bets().await.unwrap(), before);
    assert_eq!(engine.bet(ghost.id).await.unwrap(), None);
}

#[tokio::test]
async fn update_rejects_invalid_amount() {
    let engine = engine_with_db().await;

    let created = engine
        .create_bet(NewBet::new("BookA", cents(100), Outcome::Won))
        .await
        .unwrap();

    let mut changed = created.clone();
    changed.amount = MoneyCents::ZERO;
    let err = engine.update_bet(&changed).await.unwrap_err();
    assert!(matches!(err, EngineError::InvalidAmount(_)));

    assert_eq!(engine.bet(created.id).await.unwrap(), Some(created));
}

#[tokio::test]
async fn delete_removes_and_reports_missing() {
    let engine = engine_with_db().await;

    let bet = engine
        .create_bet(NewBet::new("BookA", cents(100), Outcome::Won))
        .await
        .unwrap();

    assert!(!engine.delete_bet(bet.id + 1).await.unwrap());
    assert!(engine.delete_bet(bet.id).await.unwrap());
    assert_eq!(engine.bet(bet.id).await.unwrap(), None);
    assert!(!engine.delete_bet(bet.id).await.unwrap());
}

#[tokio::test]
async fn bets_survive_reopening_file_db() {
    let (url, path) = file_db_url();

    let engine = Engine::builder()
        .database(connect_file_db(&url).await)
        .build()
        .await
        .unwrap();
    let created = engine
        .create_bet(NewBet::new("BookA", cents(1_234), Outcome::Lost).description("derby"))
        .await
        .unwrap();
    engine.close().await.unwrap();

    let engine = Engine::builder()
        .database(connect_file_db(&url).await)
        .build()
        .await
        .unwrap();
    assert_eq!(engine.bet(created.id).await.unwrap(), Some(created));
    engine.close().await.unwrap();

    let _ = std::fs::remove_file(path);
}
