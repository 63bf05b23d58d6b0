//! Creates the `bets` table.
//!
//! `id` is declared `INTEGER PRIMARY KEY AUTOINCREMENT` so SQLite never hands
//! out the id of a deleted row again. Amounts are stored as integer cents.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Bets::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Bets::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Bets::Bookmaker).string_len(200).not_null())
                    .col(ColumnDef::new(Bets::AmountMinor).big_integer().not_null())
                    .col(ColumnDef::new(Bets::Outcome).string_len(50).not_null())
                    .col(ColumnDef::new(Bets::Description).string_len(1000))
                    .col(ColumnDef::new(Bets::CreatedAt).timestamp().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-bets-created_at")
                    .table(Bets::Table)
                    .col(Bets::CreatedAt)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx-bets-created_at")
                    .table(Bets::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Bets::Table).to_owned())
            .await
    }
}

/// Learn more at https://docs.rs/sea-query#iden
#[derive(Iden)]
enum Bets {
    Table,
    Id,
    Bookmaker,
    AmountMinor,
    Outcome,
    Description,
    CreatedAt,
}
