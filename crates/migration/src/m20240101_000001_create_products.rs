//! Create `products` table.
//!
//! Single-entity schema: auto-increment integer key, bounded text columns,
//! creation timestamp defaulted by the database.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Products::Table)
                    .if_not_exists()
                    .col(integer(Products::Id).primary_key().auto_increment())
                    .col(string_len(Products::Name, 100).not_null())
                    .col(double(Products::Price).not_null())
                    .col(
                        ColumnDef::new(Products::Description)
                            .string_len(300)
                            .null(),
                    )
                    .col(
                        timestamp_with_time_zone(Products::CreatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Products::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Products { Table, Id, Name, Price, Description, CreatedAt }
