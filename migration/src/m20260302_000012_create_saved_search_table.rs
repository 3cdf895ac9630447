use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SavedSearch::Table)
                    .if_not_exists()
                    .col(pk_auto(SavedSearch::Id))
                    .col(integer(SavedSearch::UserId))
                    .col(string_null(SavedSearch::Name))
                    .col(json(SavedSearch::Filters))
                    .col(boolean(SavedSearch::AlertEnabled).default(false))
                    .col(
                        timestamp_with_time_zone(SavedSearch::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SavedSearch::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SavedSearch {
    Table,
    Id,
    UserId,
    Name,
    Filters,
    AlertEnabled,
    CreatedAt,
}
