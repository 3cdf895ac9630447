use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PropertyAvailability::Table)
                    .if_not_exists()
                    .col(pk_auto(PropertyAvailability::Id))
                    .col(integer(PropertyAvailability::PropertyId))
                    .col(timestamp_with_time_zone(PropertyAvailability::StartDate))
                    .col(timestamp_with_time_zone(PropertyAvailability::EndDate))
                    .col(boolean(PropertyAvailability::IsBlocked).default(false))
                    .col(big_integer_null(PropertyAvailability::PriceOverride))
                    .col(
                        timestamp_with_time_zone(PropertyAvailability::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_property_availability_property_id")
                    .table(PropertyAvailability::Table)
                    .col(PropertyAvailability::PropertyId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PropertyAvailability::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PropertyAvailability {
    Table,
    Id,
    PropertyId,
    StartDate,
    EndDate,
    IsBlocked,
    PriceOverride,
    CreatedAt,
}
