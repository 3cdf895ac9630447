use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Booking::Table)
                    .if_not_exists()
                    .col(pk_auto(Booking::Id))
                    .col(integer(Booking::PropertyId))
                    .col(integer(Booking::TenantId))
                    .col(integer(Booking::LandlordId))
                    .col(string(Booking::Status).default("pending"))
                    .col(timestamp_with_time_zone(Booking::MoveInDate))
                    .col(timestamp_with_time_zone(Booking::MoveOutDate))
                    .col(integer(Booking::DurationMonths))
                    .col(big_integer(Booking::MonthlyRent))
                    .col(big_integer_null(Booking::SecurityDeposit))
                    .col(big_integer(Booking::TotalAmount))
                    .col(text_null(Booking::TenantNotes))
                    .col(text_null(Booking::LandlordNotes))
                    .col(text_null(Booking::RejectionReason))
                    .col(
                        timestamp_with_time_zone(Booking::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Booking::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_booking_property_status")
                    .table(Booking::Table)
                    .col(Booking::PropertyId)
                    .col(Booking::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Booking::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Booking {
    Table,
    Id,
    PropertyId,
    TenantId,
    LandlordId,
    Status,
    MoveInDate,
    MoveOutDate,
    DurationMonths,
    MonthlyRent,
    SecurityDeposit,
    TotalAmount,
    TenantNotes,
    LandlordNotes,
    RejectionReason,
    CreatedAt,
    UpdatedAt,
}
