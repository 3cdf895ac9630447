use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Payment::Table)
                    .if_not_exists()
                    .col(pk_auto(Payment::Id))
                    .col(integer(Payment::BookingId))
                    .col(integer(Payment::TenantId))
                    .col(integer(Payment::LandlordId))
                    .col(string(Payment::Kind))
                    .col(big_integer(Payment::Amount))
                    .col(string(Payment::Currency).default("SAR"))
                    .col(string(Payment::Status).default("pending"))
                    .col(text_null(Payment::Description))
                    .col(text_null(Payment::DescriptionAr))
                    .col(timestamp_with_time_zone_null(Payment::PaidAt))
                    .col(
                        timestamp_with_time_zone(Payment::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Payment::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_payment_booking_id")
                    .table(Payment::Table)
                    .col(Payment::BookingId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Payment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Payment {
    Table,
    Id,
    BookingId,
    TenantId,
    LandlordId,
    Kind,
    Amount,
    Currency,
    Status,
    Description,
    DescriptionAr,
    PaidAt,
    CreatedAt,
    UpdatedAt,
}
