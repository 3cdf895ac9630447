use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MaintenanceRequest::Table)
                    .if_not_exists()
                    .col(pk_auto(MaintenanceRequest::Id))
                    .col(integer(MaintenanceRequest::PropertyId))
                    .col(integer(MaintenanceRequest::TenantId))
                    .col(integer(MaintenanceRequest::LandlordId))
                    .col(integer_null(MaintenanceRequest::BookingId))
                    .col(string(MaintenanceRequest::Title))
                    .col(string_null(MaintenanceRequest::TitleAr))
                    .col(text(MaintenanceRequest::Description))
                    .col(text_null(MaintenanceRequest::DescriptionAr))
                    .col(string(MaintenanceRequest::Category).default("other"))
                    .col(string(MaintenanceRequest::Priority).default("medium"))
                    .col(string(MaintenanceRequest::Status).default("submitted"))
                    .col(json(MaintenanceRequest::Photos))
                    .col(text_null(MaintenanceRequest::LandlordResponse))
                    .col(text_null(MaintenanceRequest::LandlordResponseAr))
                    .col(big_integer_null(MaintenanceRequest::EstimatedCost))
                    .col(timestamp_with_time_zone_null(MaintenanceRequest::ResolvedAt))
                    .col(
                        timestamp_with_time_zone(MaintenanceRequest::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(MaintenanceRequest::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MaintenanceRequest::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MaintenanceRequest {
    Table,
    Id,
    PropertyId,
    TenantId,
    LandlordId,
    BookingId,
    Title,
    TitleAr,
    Description,
    DescriptionAr,
    Category,
    Priority,
    Status,
    Photos,
    LandlordResponse,
    LandlordResponseAr,
    EstimatedCost,
    ResolvedAt,
    CreatedAt,
    UpdatedAt,
}
