use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(District::Table)
                    .if_not_exists()
                    .col(pk_auto(District::Id))
                    .col(string(District::City))
                    .col(string(District::CityAr))
                    .col(string(District::NameEn))
                    .col(string(District::NameAr))
                    .col(double_null(District::Latitude))
                    .col(double_null(District::Longitude))
                    .col(boolean(District::IsActive).default(true))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(District::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum District {
    Table,
    Id,
    City,
    CityAr,
    NameEn,
    NameAr,
    Latitude,
    Longitude,
    IsActive,
}
