use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Property::Table)
                    .if_not_exists()
                    .col(pk_auto(Property::Id))
                    .col(integer(Property::LandlordId))
                    .col(string(Property::TitleEn))
                    .col(string(Property::TitleAr))
                    .col(text_null(Property::DescriptionEn))
                    .col(text_null(Property::DescriptionAr))
                    .col(string(Property::PropertyType))
                    .col(string(Property::Status).default("draft"))
                    .col(string_null(Property::City))
                    .col(string_null(Property::CityAr))
                    .col(string_null(Property::District))
                    .col(string_null(Property::DistrictAr))
                    .col(text_null(Property::Address))
                    .col(text_null(Property::AddressAr))
                    .col(double_null(Property::Latitude))
                    .col(double_null(Property::Longitude))
                    .col(integer(Property::Bedrooms).default(1))
                    .col(integer(Property::Bathrooms).default(1))
                    .col(integer_null(Property::SizeSqm))
                    .col(integer_null(Property::Floor))
                    .col(string(Property::FurnishedLevel).default("unfurnished"))
                    .col(big_integer(Property::MonthlyRent))
                    .col(big_integer_null(Property::SecurityDeposit))
                    .col(json(Property::Amenities))
                    .col(json(Property::Photos))
                    .col(text_null(Property::HouseRules))
                    .col(text_null(Property::HouseRulesAr))
                    .col(integer(Property::MinStayMonths).default(1))
                    .col(integer(Property::MaxStayMonths).default(12))
                    .col(boolean(Property::InstantBook).default(false))
                    .col(boolean(Property::IsVerified).default(false))
                    .col(boolean(Property::IsFeatured).default(false))
                    .col(integer(Property::ViewCount).default(0))
                    .col(
                        timestamp_with_time_zone(Property::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Property::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_property_search")
                    .table(Property::Table)
                    .col(Property::Status)
                    .col(Property::City)
                    .col(Property::PropertyType)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_property_landlord_id")
                    .table(Property::Table)
                    .col(Property::LandlordId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Property::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Property {
    Table,
    Id,
    LandlordId,
    TitleEn,
    TitleAr,
    DescriptionEn,
    DescriptionAr,
    PropertyType,
    Status,
    City,
    CityAr,
    District,
    DistrictAr,
    Address,
    AddressAr,
    Latitude,
    Longitude,
    Bedrooms,
    Bathrooms,
    SizeSqm,
    Floor,
    FurnishedLevel,
    MonthlyRent,
    SecurityDeposit,
    Amenities,
    Photos,
    HouseRules,
    HouseRulesAr,
    MinStayMonths,
    MaxStayMonths,
    InstantBook,
    IsVerified,
    IsFeatured,
    ViewCount,
    CreatedAt,
    UpdatedAt,
}
