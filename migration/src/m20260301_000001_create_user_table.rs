use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(pk_auto(User::Id))
                    .col(string_uniq(User::OpenId))
                    .col(string_null(User::Name))
                    .col(string_null(User::NameAr))
                    .col(string_null(User::Email))
                    .col(string_null(User::Phone))
                    .col(string(User::Role).default("user"))
                    .col(string_null(User::AvatarUrl))
                    .col(text_null(User::Bio))
                    .col(text_null(User::BioAr))
                    .col(string(User::PreferredLang).default("ar"))
                    .col(boolean(User::IsVerified).default(false))
                    .col(
                        timestamp_with_time_zone(User::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(User::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(User::LastSignedIn)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum User {
    Table,
    Id,
    OpenId,
    Name,
    NameAr,
    Email,
    Phone,
    Role,
    AvatarUrl,
    Bio,
    BioAr,
    PreferredLang,
    IsVerified,
    CreatedAt,
    UpdatedAt,
    LastSignedIn,
}
