use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Review::Table)
                    .if_not_exists()
                    .col(pk_auto(Review::Id))
                    .col(integer(Review::PropertyId))
                    .col(integer(Review::TenantId))
                    .col(integer_null(Review::BookingId))
                    .col(integer(Review::Rating))
                    .col(text_null(Review::Comment))
                    .col(text_null(Review::CommentAr))
                    .col(boolean(Review::IsPublished).default(true))
                    .col(
                        timestamp_with_time_zone(Review::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_review_property_id")
                    .table(Review::Table)
                    .col(Review::PropertyId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Review::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Review {
    Table,
    Id,
    PropertyId,
    TenantId,
    BookingId,
    Rating,
    Comment,
    CommentAr,
    IsPublished,
    CreatedAt,
}
