use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PerformanceReview::Table)
                    .if_not_exists()
                    .col(pk_auto(PerformanceReview::Id))
                    .col(integer(PerformanceReview::ProviderId))
                    .col(integer(PerformanceReview::ReviewedByUserId))
                    .col(integer(PerformanceReview::Rating))
                    .col(text_null(PerformanceReview::Comments))
                    .col(text_null(PerformanceReview::Goals))
                    .col(json(PerformanceReview::MetricsSnapshot))
                    .col(
                        timestamp_with_time_zone(PerformanceReview::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_performance_review_provider_id")
                            .from(PerformanceReview::Table, PerformanceReview::ProviderId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PerformanceReview::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PerformanceReview {
    #[sea_orm(iden = "performance_reviews")]
    Table,
    Id,
    ProviderId,
    ReviewedByUserId,
    Rating,
    Comments,
    Goals,
    MetricsSnapshot,
    CreatedAt,
}
