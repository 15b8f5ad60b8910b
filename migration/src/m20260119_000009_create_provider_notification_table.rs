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
                    .table(ProviderNotification::Table)
                    .if_not_exists()
                    .col(pk_auto(ProviderNotification::Id))
                    .col(integer(ProviderNotification::ProviderId))
                    .col(string(ProviderNotification::NotificationType))
                    .col(string(ProviderNotification::Title))
                    .col(text(ProviderNotification::Message))
                    .col(string(ProviderNotification::Priority).default("medium"))
                    .col(boolean(ProviderNotification::ActionRequired).default(false))
                    .col(boolean(ProviderNotification::IsRead).default(false))
                    .col(timestamp_with_time_zone_null(ProviderNotification::ReadAt))
                    .col(integer_null(ProviderNotification::RelatedReferralId))
                    .col(integer_null(ProviderNotification::SentByUserId))
                    .col(
                        timestamp_with_time_zone(ProviderNotification::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(ProviderNotification::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_provider_notification_provider_id")
                            .from(ProviderNotification::Table, ProviderNotification::ProviderId)
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
            .drop_table(Table::drop().table(ProviderNotification::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ProviderNotification {
    #[sea_orm(iden = "provider_notifications")]
    Table,
    Id,
    ProviderId,
    NotificationType,
    Title,
    Message,
    Priority,
    ActionRequired,
    IsRead,
    ReadAt,
    RelatedReferralId,
    SentByUserId,
    CreatedAt,
    UpdatedAt,
}
