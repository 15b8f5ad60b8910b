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
                    .table(ProviderAvailability::Table)
                    .if_not_exists()
                    .col(pk_auto(ProviderAvailability::Id))
                    .col(integer(ProviderAvailability::ProviderId))
                    .col(integer(ProviderAvailability::DayOfWeek))
                    .col(string(ProviderAvailability::StartTime))
                    .col(string(ProviderAvailability::EndTime))
                    .col(boolean(ProviderAvailability::IsAvailable).default(true))
                    .col(integer(ProviderAvailability::MaxAppointments).default(8))
                    .col(string_null(ProviderAvailability::Location))
                    .col(
                        timestamp_with_time_zone(ProviderAvailability::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(ProviderAvailability::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_provider_availability_provider_id")
                            .from(ProviderAvailability::Table, ProviderAvailability::ProviderId)
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
            .drop_table(Table::drop().table(ProviderAvailability::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ProviderAvailability {
    #[sea_orm(iden = "provider_availability")]
    Table,
    Id,
    ProviderId,
    DayOfWeek,
    StartTime,
    EndTime,
    IsAvailable,
    MaxAppointments,
    Location,
    CreatedAt,
    UpdatedAt,
}
