use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000001_create_user_table::User, m20260105_000002_create_referral_table::Referral,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Appointment::Table)
                    .if_not_exists()
                    .col(pk_auto(Appointment::Id))
                    .col(integer(Appointment::ReferralId))
                    .col(integer(Appointment::ProviderId))
                    .col(timestamp_with_time_zone(Appointment::AppointmentDate))
                    .col(integer(Appointment::DurationMinutes).default(60))
                    .col(string(Appointment::Status).default("scheduled"))
                    .col(string(Appointment::ServiceType))
                    .col(string_null(Appointment::Location))
                    .col(text_null(Appointment::AppointmentNotes))
                    .col(text_null(Appointment::CancellationReason))
                    .col(timestamp_with_time_zone_null(Appointment::CompletedAt))
                    .col(timestamp_with_time_zone(Appointment::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp_with_time_zone(Appointment::UpdatedAt).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_appointment_referral_id")
                            .from(Appointment::Table, Appointment::ReferralId)
                            .to(Referral::Table, Referral::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_appointment_provider_id")
                            .from(Appointment::Table, Appointment::ProviderId)
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
            .drop_table(Table::drop().table(Appointment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Appointment {
    #[sea_orm(iden = "appointments")]
    Table,
    Id,
    ReferralId,
    ProviderId,
    AppointmentDate,
    DurationMinutes,
    Status,
    ServiceType,
    Location,
    AppointmentNotes,
    CancellationReason,
    CompletedAt,
    CreatedAt,
    UpdatedAt,
}
