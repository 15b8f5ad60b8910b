use sea_orm_migration::{prelude::*, schema::*};

use super::m20260112_000007_create_appointment_table::Appointment;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SessionNote::Table)
                    .if_not_exists()
                    .col(pk_auto(SessionNote::Id))
                    .col(integer(SessionNote::AppointmentId))
                    .col(integer(SessionNote::ReferralId))
                    .col(integer(SessionNote::ProviderId))
                    .col(timestamp_with_time_zone(SessionNote::SessionDate))
                    .col(integer(SessionNote::DurationMinutes))
                    .col(string_null(SessionNote::SessionType))
                    .col(text(SessionNote::ParticipantResponse))
                    .col(text(SessionNote::ProgressNotes))
                    .col(json_null(SessionNote::GoalsAddressed))
                    .col(text_null(SessionNote::HomeworkAssigned))
                    .col(text_null(SessionNote::NextSessionFocus))
                    .col(string(SessionNote::RiskLevel).default("low"))
                    .col(timestamp_with_time_zone(SessionNote::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp_with_time_zone(SessionNote::UpdatedAt).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_session_note_appointment_id")
                            .from(SessionNote::Table, SessionNote::AppointmentId)
                            .to(Appointment::Table, Appointment::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SessionNote::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SessionNote {
    #[sea_orm(iden = "session_notes")]
    Table,
    Id,
    AppointmentId,
    ReferralId,
    ProviderId,
    SessionDate,
    DurationMinutes,
    SessionType,
    ParticipantResponse,
    ProgressNotes,
    GoalsAddressed,
    HomeworkAssigned,
    NextSessionFocus,
    RiskLevel,
    CreatedAt,
    UpdatedAt,
}
