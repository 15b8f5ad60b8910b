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
                    .table(EmailLog::Table)
                    .if_not_exists()
                    .col(pk_auto(EmailLog::Id))
                    .col(integer_null(EmailLog::ReferralId))
                    .col(integer_null(EmailLog::UserId))
                    .col(string(EmailLog::EmailType))
                    .col(string(EmailLog::ToAddress))
                    .col(string(EmailLog::Subject))
                    .col(text_null(EmailLog::Body))
                    .col(string(EmailLog::Status).default("queued"))
                    .col(text_null(EmailLog::Error))
                    .col(timestamp_with_time_zone(EmailLog::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp_with_time_zone(EmailLog::UpdatedAt).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_email_log_referral_id")
                            .from(EmailLog::Table, EmailLog::ReferralId)
                            .to(Referral::Table, Referral::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_email_log_user_id")
                            .from(EmailLog::Table, EmailLog::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EmailLog::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum EmailLog {
    #[sea_orm(iden = "email_logs")]
    Table,
    Id,
    ReferralId,
    UserId,
    EmailType,
    ToAddress,
    Subject,
    Body,
    Status,
    Error,
    CreatedAt,
    UpdatedAt,
}
