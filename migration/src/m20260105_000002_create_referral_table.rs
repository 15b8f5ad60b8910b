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
                    .table(Referral::Table)
                    .if_not_exists()
                    .col(pk_auto(Referral::Id))
                    .col(string(Referral::FirstName))
                    .col(string(Referral::LastName))
                    .col(string(Referral::DateOfBirth))
                    .col(string(Referral::PhoneNumber))
                    .col(string_null(Referral::EmailAddress))
                    .col(string(Referral::StreetAddress))
                    .col(string(Referral::City))
                    .col(string(Referral::State))
                    .col(string(Referral::Postcode))
                    .col(string(Referral::PreferredContact).default("phone"))
                    .col(string_null(Referral::RepFirstName))
                    .col(string_null(Referral::RepLastName))
                    .col(string_null(Referral::RepPhoneNumber))
                    .col(string_null(Referral::RepEmailAddress))
                    .col(string_null(Referral::RepStreetAddress))
                    .col(string_null(Referral::RepCity))
                    .col(string_null(Referral::RepState))
                    .col(string_null(Referral::RepPostcode))
                    .col(string_null(Referral::RepRelationship))
                    .col(string(Referral::PlanType))
                    .col(string_null(Referral::PlanManagerName))
                    .col(string_null(Referral::PlanManagerAgency))
                    .col(string_null(Referral::NdisNumber))
                    .col(string_null(Referral::AvailableFunding))
                    .col(string(Referral::PlanStartDate))
                    .col(string(Referral::PlanReviewDate))
                    .col(text(Referral::ClientGoals))
                    .col(string(Referral::ReferrerFirstName))
                    .col(string(Referral::ReferrerLastName))
                    .col(string_null(Referral::ReferrerAgency))
                    .col(string_null(Referral::ReferrerRole))
                    .col(string(Referral::ReferrerEmail))
                    .col(string(Referral::ReferrerPhone))
                    .col(string(Referral::ReferredFor))
                    .col(text(Referral::ReasonForReferral))
                    .col(boolean(Referral::ConsentCheckbox))
                    .col(string_null(Referral::DisabilityType))
                    .col(string_null(Referral::UrgencyLevel))
                    .col(string(Referral::Status).default("new"))
                    .col(string(Referral::Priority).default("medium"))
                    .col(text_null(Referral::Notes))
                    .col(integer_null(Referral::AssignedProviderId))
                    .col(timestamp_with_time_zone_null(Referral::AcceptedAt))
                    .col(json(Referral::RawSubmission))
                    .col(json(Referral::FormMetadata))
                    .col(timestamp_with_time_zone(Referral::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp_with_time_zone(Referral::UpdatedAt).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_referral_assigned_provider_id")
                            .from(Referral::Table, Referral::AssignedProviderId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_referral_status")
                    .table(Referral::Table)
                    .col(Referral::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_referral_assigned_provider_id")
                    .table(Referral::Table)
                    .col(Referral::AssignedProviderId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Referral::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Referral {
    #[sea_orm(iden = "referrals")]
    Table,
    Id,
    FirstName,
    LastName,
    DateOfBirth,
    PhoneNumber,
    EmailAddress,
    StreetAddress,
    City,
    State,
    Postcode,
    PreferredContact,
    RepFirstName,
    RepLastName,
    RepPhoneNumber,
    RepEmailAddress,
    RepStreetAddress,
    RepCity,
    RepState,
    RepPostcode,
    RepRelationship,
    PlanType,
    PlanManagerName,
    PlanManagerAgency,
    NdisNumber,
    AvailableFunding,
    PlanStartDate,
    PlanReviewDate,
    ClientGoals,
    ReferrerFirstName,
    ReferrerLastName,
    ReferrerAgency,
    ReferrerRole,
    ReferrerEmail,
    ReferrerPhone,
    ReferredFor,
    ReasonForReferral,
    ConsentCheckbox,
    DisabilityType,
    UrgencyLevel,
    Status,
    Priority,
    Notes,
    AssignedProviderId,
    AcceptedAt,
    RawSubmission,
    FormMetadata,
    CreatedAt,
    UpdatedAt,
}
