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
                    .col(string_uniq(User::Email))
                    .col(string(User::HashedPassword))
                    .col(string(User::FirstName))
                    .col(string(User::LastName))
                    .col(string_null(User::PhoneNumber))
                    .col(string(User::Role).default("participant"))
                    .col(boolean(User::IsActive).default(true))
                    .col(boolean(User::IsVerified).default(false))
                    .col(string_null(User::ServiceType))
                    .col(string_null(User::ProviderLicense))
                    .col(string_null(User::ProviderAgency))
                    .col(text_null(User::ProviderBio))
                    .col(timestamp_with_time_zone(User::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp_with_time_zone(User::UpdatedAt).default(Expr::current_timestamp()))
                    .col(timestamp_with_time_zone_null(User::LastLogin))
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
    #[sea_orm(iden = "users")]
    Table,
    Id,
    Email,
    HashedPassword,
    FirstName,
    LastName,
    PhoneNumber,
    Role,
    IsActive,
    IsVerified,
    ServiceType,
    ProviderLicense,
    ProviderAgency,
    ProviderBio,
    CreatedAt,
    UpdatedAt,
    LastLogin,
}
