use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DataType::Table)
                    .if_not_exists()
                    .col(pk_auto(DataType::Id))
                    .col(string_uniq(DataType::Name))
                    .col(string(DataType::DisplayName))
                    .col(text_null(DataType::Description))
                    .col(boolean(DataType::IsActive).default(true))
                    .col(timestamp_with_time_zone(DataType::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp_with_time_zone(DataType::UpdatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DataType::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum DataType {
    #[sea_orm(iden = "data_types")]
    Table,
    Id,
    Name,
    DisplayName,
    Description,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
