use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000003_create_data_type_table::DataType;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DataPoint::Table)
                    .if_not_exists()
                    .col(pk_auto(DataPoint::Id))
                    .col(integer(DataPoint::DataTypeId))
                    .col(string(DataPoint::Name))
                    .col(text_null(DataPoint::Description))
                    .col(integer(DataPoint::SortOrder).default(0))
                    .col(boolean(DataPoint::IsActive).default(true))
                    .col(json_null(DataPoint::ExtraData))
                    .col(timestamp_with_time_zone(DataPoint::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp_with_time_zone(DataPoint::UpdatedAt).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_data_point_data_type_id")
                            .from(DataPoint::Table, DataPoint::DataTypeId)
                            .to(DataType::Table, DataType::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_data_point_type_name")
                    .table(DataPoint::Table)
                    .col(DataPoint::DataTypeId)
                    .col(DataPoint::Name)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DataPoint::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum DataPoint {
    #[sea_orm(iden = "data_points")]
    Table,
    Id,
    DataTypeId,
    Name,
    Description,
    SortOrder,
    IsActive,
    ExtraData,
    CreatedAt,
    UpdatedAt,
}
