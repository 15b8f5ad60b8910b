use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "data_points")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub data_type_id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub sort_order: i32,
    pub is_active: bool,
    pub extra_data: Option<Json>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::data_type::Entity",
        from = "Column::DataTypeId",
        to = "super::data_type::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    DataType,
}

impl Related<super::data_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DataType.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
