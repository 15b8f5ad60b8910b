//! Data type and data point factories.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test data types.
pub struct DataTypeFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    display_name: String,
    is_active: bool,
}

impl<'a> DataTypeFactory<'a> {
    /// Creates a new DataTypeFactory named `"type_{id}"`.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("type_{}", id),
            display_name: format!("Type {}", id),
            is_active: true,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    pub async fn build(self) -> Result<entity::data_type::Model, DbErr> {
        let now = Utc::now();
        entity::data_type::ActiveModel {
            name: ActiveValue::Set(self.name),
            display_name: ActiveValue::Set(self.display_name),
            description: ActiveValue::Set(None),
            is_active: ActiveValue::Set(self.is_active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Factory for creating test data points under an existing data type.
pub struct DataPointFactory<'a> {
    db: &'a DatabaseConnection,
    data_type_id: i32,
    name: String,
    sort_order: i32,
    is_active: bool,
}

impl<'a> DataPointFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, data_type_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            data_type_id,
            name: format!("point_{}", id),
            sort_order: 0,
            is_active: true,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn sort_order(mut self, sort_order: i32) -> Self {
        self.sort_order = sort_order;
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    pub async fn build(self) -> Result<entity::data_point::Model, DbErr> {
        let now = Utc::now();
        entity::data_point::ActiveModel {
            data_type_id: ActiveValue::Set(self.data_type_id),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(None),
            sort_order: ActiveValue::Set(self.sort_order),
            is_active: ActiveValue::Set(self.is_active),
            extra_data: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active data type with default values.
pub async fn create_data_type(db: &DatabaseConnection) -> Result<entity::data_type::Model, DbErr> {
    DataTypeFactory::new(db).build().await
}

/// Creates an active data point with the given name under `data_type_id`.
pub async fn create_data_point(
    db: &DatabaseConnection,
    data_type_id: i32,
    name: &str,
    sort_order: i32,
) -> Result<entity::data_point::Model, DbErr> {
    DataPointFactory::new(db, data_type_id)
        .name(name)
        .sort_order(sort_order)
        .build()
        .await
}
