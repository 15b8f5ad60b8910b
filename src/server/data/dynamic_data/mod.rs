//! Reference data repositories.
//!
//! This module provides `DataTypeRepository` and `DataPointRepository` for the
//! admin-configurable lookup lists. Both work with any `ConnectionTrait` so the reset
//! and bulk operations can share one transaction.

pub mod point;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::dynamic_data::{CreateDataTypeParams, DataType, UpdateDataTypeParams};

/// Repository providing database operations for data types.
pub struct DataTypeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DataTypeRepository<'a, C> {
    /// Creates a new DataTypeRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to a database connection or open transaction
    ///
    /// # Returns
    /// - `DataTypeRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new data type.
    ///
    /// # Returns
    /// - `Ok(DataType)` - The created data type
    /// - `Err(DbErr)` - Database error, including unique violations on name
    pub async fn create(&self, params: CreateDataTypeParams) -> Result<DataType, DbErr> {
        let now = Utc::now();

        let entity = entity::data_type::ActiveModel {
            name: ActiveValue::Set(params.name),
            display_name: ActiveValue::Set(params.display_name),
            description: ActiveValue::Set(params.description),
            is_active: ActiveValue::Set(params.is_active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(DataType::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<DataType>, DbErr> {
        let entity = entity::prelude::DataType::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(DataType::from_entity))
    }

    /// Finds a data type by its lowercase name.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<DataType>, DbErr> {
        let entity = entity::prelude::DataType::find()
            .filter(entity::data_type::Column::Name.eq(name))
            .one(self.db)
            .await?;

        Ok(entity.map(DataType::from_entity))
    }

    /// Gets data types ordered by display name.
    ///
    /// # Arguments
    /// - `active_only` - Only return active data types
    pub async fn get_all(&self, active_only: bool) -> Result<Vec<DataType>, DbErr> {
        let mut query = entity::prelude::DataType::find();

        if active_only {
            query = query.filter(entity::data_type::Column::IsActive.eq(true));
        }

        let entities = query
            .order_by_asc(entity::data_type::Column::DisplayName)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(DataType::from_entity).collect())
    }

    /// Applies a partial update and bumps `updated_at`.
    ///
    /// # Returns
    /// - `Ok(Some(DataType))` - Updated data type
    /// - `Ok(None)` - No data type with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        id: i32,
        params: UpdateDataTypeParams,
    ) -> Result<Option<DataType>, DbErr> {
        let Some(entity) = entity::prelude::DataType::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::data_type::ActiveModel = entity.into();
        if let Some(name) = params.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(display_name) = params.display_name {
            active.display_name = ActiveValue::Set(display_name);
        }
        if let Some(description) = params.description {
            active.description = ActiveValue::Set(Some(description));
        }
        if let Some(is_active) = params.is_active {
            active.is_active = ActiveValue::Set(is_active);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let updated = active.update(self.db).await?;

        Ok(Some(DataType::from_entity(updated)))
    }

    /// Deletes a data type. Its points are removed by the cascading foreign key.
    ///
    /// # Returns
    /// - `Ok(true)` - Data type deleted
    /// - `Ok(false)` - No data type with that id
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::DataType::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes every data type.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of data types removed
    pub async fn delete_all(&self) -> Result<u64, DbErr> {
        let result = entity::prelude::DataType::delete_many()
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::DataType::find().count(self.db).await
    }
}

#[cfg(test)]
mod test;
