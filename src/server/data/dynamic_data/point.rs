use chrono::Utc;
use sea_orm::{
    sea_query::LikeExpr, ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait,
    DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::dynamic_data::{
    CreateDataPointParams, DataPoint, UpdateDataPointParams,
};

/// Repository providing database operations for data points.
pub struct DataPointRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DataPointRepository<'a, C> {
    /// Creates a new DataPointRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to a database connection or open transaction
    ///
    /// # Returns
    /// - `DataPointRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new data point.
    ///
    /// # Returns
    /// - `Ok(DataPoint)` - The created data point
    /// - `Err(DbErr)` - Database error, including the (data_type_id, name) unique index
    pub async fn create(&self, params: CreateDataPointParams) -> Result<DataPoint, DbErr> {
        let now = Utc::now();

        let entity = entity::data_point::ActiveModel {
            data_type_id: ActiveValue::Set(params.data_type_id),
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            sort_order: ActiveValue::Set(params.sort_order),
            is_active: ActiveValue::Set(params.is_active),
            extra_data: ActiveValue::Set(params.extra_data),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(DataPoint::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<DataPoint>, DbErr> {
        let entity = entity::prelude::DataPoint::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(DataPoint::from_entity))
    }

    /// Finds a point by name within one data type.
    pub async fn find_by_type_and_name(
        &self,
        data_type_id: i32,
        name: &str,
    ) -> Result<Option<DataPoint>, DbErr> {
        let entity = entity::prelude::DataPoint::find()
            .filter(entity::data_point::Column::DataTypeId.eq(data_type_id))
            .filter(entity::data_point::Column::Name.eq(name))
            .one(self.db)
            .await?;

        Ok(entity.map(DataPoint::from_entity))
    }

    /// Gets the points of a data type ordered by sort order, then name.
    pub async fn get_by_type(
        &self,
        data_type_id: i32,
        active_only: bool,
    ) -> Result<Vec<DataPoint>, DbErr> {
        let mut query = entity::prelude::DataPoint::find()
            .filter(entity::data_point::Column::DataTypeId.eq(data_type_id));

        if active_only {
            query = query.filter(entity::data_point::Column::IsActive.eq(true));
        }

        let entities = query
            .order_by_asc(entity::data_point::Column::SortOrder)
            .order_by_asc(entity::data_point::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(DataPoint::from_entity).collect())
    }

    /// Searches point names and descriptions for `query`.
    ///
    /// Matching uses SQL `LIKE`, which SQLite evaluates case-insensitively for ASCII.
    /// `%` and `_` in the query match themselves, not any text.
    ///
    /// # Arguments
    /// - `query` - Substring to look for
    /// - `data_type_id` - Restrict results to one data type
    pub async fn search(
        &self,
        query: &str,
        data_type_id: Option<i32>,
    ) -> Result<Vec<DataPoint>, DbErr> {
        let pattern = contains_pattern(query);
        let mut select = entity::prelude::DataPoint::find().filter(
            Condition::any()
                .add(entity::data_point::Column::Name.like(pattern.clone()))
                .add(entity::data_point::Column::Description.like(pattern)),
        );

        if let Some(data_type_id) = data_type_id {
            select = select.filter(entity::data_point::Column::DataTypeId.eq(data_type_id));
        }

        let entities = select
            .order_by_asc(entity::data_point::Column::SortOrder)
            .order_by_asc(entity::data_point::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(DataPoint::from_entity).collect())
    }

    /// Applies a partial update and bumps `updated_at`.
    ///
    /// # Returns
    /// - `Ok(Some(DataPoint))` - Updated data point
    /// - `Ok(None)` - No data point with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        id: i32,
        params: UpdateDataPointParams,
    ) -> Result<Option<DataPoint>, DbErr> {
        let Some(entity) = entity::prelude::DataPoint::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::data_point::ActiveModel = entity.into();
        if let Some(name) = params.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(description) = params.description {
            active.description = ActiveValue::Set(Some(description));
        }
        if let Some(sort_order) = params.sort_order {
            active.sort_order = ActiveValue::Set(sort_order);
        }
        if let Some(is_active) = params.is_active {
            active.is_active = ActiveValue::Set(is_active);
        }
        if let Some(extra_data) = params.extra_data {
            active.extra_data = ActiveValue::Set(Some(extra_data));
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let updated = active.update(self.db).await?;

        Ok(Some(DataPoint::from_entity(updated)))
    }

    /// Deletes a data point.
    ///
    /// # Returns
    /// - `Ok(true)` - Data point deleted
    /// - `Ok(false)` - No data point with that id
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::DataPoint::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes every point of a data type.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of points removed
    pub async fn delete_by_type(&self, data_type_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::DataPoint::delete_many()
            .filter(entity::data_point::Column::DataTypeId.eq(data_type_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes every data point.
    pub async fn delete_all(&self) -> Result<u64, DbErr> {
        let result = entity::prelude::DataPoint::delete_many()
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::DataPoint::find().count(self.db).await
    }

    pub async fn count_by_type(&self, data_type_id: i32) -> Result<u64, DbErr> {
        entity::prelude::DataPoint::find()
            .filter(entity::data_point::Column::DataTypeId.eq(data_type_id))
            .count(self.db)
            .await
    }
}

/// `LIKE` pattern matching `query` anywhere, with its wildcards escaped.
fn contains_pattern(query: &str) -> LikeExpr {
    let mut escaped = String::with_capacity(query.len() + 2);
    escaped.push('%');
    for c in query.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');

    LikeExpr::new(escaped).escape('\\')
}
