//! Admin-configurable reference data.
//!
//! Data types are named lookup lists and data points are their entries. Names are
//! lowercase and unique: type names globally, point names within their type. Multi-step
//! writes (bulk creation, type deletion, reset) run in a single transaction.

pub mod defaults;

use std::collections::BTreeMap;

use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, TransactionTrait};

use crate::{
    model::dynamic_data::{
        BulkCreateDataPointsDto, CreateDataPointDto, CreateDataTypeDto, DataCountsDto,
        DataTypeStatusDto, DeleteDataTypeResultDto, DynamicDataStatusDto, ResetDataResultDto,
        UpdateDataPointDto, UpdateDataTypeDto,
    },
    server::{
        data::dynamic_data::{point::DataPointRepository, DataTypeRepository},
        error::AppError,
        model::dynamic_data::{
            CreateDataPointParams, CreateDataTypeParams, DataPoint, DataType,
            UpdateDataPointParams, UpdateDataTypeParams,
        },
        service::dynamic_data::defaults::DEFAULT_DATA_TYPES,
    },
};

pub struct DynamicDataService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DynamicDataService<'a> {
    /// Creates a new DynamicDataService instance.
    ///
    /// # Arguments
    /// - `db` - Database connection
    ///
    /// # Returns
    /// - `DynamicDataService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets data types ordered by display name.
    pub async fn get_data_types(&self, active_only: bool) -> Result<Vec<DataType>, AppError> {
        Ok(DataTypeRepository::new(self.db).get_all(active_only).await?)
    }

    /// Creates a data type.
    ///
    /// # Returns
    /// - `Ok(DataType)` - Created data type
    /// - `Err(AppError::Conflict)` - A data type with that name exists
    pub async fn create_data_type(&self, dto: CreateDataTypeDto) -> Result<DataType, AppError> {
        let params = CreateDataTypeParams::from_dto(dto);
        let repo = DataTypeRepository::new(self.db);

        if params.name.is_empty() {
            return Err(AppError::BadRequest("Data type name is required".to_string()));
        }
        if repo.find_by_name(&params.name).await?.is_some() {
            return Err(data_type_conflict());
        }

        let data_type = repo.create(params).await?;

        tracing::info!("Created data type {}", data_type.name);

        Ok(data_type)
    }

    /// Gets a data type by name together with all of its points.
    ///
    /// # Returns
    /// - `Ok((DataType, Vec<DataPoint>))` - Data type and points in display order
    /// - `Err(AppError::NotFound)` - No data type with that name
    pub async fn get_data_type_with_points(
        &self,
        name: &str,
    ) -> Result<(DataType, Vec<DataPoint>), AppError> {
        let data_type = DataTypeRepository::new(self.db)
            .find_by_name(&name.to_lowercase())
            .await?
            .ok_or_else(data_type_not_found)?;

        let points = DataPointRepository::new(self.db)
            .get_by_type(data_type.id, false)
            .await?;

        Ok((data_type, points))
    }

    /// Applies a partial update to a data type.
    ///
    /// # Returns
    /// - `Ok(DataType)` - Updated data type
    /// - `Err(AppError::NotFound)` - No data type with that id
    /// - `Err(AppError::BadRequest)` - New name is blank
    /// - `Err(AppError::Conflict)` - Renamed to a name used by another data type
    pub async fn update_data_type(
        &self,
        id: i32,
        dto: UpdateDataTypeDto,
    ) -> Result<DataType, AppError> {
        let params = UpdateDataTypeParams::from_dto(dto);
        let repo = DataTypeRepository::new(self.db);

        if let Some(name) = &params.name {
            if name.is_empty() {
                return Err(AppError::BadRequest("Data type name is required".to_string()));
            }
            if let Some(existing) = repo.find_by_name(name).await? {
                if existing.id != id {
                    return Err(data_type_conflict());
                }
            }
        }

        repo.update(id, params)
            .await?
            .ok_or_else(data_type_not_found)
    }

    /// Deletes a data type and all of its points.
    pub async fn delete_data_type(&self, id: i32) -> Result<DeleteDataTypeResultDto, AppError> {
        let txn = self.db.begin().await?;

        let type_repo = DataTypeRepository::new(&txn);
        let data_type = type_repo
            .find_by_id(id)
            .await?
            .ok_or_else(data_type_not_found)?;

        let deleted_points_count = DataPointRepository::new(&txn).delete_by_type(id).await?;
        type_repo.delete(id).await?;

        txn.commit().await?;

        tracing::info!(
            "Deleted data type {} with {} data points",
            data_type.name,
            deleted_points_count
        );

        Ok(DeleteDataTypeResultDto {
            ok: true,
            deleted: id,
            deleted_points_count,
            message: format!(
                "Data type '{}' and {} data points deleted",
                data_type.name, deleted_points_count
            ),
        })
    }

    /// Gets the points of a data type by the type's name.
    ///
    /// An unknown type name yields an empty list rather than an error.
    pub async fn get_points_by_type_name(
        &self,
        name: &str,
        active_only: bool,
    ) -> Result<Vec<DataPoint>, AppError> {
        let Some(data_type) = DataTypeRepository::new(self.db)
            .find_by_name(&name.to_lowercase())
            .await?
        else {
            return Ok(Vec::new());
        };

        Ok(DataPointRepository::new(self.db)
            .get_by_type(data_type.id, active_only)
            .await?)
    }

    /// Creates a data point in an existing data type.
    ///
    /// # Returns
    /// - `Ok(DataPoint)` - Created data point
    /// - `Err(AppError::NotFound)` - Data type does not exist
    /// - `Err(AppError::Conflict)` - The data type already has a point with that name
    pub async fn create_data_point(&self, dto: CreateDataPointDto) -> Result<DataPoint, AppError> {
        let params = CreateDataPointParams::from_dto(dto);

        if params.name.is_empty() {
            return Err(AppError::BadRequest("Data point name is required".to_string()));
        }
        if DataTypeRepository::new(self.db)
            .find_by_id(params.data_type_id)
            .await?
            .is_none()
        {
            return Err(data_type_not_found());
        }

        let point_repo = DataPointRepository::new(self.db);
        if point_repo
            .find_by_type_and_name(params.data_type_id, &params.name)
            .await?
            .is_some()
        {
            return Err(data_point_conflict());
        }

        Ok(point_repo.create(params).await?)
    }

    pub async fn get_data_point(&self, id: i32) -> Result<DataPoint, AppError> {
        DataPointRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(data_point_not_found)
    }

    /// Applies a partial update to a data point.
    ///
    /// # Returns
    /// - `Ok(DataPoint)` - Updated data point
    /// - `Err(AppError::NotFound)` - No data point with that id
    /// - `Err(AppError::BadRequest)` - New name is blank
    /// - `Err(AppError::Conflict)` - Renamed to a name already used in its data type
    pub async fn update_data_point(
        &self,
        id: i32,
        dto: UpdateDataPointDto,
    ) -> Result<DataPoint, AppError> {
        let params = UpdateDataPointParams::from_dto(dto);
        let repo = DataPointRepository::new(self.db);

        let existing = repo.find_by_id(id).await?.ok_or_else(data_point_not_found)?;

        if let Some(name) = &params.name {
            if name.is_empty() {
                return Err(AppError::BadRequest("Data point name is required".to_string()));
            }
            if let Some(other) = repo
                .find_by_type_and_name(existing.data_type_id, name)
                .await?
            {
                if other.id != id {
                    return Err(data_point_conflict());
                }
            }
        }

        repo.update(id, params)
            .await?
            .ok_or_else(data_point_not_found)
    }

    pub async fn delete_data_point(&self, id: i32) -> Result<(), AppError> {
        if !DataPointRepository::new(self.db).delete(id).await? {
            return Err(data_point_not_found());
        }

        Ok(())
    }

    /// Creates several points in one data type atomically.
    ///
    /// Nothing is written if any name collides with an existing point or repeats
    /// within the batch.
    ///
    /// # Returns
    /// - `Ok(Vec<DataPoint>)` - Created points in request order
    /// - `Err(AppError::NotFound)` - Data type does not exist
    /// - `Err(AppError::Conflict)` - Duplicate point name
    pub async fn bulk_create_data_points(
        &self,
        dto: BulkCreateDataPointsDto,
    ) -> Result<Vec<DataPoint>, AppError> {
        let txn = self.db.begin().await?;

        if DataTypeRepository::new(&txn)
            .find_by_id(dto.data_type_id)
            .await?
            .is_none()
        {
            return Err(data_type_not_found());
        }

        let point_repo = DataPointRepository::new(&txn);
        let mut seen = Vec::with_capacity(dto.data_points.len());
        let mut created = Vec::with_capacity(dto.data_points.len());

        for item in dto.data_points {
            let params = CreateDataPointParams::from_bulk_item(dto.data_type_id, item);

            if params.name.is_empty() {
                return Err(AppError::BadRequest("Data point name is required".to_string()));
            }
            if seen.contains(&params.name)
                || point_repo
                    .find_by_type_and_name(params.data_type_id, &params.name)
                    .await?
                    .is_some()
            {
                return Err(data_point_conflict());
            }

            seen.push(params.name.clone());
            created.push(point_repo.create(params).await?);
        }

        txn.commit().await?;

        Ok(created)
    }

    /// Searches point names and descriptions, optionally within one data type.
    ///
    /// An unknown data type name yields an empty list.
    pub async fn search_data_points(
        &self,
        query: &str,
        data_type: Option<&str>,
    ) -> Result<Vec<DataPoint>, AppError> {
        let data_type_id = match data_type {
            Some(name) => match DataTypeRepository::new(self.db)
                .find_by_name(&name.to_lowercase())
                .await?
            {
                Some(data_type) => Some(data_type.id),
                None => return Ok(Vec::new()),
            },
            None => None,
        };

        Ok(DataPointRepository::new(self.db)
            .search(query.trim(), data_type_id)
            .await?)
    }

    /// Seeds the default catalog, skipping data types that already exist.
    ///
    /// # Returns
    /// - `Ok(Vec<String>)` - Names of the data types that were created
    pub async fn initialize_defaults(&self) -> Result<Vec<String>, AppError> {
        let txn = self.db.begin().await?;
        let (created_types, _) = seed_defaults(&txn).await?;
        txn.commit().await?;

        tracing::info!("Initialized {} default data types", created_types.len());

        Ok(created_types)
    }

    /// Removes all reference data and re-seeds the default catalog.
    pub async fn reset(&self) -> Result<ResetDataResultDto, AppError> {
        let txn = self.db.begin().await?;

        let removed_points = DataPointRepository::new(&txn).delete_all().await?;
        let removed_types = DataTypeRepository::new(&txn).delete_all().await?;
        let (created_types, created_points) = seed_defaults(&txn).await?;

        txn.commit().await?;

        tracing::info!(
            "Reset dynamic data: removed {} types, created {} types",
            removed_types,
            created_types.len()
        );

        Ok(ResetDataResultDto {
            ok: true,
            message: "Dynamic data reset to defaults".to_string(),
            removed: DataCountsDto {
                data_types: removed_types,
                data_points: removed_points,
            },
            created: DataCountsDto {
                data_types: created_types.len() as u64,
                data_points: created_points,
            },
        })
    }

    /// Summarises every data type and its point count.
    pub async fn status(&self) -> Result<DynamicDataStatusDto, AppError> {
        let type_repo = DataTypeRepository::new(self.db);
        let point_repo = DataPointRepository::new(self.db);

        let data_types = type_repo.get_all(false).await?;
        let total_data_points = point_repo.count().await?;

        let mut summary = BTreeMap::new();
        for data_type in &data_types {
            summary.insert(
                data_type.name.clone(),
                DataTypeStatusDto {
                    display_name: data_type.display_name.clone(),
                    points_count: point_repo.count_by_type(data_type.id).await?,
                    is_active: data_type.is_active,
                },
            );
        }

        Ok(DynamicDataStatusDto {
            status: "operational".to_string(),
            total_data_types: data_types.len() as u64,
            total_data_points,
            data_types: summary,
        })
    }
}

/// Inserts every default data type that does not exist yet, with its points.
///
/// Returns the created type names and the number of points inserted.
async fn seed_defaults<C: ConnectionTrait>(db: &C) -> Result<(Vec<String>, u64), DbErr> {
    let type_repo = DataTypeRepository::new(db);
    let point_repo = DataPointRepository::new(db);

    let mut created_types = Vec::new();
    let mut created_points = 0;

    for default in DEFAULT_DATA_TYPES {
        if type_repo.find_by_name(default.name).await?.is_some() {
            continue;
        }

        let data_type = type_repo
            .create(CreateDataTypeParams {
                name: default.name.to_string(),
                display_name: default.display_name.to_string(),
                description: Some(default.description.to_string()),
                is_active: true,
            })
            .await?;

        for (index, (name, description)) in default.points.iter().enumerate() {
            point_repo
                .create(CreateDataPointParams {
                    data_type_id: data_type.id,
                    name: name.to_string(),
                    description: Some(description.to_string()),
                    sort_order: index as i32 + 1,
                    is_active: true,
                    extra_data: None,
                })
                .await?;
            created_points += 1;
        }

        created_types.push(data_type.name);
    }

    Ok((created_types, created_points))
}

fn data_type_not_found() -> AppError {
    AppError::NotFound("Data type not found".to_string())
}

fn data_point_not_found() -> AppError {
    AppError::NotFound("Data point not found".to_string())
}

fn data_type_conflict() -> AppError {
    AppError::Conflict("Data type already exists".to_string())
}

fn data_point_conflict() -> AppError {
    AppError::Conflict("Data point already exists for this data type".to_string())
}

#[cfg(test)]
mod test;
