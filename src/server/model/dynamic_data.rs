//! Reference data domain models.
//!
//! A `DataType` names a lookup list (for example `service_types`) and owns ordered
//! `DataPoint` entries. Names are stored lowercase.

use chrono::{DateTime, Utc};

use crate::model::dynamic_data::{
    BulkDataPointItemDto, CreateDataPointDto, CreateDataTypeDto, DataPointDto, DataTypeDto,
    DataTypeWithPointsDto, UpdateDataPointDto, UpdateDataTypeDto,
};

#[derive(Debug, Clone, PartialEq)]
pub struct DataType {
    pub id: i32,
    pub name: String,
    pub display_name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DataType {
    pub fn from_entity(entity: entity::data_type::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            display_name: entity.display_name,
            description: entity.description,
            is_active: entity.is_active,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> DataTypeDto {
        DataTypeDto {
            id: self.id,
            name: self.name,
            display_name: self.display_name,
            description: self.description,
            is_active: self.is_active,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn into_dto_with_points(self, points: Vec<DataPoint>) -> DataTypeWithPointsDto {
        DataTypeWithPointsDto {
            id: self.id,
            name: self.name,
            display_name: self.display_name,
            description: self.description,
            is_active: self.is_active,
            created_at: self.created_at,
            updated_at: self.updated_at,
            data_points: points.into_iter().map(DataPoint::into_dto).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DataPoint {
    pub id: i32,
    pub data_type_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub sort_order: i32,
    pub is_active: bool,
    pub extra_data: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DataPoint {
    pub fn from_entity(entity: entity::data_point::Model) -> Self {
        Self {
            id: entity.id,
            data_type_id: entity.data_type_id,
            name: entity.name,
            description: entity.description,
            sort_order: entity.sort_order,
            is_active: entity.is_active,
            extra_data: entity.extra_data,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> DataPointDto {
        DataPointDto {
            id: self.id,
            data_type_id: self.data_type_id,
            name: self.name,
            description: self.description,
            sort_order: self.sort_order,
            is_active: self.is_active,
            extra_data: self.extra_data,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateDataTypeParams {
    pub name: String,
    pub display_name: String,
    pub description: Option<String>,
    pub is_active: bool,
}

impl CreateDataTypeParams {
    /// Builds params from the request, lowercasing the name.
    pub fn from_dto(dto: CreateDataTypeDto) -> Self {
        Self {
            name: dto.name.trim().to_lowercase(),
            display_name: dto.display_name,
            description: dto.description,
            is_active: dto.is_active,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateDataTypeParams {
    pub name: Option<String>,
    pub display_name: Option<String>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

impl UpdateDataTypeParams {
    pub fn from_dto(dto: UpdateDataTypeDto) -> Self {
        Self {
            name: dto.name.map(|name| name.trim().to_lowercase()),
            display_name: dto.display_name,
            description: dto.description,
            is_active: dto.is_active,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateDataPointParams {
    pub data_type_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub sort_order: i32,
    pub is_active: bool,
    pub extra_data: Option<serde_json::Value>,
}

impl CreateDataPointParams {
    pub fn from_dto(dto: CreateDataPointDto) -> Self {
        Self {
            data_type_id: dto.data_type_id,
            name: dto.name.trim().to_lowercase(),
            description: dto.description,
            sort_order: dto.sort_order,
            is_active: dto.is_active,
            extra_data: dto.extra_data,
        }
    }

    pub fn from_bulk_item(data_type_id: i32, item: BulkDataPointItemDto) -> Self {
        Self {
            data_type_id,
            name: item.name.trim().to_lowercase(),
            description: item.description,
            sort_order: item.sort_order,
            is_active: item.is_active,
            extra_data: item.extra_data,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateDataPointParams {
    pub name: Option<String>,
    pub description: Option<String>,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
    pub extra_data: Option<serde_json::Value>,
}

impl UpdateDataPointParams {
    pub fn from_dto(dto: UpdateDataPointDto) -> Self {
        Self {
            name: dto.name.map(|name| name.trim().to_lowercase()),
            description: dto.description,
            sort_order: dto.sort_order,
            is_active: dto.is_active,
            extra_data: dto.extra_data,
        }
    }
}
