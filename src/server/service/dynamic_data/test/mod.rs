use crate::{
    model::dynamic_data::{
        BulkCreateDataPointsDto, BulkDataPointItemDto, CreateDataPointDto, CreateDataTypeDto,
        UpdateDataPointDto,
    },
    server::{error::AppError, service::dynamic_data::DynamicDataService},
};
use sea_orm::EntityTrait;
use test_utils::{builder::TestBuilder, factory};

mod data_point;

fn bulk_item(name: &str, sort_order: i32) -> BulkDataPointItemDto {
    BulkDataPointItemDto {
        name: name.to_string(),
        description: None,
        sort_order,
        is_active: true,
        extra_data: None,
    }
}
