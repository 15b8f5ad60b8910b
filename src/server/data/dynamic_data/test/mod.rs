use crate::server::{
    data::dynamic_data::{point::DataPointRepository, DataTypeRepository},
    model::dynamic_data::{
        CreateDataPointParams, CreateDataTypeParams, UpdateDataPointParams, UpdateDataTypeParams,
    },
};
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory,
    factory::data_type::{DataPointFactory, DataTypeFactory},
};
