use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::{DeletedDto, ErrorDto},
        dynamic_data::{
            BulkCreateDataPointsDto, BulkCreateDataPointsResultDto, CreateDataPointDto,
            CreateDataTypeDto, DataPointDto, DataTypeDto, DataTypeWithPointsDto,
            DeleteDataTypeResultDto, DynamicDataStatusDto, InitializeDataResultDto,
            ResetDataResultDto, UpdateDataPointDto, UpdateDataTypeDto,
        },
    },
    server::{
        controller::param::ActiveOnlyParam,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::dynamic_data::{DataPoint, DataType},
        service::dynamic_data::DynamicDataService,
        state::AppState,
    },
};

pub static DYNAMIC_DATA_TAG: &str = "dynamic_data";

#[derive(Debug, Deserialize)]
pub struct SearchParam {
    pub q: String,
    #[serde(default)]
    pub data_type: Option<String>,
}

#[utoipa::path(
    get,
    path = "/data-types",
    tag = DYNAMIC_DATA_TAG,
    params(
        ("active_only" = Option<bool>, Query, description = "Only active types (default: true)")
    ),
    responses(
        (status = 200, description = "Data types ordered by display name", body = Vec<DataTypeDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_data_types(
    State(state): State<AppState>,
    Query(param): Query<ActiveOnlyParam>,
) -> Result<impl IntoResponse, AppError> {
    let data_types = DynamicDataService::new(&state.db)
        .get_data_types(param.active_only)
        .await?;

    let dto: Vec<DataTypeDto> = data_types.into_iter().map(DataType::into_dto).collect();

    Ok((StatusCode::OK, Json(dto)))
}

#[utoipa::path(
    post,
    path = "/data-types",
    tag = DYNAMIC_DATA_TAG,
    request_body = CreateDataTypeDto,
    responses(
        (status = 201, description = "Data type created", body = DataTypeDto),
        (status = 400, description = "Invalid data type", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 409, description = "Data type already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_data_type(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateDataTypeDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let data_type = DynamicDataService::new(&state.db)
        .create_data_type(payload)
        .await?;

    Ok((StatusCode::CREATED, Json(data_type.into_dto())))
}

#[utoipa::path(
    get,
    path = "/data-types/{data_type}",
    tag = DYNAMIC_DATA_TAG,
    params(
        ("data_type" = String, Path, description = "Data type name")
    ),
    responses(
        (status = 200, description = "Data type with all of its points", body = DataTypeWithPointsDto),
        (status = 404, description = "Data type not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_data_type(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let (data_type, points) = DynamicDataService::new(&state.db)
        .get_data_type_with_points(&name)
        .await?;

    Ok((StatusCode::OK, Json(data_type.into_dto_with_points(points))))
}

#[utoipa::path(
    put,
    path = "/data-types/{data_type}",
    tag = DYNAMIC_DATA_TAG,
    params(
        ("data_type" = i32, Path, description = "Data type ID")
    ),
    request_body = UpdateDataTypeDto,
    responses(
        (status = 200, description = "Updated data type", body = DataTypeDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Data type not found", body = ErrorDto),
        (status = 409, description = "Data type name already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_data_type(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateDataTypeDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let data_type = DynamicDataService::new(&state.db)
        .update_data_type(id, payload)
        .await?;

    Ok((StatusCode::OK, Json(data_type.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/data-types/{data_type}",
    tag = DYNAMIC_DATA_TAG,
    params(
        ("data_type" = i32, Path, description = "Data type ID")
    ),
    responses(
        (status = 200, description = "Data type and its points deleted", body = DeleteDataTypeResultDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Data type not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_data_type(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let result = DynamicDataService::new(&state.db)
        .delete_data_type(id)
        .await?;

    Ok((StatusCode::OK, Json(result)))
}

#[utoipa::path(
    get,
    path = "/data-types/{data_type}/points",
    tag = DYNAMIC_DATA_TAG,
    params(
        ("data_type" = String, Path, description = "Data type name"),
        ("active_only" = Option<bool>, Query, description = "Only active points (default: true)")
    ),
    responses(
        (status = 200, description = "Points ordered by sort order then name; empty for an unknown type", body = Vec<DataPointDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_data_points(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(param): Query<ActiveOnlyParam>,
) -> Result<impl IntoResponse, AppError> {
    list_points(&state, &name, param.active_only).await
}

#[utoipa::path(
    post,
    path = "/data-points",
    tag = DYNAMIC_DATA_TAG,
    request_body = CreateDataPointDto,
    responses(
        (status = 201, description = "Data point created", body = DataPointDto),
        (status = 400, description = "Invalid data point", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Data type not found", body = ErrorDto),
        (status = 409, description = "Data point already exists for this type", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_data_point(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateDataPointDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let point = DynamicDataService::new(&state.db)
        .create_data_point(payload)
        .await?;

    Ok((StatusCode::CREATED, Json(point.into_dto())))
}

#[utoipa::path(
    get,
    path = "/data-points/{id}",
    tag = DYNAMIC_DATA_TAG,
    params(
        ("id" = i32, Path, description = "Data point ID")
    ),
    responses(
        (status = 200, description = "Data point", body = DataPointDto),
        (status = 404, description = "Data point not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_data_point(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let point = DynamicDataService::new(&state.db).get_data_point(id).await?;

    Ok((StatusCode::OK, Json(point.into_dto())))
}

#[utoipa::path(
    put,
    path = "/data-points/{id}",
    tag = DYNAMIC_DATA_TAG,
    params(
        ("id" = i32, Path, description = "Data point ID")
    ),
    request_body = UpdateDataPointDto,
    responses(
        (status = 200, description = "Updated data point", body = DataPointDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Data point not found", body = ErrorDto),
        (status = 409, description = "Data point name already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_data_point(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateDataPointDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let point = DynamicDataService::new(&state.db)
        .update_data_point(id, payload)
        .await?;

    Ok((StatusCode::OK, Json(point.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/data-points/{id}",
    tag = DYNAMIC_DATA_TAG,
    params(
        ("id" = i32, Path, description = "Data point ID")
    ),
    responses(
        (status = 200, description = "Data point deleted", body = DeletedDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Data point not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_data_point(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    DynamicDataService::new(&state.db).delete_data_point(id).await?;

    Ok((StatusCode::OK, Json(DeletedDto { ok: true, deleted: id })))
}

#[utoipa::path(
    post,
    path = "/data-points/bulk",
    tag = DYNAMIC_DATA_TAG,
    request_body = BulkCreateDataPointsDto,
    responses(
        (status = 201, description = "All points created", body = BulkCreateDataPointsResultDto),
        (status = 400, description = "Invalid data point", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Data type not found", body = ErrorDto),
        (status = 409, description = "A point already exists for this type", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn bulk_create_data_points(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<BulkCreateDataPointsDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let points = DynamicDataService::new(&state.db)
        .bulk_create_data_points(payload)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(BulkCreateDataPointsResultDto {
            created_count: points.len(),
            data_points: points.into_iter().map(DataPoint::into_dto).collect(),
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/search",
    tag = DYNAMIC_DATA_TAG,
    params(
        ("q" = String, Query, description = "Case-insensitive text to find in name or description"),
        ("data_type" = Option<String>, Query, description = "Restrict to one data type")
    ),
    responses(
        (status = 200, description = "Matching points", body = Vec<DataPointDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_data_points(
    State(state): State<AppState>,
    Query(param): Query<SearchParam>,
) -> Result<impl IntoResponse, AppError> {
    let points = DynamicDataService::new(&state.db)
        .search_data_points(&param.q, param.data_type.as_deref())
        .await?;

    let dto: Vec<DataPointDto> = points.into_iter().map(DataPoint::into_dto).collect();

    Ok((StatusCode::OK, Json(dto)))
}

#[utoipa::path(
    post,
    path = "/initialize",
    tag = DYNAMIC_DATA_TAG,
    responses(
        (status = 200, description = "Missing default types seeded", body = InitializeDataResultDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn initialize_data(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let created_types = DynamicDataService::new(&state.db)
        .initialize_defaults()
        .await?;

    Ok((
        StatusCode::OK,
        Json(InitializeDataResultDto {
            message: format!("Initialized {} data types", created_types.len()),
            created_types,
        }),
    ))
}

#[utoipa::path(
    post,
    path = "/reset",
    tag = DYNAMIC_DATA_TAG,
    responses(
        (status = 200, description = "All reference data replaced by the defaults", body = ResetDataResultDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reset_data(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let result = DynamicDataService::new(&state.db).reset().await?;

    Ok((StatusCode::OK, Json(result)))
}

#[utoipa::path(
    get,
    path = "/status",
    tag = DYNAMIC_DATA_TAG,
    responses(
        (status = 200, description = "Reference data counts", body = DynamicDataStatusDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_status(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let status = DynamicDataService::new(&state.db).status().await?;

    Ok((StatusCode::OK, Json(status)))
}

#[utoipa::path(
    get,
    path = "/disability-types",
    tag = DYNAMIC_DATA_TAG,
    responses(
        (status = 200, description = "Active disability types", body = Vec<DataPointDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_disability_types(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    list_points(&state, "disability_types", true).await
}

#[utoipa::path(
    get,
    path = "/service-types",
    tag = DYNAMIC_DATA_TAG,
    responses(
        (status = 200, description = "Active service types", body = Vec<DataPointDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_service_types(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    list_points(&state, "service_types", true).await
}

#[utoipa::path(
    get,
    path = "/plan-types",
    tag = DYNAMIC_DATA_TAG,
    responses(
        (status = 200, description = "Active plan types", body = Vec<DataPointDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_plan_types(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    list_points(&state, "plan_types", true).await
}

#[utoipa::path(
    get,
    path = "/contact-methods",
    tag = DYNAMIC_DATA_TAG,
    responses(
        (status = 200, description = "Active contact methods", body = Vec<DataPointDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_contact_methods(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    list_points(&state, "contact_methods", true).await
}

#[utoipa::path(
    get,
    path = "/support-categories",
    tag = DYNAMIC_DATA_TAG,
    responses(
        (status = 200, description = "Active support categories", body = Vec<DataPointDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_support_categories(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    list_points(&state, "support_categories", true).await
}

#[utoipa::path(
    get,
    path = "/urgency-levels",
    tag = DYNAMIC_DATA_TAG,
    responses(
        (status = 200, description = "Active urgency levels", body = Vec<DataPointDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_urgency_levels(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    list_points(&state, "urgency_levels", true).await
}

async fn list_points(
    state: &AppState,
    type_name: &str,
    active_only: bool,
) -> Result<(StatusCode, Json<Vec<DataPointDto>>), AppError> {
    let points = DynamicDataService::new(&state.db)
        .get_points_by_type_name(type_name, active_only)
        .await?;

    Ok((
        StatusCode::OK,
        Json(points.into_iter().map(DataPoint::into_dto).collect()),
    ))
}
