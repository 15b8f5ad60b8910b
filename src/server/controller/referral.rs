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
        referral::{CreateReferralDto, ReferralDto, ReferralStatus, UpdateReferralDto},
    },
    server::{
        controller::param::PaginationParam,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::referral::Referral,
        service::{email::spawn_referral_notifications, referral::ReferralService},
        state::AppState,
    },
};

pub static REFERRAL_TAG: &str = "referral";

#[derive(Debug, Deserialize)]
pub struct ReferralStatusParam {
    #[serde(default)]
    pub status: Option<ReferralStatus>,
}

/// Public referral form submission.
///
/// Notification emails are sent on a background task after the referral is stored, so
/// email problems never fail the submission.
#[utoipa::path(
    post,
    path = "/",
    tag = REFERRAL_TAG,
    request_body = CreateReferralDto,
    responses(
        (status = 201, description = "Referral submitted", body = ReferralDto),
        (status = 400, description = "Missing consent or invalid form data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_referral(
    State(state): State<AppState>,
    Json(payload): Json<CreateReferralDto>,
) -> Result<impl IntoResponse, AppError> {
    let referral = ReferralService::new(&state.db).create(payload).await?;

    spawn_referral_notifications(
        state.db.clone(),
        state.mailer.clone(),
        state.mailer.config().clone(),
        referral.clone(),
    );

    Ok((StatusCode::CREATED, Json(referral.into_dto())))
}

#[utoipa::path(
    get,
    path = "/",
    tag = REFERRAL_TAG,
    params(
        ("status" = Option<ReferralStatus>, Query, description = "Only referrals with this status"),
        ("skip" = Option<u64>, Query, description = "Rows to skip (default: 0)"),
        ("limit" = Option<u64>, Query, description = "Maximum rows (default: 100)")
    ),
    responses(
        (status = 200, description = "Referrals, newest first", body = Vec<ReferralDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_referrals(
    State(state): State<AppState>,
    session: Session,
    Query(filter): Query<ReferralStatusParam>,
    Query(pagination): Query<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let referrals = ReferralService::new(&state.db)
        .list(filter.status, pagination.skip, pagination.limit)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(referrals))))
}

#[utoipa::path(
    get,
    path = "/{id}",
    tag = REFERRAL_TAG,
    params(
        ("id" = i32, Path, description = "Referral ID")
    ),
    responses(
        (status = 200, description = "Referral", body = ReferralDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin or provider", body = ErrorDto),
        (status = 404, description = "Referral not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_referral(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let referral = ReferralService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(referral.into_dto())))
}

#[utoipa::path(
    put,
    path = "/{id}",
    tag = REFERRAL_TAG,
    params(
        ("id" = i32, Path, description = "Referral ID")
    ),
    request_body = UpdateReferralDto,
    responses(
        (status = 200, description = "Updated referral", body = ReferralDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Referral not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_referral(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateReferralDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let referral = ReferralService::new(&state.db).update(id, payload).await?;

    Ok((StatusCode::OK, Json(referral.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/{id}",
    tag = REFERRAL_TAG,
    params(
        ("id" = i32, Path, description = "Referral ID")
    ),
    responses(
        (status = 200, description = "Referral deleted", body = DeletedDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Referral not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_referral(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    ReferralService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json(DeletedDto { ok: true, deleted: id })))
}

pub(super) fn into_dtos(referrals: Vec<Referral>) -> Vec<ReferralDto> {
    referrals.into_iter().map(Referral::into_dto).collect()
}
