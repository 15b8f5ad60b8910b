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
        api::ErrorDto,
        email::{EmailLogDto, EmailStatisticsDto, NotificationResultsDto, ReferralEmailsDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::email::EmailService,
        state::AppState,
    },
};

pub static EMAIL_TAG: &str = "email";

const DEFAULT_FAILED_LIMIT: u64 = 50;

fn default_failed_limit() -> u64 {
    DEFAULT_FAILED_LIMIT
}

#[derive(Debug, Deserialize)]
pub struct FailedEmailsParam {
    #[serde(default = "default_failed_limit")]
    pub limit: u64,
}

#[utoipa::path(
    get,
    path = "/referral/{id}/emails",
    tag = EMAIL_TAG,
    params(
        ("id" = i32, Path, description = "Referral ID")
    ),
    responses(
        (status = 200, description = "Logged emails for the referral with status counts", body = ReferralEmailsDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin or provider", body = ErrorDto),
        (status = 404, description = "Referral not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_referral_emails(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let emails = EmailService::new(&state.db, &state.mailer, state.mailer.config())
        .get_referral_emails(id)
        .await?;

    Ok((StatusCode::OK, Json(emails)))
}

#[utoipa::path(
    get,
    path = "/emails/failed",
    tag = EMAIL_TAG,
    params(
        ("limit" = Option<u64>, Query, description = "Maximum rows (default: 50)")
    ),
    responses(
        (status = 200, description = "Most recent failed emails", body = Vec<EmailLogDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_failed_emails(
    State(state): State<AppState>,
    session: Session,
    Query(param): Query<FailedEmailsParam>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let emails = EmailService::new(&state.db, &state.mailer, state.mailer.config())
        .get_failed_emails(param.limit)
        .await?;

    Ok((StatusCode::OK, Json(emails)))
}

#[utoipa::path(
    get,
    path = "/emails/statistics",
    tag = EMAIL_TAG,
    responses(
        (status = 200, description = "Delivery statistics", body = EmailStatisticsDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_email_statistics(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let statistics = EmailService::new(&state.db, &state.mailer, state.mailer.config())
        .get_statistics()
        .await?;

    Ok((StatusCode::OK, Json(statistics)))
}

#[utoipa::path(
    post,
    path = "/referral/{id}/resend",
    tag = EMAIL_TAG,
    params(
        ("id" = i32, Path, description = "Referral ID")
    ),
    responses(
        (status = 200, description = "Per-email outcome of the resend", body = NotificationResultsDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Referral not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn resend_notifications(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let results = EmailService::new(&state.db, &state.mailer, state.mailer.config())
        .resend_notifications(id)
        .await?;

    Ok((StatusCode::OK, Json(results)))
}
