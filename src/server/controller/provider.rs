//! Self-service endpoints for the logged-in provider.
//!
//! Every handler requires the provider role and only ever touches referrals assigned to
//! the caller.

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
        appointment::{
            AppointmentDto, CreateAppointmentDto, CreateSessionNoteDto, SessionNoteDto,
            UpdateAppointmentStatusDto,
        },
        notification::NotificationDto,
        provider::{
            AvailabilityDto, DeclineReferralDto, ParticipantDto, ProviderDashboardDto,
            ProviderPerformanceDto, SetAvailabilityDto, UpdateProviderProfileDto,
            UpdateReferralStatusDto,
        },
        referral::{ReferralDto, ReferralStatus},
        user::UserDto,
    },
    server::{
        controller::{
            param::{DateRangeParam, PaginationParam},
            referral::into_dtos,
        },
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            appointment::{Appointment, SessionNote},
            availability::Availability,
            notification::Notification,
        },
        service::provider::ProviderService,
        state::AppState,
    },
};

pub static PROVIDER_TAG: &str = "provider";

#[derive(Debug, Deserialize)]
pub struct ProviderReferralsParam {
    #[serde(default)]
    pub status: Option<ReferralStatus>,
    #[serde(default)]
    pub service_type: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UnreadOnlyParam {
    #[serde(default)]
    pub unread_only: bool,
}

#[utoipa::path(
    get,
    path = "/dashboard",
    tag = PROVIDER_TAG,
    responses(
        (status = 200, description = "Referral counts and recent activity", body = ProviderDashboardDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a provider", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_dashboard(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let provider = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Provider])
        .await?;

    let dashboard = ProviderService::new(&state.db)
        .get_dashboard(provider.id)
        .await?;

    Ok((StatusCode::OK, Json(dashboard)))
}

#[utoipa::path(
    get,
    path = "/referrals",
    tag = PROVIDER_TAG,
    params(
        ("status" = Option<ReferralStatus>, Query, description = "Only referrals with this status"),
        ("service_type" = Option<String>, Query, description = "Only referrals for this service"),
        ("skip" = Option<u64>, Query, description = "Rows to skip (default: 0)"),
        ("limit" = Option<u64>, Query, description = "Maximum rows (default: 100)")
    ),
    responses(
        (status = 200, description = "Own referrals, newest first", body = Vec<ReferralDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a provider", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_referrals(
    State(state): State<AppState>,
    session: Session,
    Query(filter): Query<ProviderReferralsParam>,
    Query(pagination): Query<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    let provider = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Provider])
        .await?;

    let referrals = ProviderService::new(&state.db)
        .get_referrals(
            provider.id,
            filter.status,
            filter.service_type,
            pagination.skip,
            pagination.limit,
        )
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(referrals))))
}

#[utoipa::path(
    get,
    path = "/referrals/{id}",
    tag = PROVIDER_TAG,
    params(
        ("id" = i32, Path, description = "Referral ID")
    ),
    responses(
        (status = 200, description = "Own referral", body = ReferralDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a provider", body = ErrorDto),
        (status = 404, description = "Referral not found or access denied", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_referral(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let provider = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Provider])
        .await?;

    let referral = ProviderService::new(&state.db)
        .get_referral(provider.id, id)
        .await?;

    Ok((StatusCode::OK, Json(referral.into_dto())))
}

#[utoipa::path(
    put,
    path = "/referrals/{id}/status",
    tag = PROVIDER_TAG,
    params(
        ("id" = i32, Path, description = "Referral ID")
    ),
    request_body = UpdateReferralStatusDto,
    responses(
        (status = 200, description = "Updated referral", body = ReferralDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a provider", body = ErrorDto),
        (status = 404, description = "Referral not found or access denied", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_referral_status(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateReferralStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let provider = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Provider])
        .await?;

    let referral = ProviderService::new(&state.db)
        .update_referral_status(provider.id, id, payload)
        .await?;

    Ok((StatusCode::OK, Json(referral.into_dto())))
}

#[utoipa::path(
    post,
    path = "/referrals/{id}/accept",
    tag = PROVIDER_TAG,
    params(
        ("id" = i32, Path, description = "Referral ID")
    ),
    responses(
        (status = 200, description = "Referral accepted", body = ReferralDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a provider", body = ErrorDto),
        (status = 404, description = "Referral not found or access denied", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn accept_referral(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let provider = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Provider])
        .await?;

    let referral = ProviderService::new(&state.db)
        .accept_referral(provider.id, id)
        .await?;

    Ok((StatusCode::OK, Json(referral.into_dto())))
}

#[utoipa::path(
    post,
    path = "/referrals/{id}/decline",
    tag = PROVIDER_TAG,
    params(
        ("id" = i32, Path, description = "Referral ID")
    ),
    request_body = DeclineReferralDto,
    responses(
        (status = 200, description = "Referral declined", body = ReferralDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a provider", body = ErrorDto),
        (status = 404, description = "Referral not found or access denied", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn decline_referral(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<DeclineReferralDto>,
) -> Result<impl IntoResponse, AppError> {
    let provider = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Provider])
        .await?;

    let referral = ProviderService::new(&state.db)
        .decline_referral(provider.id, id, &payload.reason)
        .await?;

    Ok((StatusCode::OK, Json(referral.into_dto())))
}

#[utoipa::path(
    get,
    path = "/performance",
    tag = PROVIDER_TAG,
    responses(
        (status = 200, description = "Lifetime referral totals and rates", body = ProviderPerformanceDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a provider", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_performance(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let provider = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Provider])
        .await?;

    let performance = ProviderService::new(&state.db)
        .get_performance(provider.id)
        .await?;

    Ok((StatusCode::OK, Json(performance)))
}

#[utoipa::path(
    put,
    path = "/profile",
    tag = PROVIDER_TAG,
    request_body = UpdateProviderProfileDto,
    responses(
        (status = 200, description = "Updated profile", body = UserDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a provider", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_profile(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<UpdateProviderProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    let provider = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Provider])
        .await?;

    let user = ProviderService::new(&state.db)
        .update_profile(provider.id, payload)
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

#[utoipa::path(
    get,
    path = "/availability",
    tag = PROVIDER_TAG,
    responses(
        (status = 200, description = "Weekly availability", body = Vec<AvailabilityDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a provider", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_availability(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let provider = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Provider])
        .await?;

    let slots = ProviderService::new(&state.db)
        .get_availability(provider.id)
        .await?;

    let dto: Vec<AvailabilityDto> = slots.into_iter().map(Availability::into_dto).collect();

    Ok((StatusCode::OK, Json(dto)))
}

#[utoipa::path(
    post,
    path = "/availability",
    tag = PROVIDER_TAG,
    request_body = SetAvailabilityDto,
    responses(
        (status = 200, description = "Availability replaced", body = Vec<AvailabilityDto>),
        (status = 400, description = "Invalid slot", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a provider", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_availability(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SetAvailabilityDto>,
) -> Result<impl IntoResponse, AppError> {
    let provider = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Provider])
        .await?;

    let slots = ProviderService::new(&state.db)
        .set_availability(provider.id, payload)
        .await?;

    let dto: Vec<AvailabilityDto> = slots.into_iter().map(Availability::into_dto).collect();

    Ok((StatusCode::OK, Json(dto)))
}

#[utoipa::path(
    get,
    path = "/schedule",
    tag = PROVIDER_TAG,
    params(
        ("start_date" = Option<String>, Query, description = "First day, YYYY-MM-DD (default: today)"),
        ("end_date" = Option<String>, Query, description = "Last day, YYYY-MM-DD (default: start + 7 days)")
    ),
    responses(
        (status = 200, description = "Appointments in the range, earliest first", body = Vec<AppointmentDto>),
        (status = 400, description = "End date before start date", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a provider", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_schedule(
    State(state): State<AppState>,
    session: Session,
    Query(range): Query<DateRangeParam>,
) -> Result<impl IntoResponse, AppError> {
    let provider = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Provider])
        .await?;

    let appointments = ProviderService::new(&state.db)
        .get_schedule(provider.id, range.start_date, range.end_date)
        .await?;

    let dto: Vec<AppointmentDto> = appointments
        .into_iter()
        .map(Appointment::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(dto)))
}

#[utoipa::path(
    post,
    path = "/appointments",
    tag = PROVIDER_TAG,
    request_body = CreateAppointmentDto,
    responses(
        (status = 201, description = "Appointment scheduled", body = AppointmentDto),
        (status = 400, description = "Invalid appointment", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a provider", body = ErrorDto),
        (status = 404, description = "Referral not found or access denied", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_appointment(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateAppointmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let provider = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Provider])
        .await?;

    let appointment = ProviderService::new(&state.db)
        .create_appointment(provider.id, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(appointment.into_dto())))
}

#[utoipa::path(
    put,
    path = "/appointments/{id}/status",
    tag = PROVIDER_TAG,
    params(
        ("id" = i32, Path, description = "Appointment ID")
    ),
    request_body = UpdateAppointmentStatusDto,
    responses(
        (status = 200, description = "Updated appointment", body = AppointmentDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a provider", body = ErrorDto),
        (status = 404, description = "Appointment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_appointment_status(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateAppointmentStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let provider = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Provider])
        .await?;

    let appointment = ProviderService::new(&state.db)
        .update_appointment_status(provider.id, id, payload)
        .await?;

    Ok((StatusCode::OK, Json(appointment.into_dto())))
}

#[utoipa::path(
    post,
    path = "/appointments/{id}/notes",
    tag = PROVIDER_TAG,
    params(
        ("id" = i32, Path, description = "Appointment ID")
    ),
    request_body = CreateSessionNoteDto,
    responses(
        (status = 201, description = "Session note recorded", body = SessionNoteDto),
        (status = 400, description = "Missing participant response or progress notes", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a provider", body = ErrorDto),
        (status = 404, description = "Appointment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_session_note(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<CreateSessionNoteDto>,
) -> Result<impl IntoResponse, AppError> {
    let provider = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Provider])
        .await?;

    let note = ProviderService::new(&state.db)
        .add_session_note(provider.id, id, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(note.into_dto())))
}

#[utoipa::path(
    get,
    path = "/referrals/{id}/notes",
    tag = PROVIDER_TAG,
    params(
        ("id" = i32, Path, description = "Referral ID")
    ),
    responses(
        (status = 200, description = "Session notes for the referral, newest first", body = Vec<SessionNoteDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a provider", body = ErrorDto),
        (status = 404, description = "Referral not found or access denied", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_session_notes(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let provider = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Provider])
        .await?;

    let notes = ProviderService::new(&state.db)
        .get_session_notes(provider.id, id)
        .await?;

    let dto: Vec<SessionNoteDto> = notes.into_iter().map(SessionNote::into_dto).collect();

    Ok((StatusCode::OK, Json(dto)))
}

#[utoipa::path(
    get,
    path = "/participants",
    tag = PROVIDER_TAG,
    responses(
        (status = 200, description = "Distinct participants of accepted, in progress and completed referrals", body = Vec<ParticipantDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a provider", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_participants(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let provider = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Provider])
        .await?;

    let participants = ProviderService::new(&state.db)
        .get_participants(provider.id)
        .await?;

    Ok((StatusCode::OK, Json(participants)))
}

#[utoipa::path(
    get,
    path = "/notifications",
    tag = PROVIDER_TAG,
    params(
        ("unread_only" = Option<bool>, Query, description = "Only unread notifications (default: false)")
    ),
    responses(
        (status = 200, description = "Notifications, newest first", body = Vec<NotificationDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a provider", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_notifications(
    State(state): State<AppState>,
    session: Session,
    Query(param): Query<UnreadOnlyParam>,
) -> Result<impl IntoResponse, AppError> {
    let provider = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Provider])
        .await?;

    let notifications = ProviderService::new(&state.db)
        .get_notifications(provider.id, param.unread_only)
        .await?;

    let dto: Vec<NotificationDto> = notifications
        .into_iter()
        .map(Notification::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(dto)))
}

#[utoipa::path(
    post,
    path = "/notifications/{id}/read",
    tag = PROVIDER_TAG,
    params(
        ("id" = i32, Path, description = "Notification ID")
    ),
    responses(
        (status = 200, description = "Notification marked read", body = NotificationDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a provider", body = ErrorDto),
        (status = 404, description = "Notification not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn mark_notification_read(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let provider = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Provider])
        .await?;

    let notification = ProviderService::new(&state.db)
        .mark_notification_read(provider.id, id)
        .await?;

    Ok((StatusCode::OK, Json(notification.into_dto())))
}
