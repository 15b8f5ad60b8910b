//! Admin oversight of providers: assignment, analytics, alerts and reports.

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
        notification::{SendNotificationDto, SendNotificationResultDto},
        provider_admin::{
            AdminDashboardSummaryDto, AdminProviderDashboardDto, AssignReferralDto,
            AssignmentSuggestionDto, BulkAssignDto, BulkAssignResultDto,
            CreatePerformanceReviewDto, DeactivateProviderDto, DeactivationResultDto,
            DetailedPerformanceDto, OverdueReferralDto, PerformanceReviewDto,
            PerformanceSummaryDto, ProviderAlertDto, ProviderCapacityDto,
            ProviderSummaryReportDto, ProviderWithStatsDto, ReassignReferralDto,
            TimelineEventDto, WorkloadAnalyticsDto,
        },
        referral::{ReferralDto, ReferralPriority, ReferralStatus},
        user::UserDto,
    },
    server::{
        controller::{
            param::{ActiveOnlyParam, DateRangeParam, PaginationParam},
            referral::into_dtos,
        },
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::{email::EmailService, provider_admin::ProviderAdminService},
        state::AppState,
    },
};

pub static PROVIDER_ADMIN_TAG: &str = "provider-admin";

const DEFAULT_UNASSIGNED_LIMIT: u64 = 50;
const DEFAULT_OVERDUE_DAYS: i64 = 7;
const DEFAULT_PERIOD_DAYS: i64 = 30;
const DEFAULT_TIMELINE_LIMIT: usize = 50;

fn default_unassigned_limit() -> u64 {
    DEFAULT_UNASSIGNED_LIMIT
}

fn default_overdue_days() -> i64 {
    DEFAULT_OVERDUE_DAYS
}

fn default_period_days() -> i64 {
    DEFAULT_PERIOD_DAYS
}

fn default_timeline_limit() -> usize {
    DEFAULT_TIMELINE_LIMIT
}

#[derive(Debug, Deserialize)]
pub struct ServiceTypeParam {
    #[serde(default)]
    pub service_type: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UnassignedParam {
    #[serde(default)]
    pub service_type: Option<String>,
    #[serde(default)]
    pub priority: Option<ReferralPriority>,
    #[serde(default)]
    pub skip: u64,
    #[serde(default = "default_unassigned_limit")]
    pub limit: u64,
}

#[derive(Debug, Deserialize)]
pub struct OverdueParam {
    #[serde(default = "default_overdue_days")]
    pub days_overdue: i64,
    #[serde(default)]
    pub provider_id: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct PeriodParam {
    #[serde(default = "default_period_days")]
    pub period_days: i64,
}

#[derive(Debug, Deserialize)]
pub struct StatusParam {
    #[serde(default)]
    pub status: Option<ReferralStatus>,
}

#[derive(Debug, Deserialize)]
pub struct SeverityParam {
    #[serde(default)]
    pub severity: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ProviderIdsParam {
    /// Comma separated provider ids, e.g. `1,2,3`.
    #[serde(default)]
    pub provider_ids: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TimelineLimitParam {
    #[serde(default = "default_timeline_limit")]
    pub limit: usize,
}

/// Parses a comma separated id list, ignoring empty entries.
fn parse_provider_ids(raw: Option<&str>) -> Result<Vec<i32>, AppError> {
    let Some(raw) = raw else {
        return Ok(Vec::new());
    };

    raw.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(|id| {
            id.parse::<i32>()
                .map_err(|_| AppError::BadRequest(format!("Invalid provider id: {}", id)))
        })
        .collect()
}

#[utoipa::path(
    get,
    path = "/providers",
    tag = PROVIDER_ADMIN_TAG,
    params(
        ("active_only" = Option<bool>, Query, description = "Only active providers (default: true)"),
        ("service_type" = Option<String>, Query, description = "Only providers able to deliver this service")
    ),
    responses(
        (status = 200, description = "Providers with referral statistics", body = Vec<ProviderWithStatsDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_providers(
    State(state): State<AppState>,
    session: Session,
    Query(active): Query<ActiveOnlyParam>,
    Query(filter): Query<ServiceTypeParam>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let providers = ProviderAdminService::new(&state.db)
        .list_providers(active.active_only, filter.service_type.as_deref())
        .await?;

    Ok((StatusCode::OK, Json(providers)))
}

#[utoipa::path(
    get,
    path = "/providers/{id}/dashboard",
    tag = PROVIDER_ADMIN_TAG,
    params(
        ("id" = i32, Path, description = "Provider ID")
    ),
    responses(
        (status = 200, description = "Provider info, dashboard and alerts", body = AdminProviderDashboardDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "Provider not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_provider_dashboard(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let dashboard = ProviderAdminService::new(&state.db)
        .get_provider_dashboard(id)
        .await?;

    Ok((StatusCode::OK, Json(dashboard)))
}

#[utoipa::path(
    get,
    path = "/referrals/unassigned",
    tag = PROVIDER_ADMIN_TAG,
    params(
        ("service_type" = Option<String>, Query, description = "Only referrals for this service"),
        ("priority" = Option<ReferralPriority>, Query, description = "Only referrals with this priority"),
        ("skip" = Option<u64>, Query, description = "Rows to skip (default: 0)"),
        ("limit" = Option<u64>, Query, description = "Maximum rows (default: 50)")
    ),
    responses(
        (status = 200, description = "Referrals without a provider or declined", body = Vec<ReferralDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_unassigned_referrals(
    State(state): State<AppState>,
    session: Session,
    Query(param): Query<UnassignedParam>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let referrals = ProviderAdminService::new(&state.db)
        .get_unassigned_referrals(
            param.service_type.as_deref(),
            param.priority,
            param.skip,
            param.limit,
        )
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(referrals))))
}

#[utoipa::path(
    post,
    path = "/referrals/{id}/assign",
    tag = PROVIDER_ADMIN_TAG,
    params(
        ("id" = i32, Path, description = "Referral ID")
    ),
    request_body = AssignReferralDto,
    responses(
        (status = 200, description = "Referral assigned", body = ReferralDto),
        (status = 400, description = "Referral or provider invalid for assignment", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn assign_referral(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<AssignReferralDto>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let referral = ProviderAdminService::new(&state.db)
        .assign_referral(id, payload, admin.id)
        .await?;

    Ok((StatusCode::OK, Json(referral.into_dto())))
}

#[utoipa::path(
    post,
    path = "/referrals/{id}/reassign",
    tag = PROVIDER_ADMIN_TAG,
    params(
        ("id" = i32, Path, description = "Referral ID")
    ),
    request_body = ReassignReferralDto,
    responses(
        (status = 200, description = "Referral reassigned", body = ReferralDto),
        (status = 400, description = "Referral or provider invalid for assignment", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reassign_referral(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<ReassignReferralDto>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let referral = ProviderAdminService::new(&state.db)
        .reassign_referral(id, payload, admin.id)
        .await?;

    Ok((StatusCode::OK, Json(referral.into_dto())))
}

#[utoipa::path(
    post,
    path = "/referrals/bulk-assign",
    tag = PROVIDER_ADMIN_TAG,
    request_body = BulkAssignDto,
    responses(
        (status = 200, description = "Per-referral assignment outcome", body = BulkAssignResultDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn bulk_assign(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<BulkAssignDto>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let result = ProviderAdminService::new(&state.db)
        .bulk_assign(payload, admin.id)
        .await?;

    Ok((StatusCode::OK, Json(result)))
}

#[utoipa::path(
    get,
    path = "/referrals/overdue",
    tag = PROVIDER_ADMIN_TAG,
    params(
        ("days_overdue" = Option<i64>, Query, description = "Days a new referral may wait (default: 7)"),
        ("provider_id" = Option<i32>, Query, description = "Only referrals of this provider")
    ),
    responses(
        (status = 200, description = "Overdue referrals, most overdue first", body = Vec<OverdueReferralDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_overdue_referrals(
    State(state): State<AppState>,
    session: Session,
    Query(param): Query<OverdueParam>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let referrals = ProviderAdminService::new(&state.db)
        .get_overdue_referrals(param.days_overdue, param.provider_id)
        .await?;

    Ok((StatusCode::OK, Json(referrals)))
}

#[utoipa::path(
    get,
    path = "/referrals/{id}/assignment-suggestions",
    tag = PROVIDER_ADMIN_TAG,
    params(
        ("id" = i32, Path, description = "Referral ID")
    ),
    responses(
        (status = 200, description = "Up to five providers, best match first", body = Vec<AssignmentSuggestionDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "Referral not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_assignment_suggestions(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let suggestions = ProviderAdminService::new(&state.db)
        .get_assignment_suggestions(id)
        .await?;

    Ok((StatusCode::OK, Json(suggestions)))
}

#[utoipa::path(
    get,
    path = "/providers/{id}/performance",
    tag = PROVIDER_ADMIN_TAG,
    params(
        ("id" = i32, Path, description = "Provider ID"),
        ("start_date" = Option<String>, Query, description = "First day, YYYY-MM-DD (default: 90 days ago)"),
        ("end_date" = Option<String>, Query, description = "Last day, YYYY-MM-DD (default: today)")
    ),
    responses(
        (status = 200, description = "Performance with response and completion times", body = DetailedPerformanceDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "Provider not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_provider_performance(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Query(range): Query<DateRangeParam>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let performance = ProviderAdminService::new(&state.db)
        .get_provider_performance(id, range.start_date, range.end_date)
        .await?;

    Ok((StatusCode::OK, Json(performance)))
}

#[utoipa::path(
    get,
    path = "/analytics/workload",
    tag = PROVIDER_ADMIN_TAG,
    responses(
        (status = 200, description = "Workload per provider and balance score", body = WorkloadAnalyticsDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_workload_analytics(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let analytics = ProviderAdminService::new(&state.db)
        .get_workload_analytics()
        .await?;

    Ok((StatusCode::OK, Json(analytics)))
}

#[utoipa::path(
    get,
    path = "/analytics/performance-summary",
    tag = PROVIDER_ADMIN_TAG,
    params(
        ("period_days" = Option<i64>, Query, description = "Length of the period in days (default: 30)")
    ),
    responses(
        (status = 200, description = "Totals, top performers and every provider by completion rate", body = PerformanceSummaryDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_performance_summary(
    State(state): State<AppState>,
    session: Session,
    Query(param): Query<PeriodParam>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let summary = ProviderAdminService::new(&state.db)
        .get_performance_summary(param.period_days)
        .await?;

    Ok((StatusCode::OK, Json(summary)))
}

#[utoipa::path(
    post,
    path = "/providers/{id}/activate",
    tag = PROVIDER_ADMIN_TAG,
    params(
        ("id" = i32, Path, description = "Provider ID")
    ),
    responses(
        (status = 200, description = "Provider activated", body = UserDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "Provider not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn activate_provider(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let provider = ProviderAdminService::new(&state.db)
        .activate_provider(id)
        .await?;

    Ok((StatusCode::OK, Json(provider.into_dto())))
}

#[utoipa::path(
    post,
    path = "/providers/{id}/deactivate",
    tag = PROVIDER_ADMIN_TAG,
    params(
        ("id" = i32, Path, description = "Provider ID")
    ),
    request_body = DeactivateProviderDto,
    responses(
        (status = 200, description = "Provider deactivated and open referrals moved", body = DeactivationResultDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "Provider not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn deactivate_provider(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<DeactivateProviderDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let result = ProviderAdminService::new(&state.db)
        .deactivate_provider(id, payload)
        .await?;

    Ok((StatusCode::OK, Json(result)))
}

#[utoipa::path(
    get,
    path = "/providers/{id}/referrals",
    tag = PROVIDER_ADMIN_TAG,
    params(
        ("id" = i32, Path, description = "Provider ID"),
        ("status" = Option<ReferralStatus>, Query, description = "Only referrals with this status"),
        ("start_date" = Option<String>, Query, description = "Created on or after, YYYY-MM-DD"),
        ("end_date" = Option<String>, Query, description = "Created on or before, YYYY-MM-DD"),
        ("skip" = Option<u64>, Query, description = "Rows to skip (default: 0)"),
        ("limit" = Option<u64>, Query, description = "Maximum rows (default: 100)")
    ),
    responses(
        (status = 200, description = "Referrals assigned to the provider, newest first", body = Vec<ReferralDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_provider_referrals(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Query(filter): Query<StatusParam>,
    Query(range): Query<DateRangeParam>,
    Query(pagination): Query<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let referrals = ProviderAdminService::new(&state.db)
        .get_provider_referrals(
            id,
            filter.status,
            range.start_date,
            range.end_date,
            pagination.skip,
            pagination.limit,
        )
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(referrals))))
}

#[utoipa::path(
    get,
    path = "/providers/{id}/capacity",
    tag = PROVIDER_ADMIN_TAG,
    params(
        ("id" = i32, Path, description = "Provider ID")
    ),
    responses(
        (status = 200, description = "Current capacity and recommended priority", body = ProviderCapacityDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "Provider not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_provider_capacity(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let capacity = ProviderAdminService::new(&state.db)
        .get_provider_capacity(id)
        .await?;

    Ok((StatusCode::OK, Json(capacity)))
}

#[utoipa::path(
    get,
    path = "/alerts/provider-issues",
    tag = PROVIDER_ADMIN_TAG,
    params(
        ("severity" = Option<String>, Query, description = "Only alerts with this severity")
    ),
    responses(
        (status = 200, description = "Alerts across active providers, most severe first", body = Vec<ProviderAlertDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_provider_alerts(
    State(state): State<AppState>,
    session: Session,
    Query(param): Query<SeverityParam>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let alerts = ProviderAdminService::new(&state.db)
        .get_provider_alerts(param.severity.as_deref())
        .await?;

    Ok((StatusCode::OK, Json(alerts)))
}

#[utoipa::path(
    post,
    path = "/providers/{id}/send-notification",
    tag = PROVIDER_ADMIN_TAG,
    params(
        ("id" = i32, Path, description = "Provider ID")
    ),
    request_body = SendNotificationDto,
    responses(
        (status = 200, description = "Notification stored and email attempted", body = SendNotificationResultDto),
        (status = 400, description = "Missing title or message", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "Provider not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn send_notification(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<SendNotificationDto>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let email = EmailService::new(&state.db, &state.mailer, state.mailer.config());
    let result = ProviderAdminService::new(&state.db)
        .send_notification(id, payload, admin.id, &email)
        .await?;

    Ok((StatusCode::OK, Json(result)))
}

#[utoipa::path(
    get,
    path = "/reports/provider-summary",
    tag = PROVIDER_ADMIN_TAG,
    params(
        ("start_date" = Option<String>, Query, description = "First day, YYYY-MM-DD (default: 30 days ago)"),
        ("end_date" = Option<String>, Query, description = "Last day, YYYY-MM-DD (default: today)"),
        ("provider_ids" = Option<String>, Query, description = "Comma separated provider ids (default: all)")
    ),
    responses(
        (status = 200, description = "Per-provider rows and totals", body = ProviderSummaryReportDto),
        (status = 400, description = "Invalid provider id", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_provider_summary_report(
    State(state): State<AppState>,
    session: Session,
    Query(range): Query<DateRangeParam>,
    Query(param): Query<ProviderIdsParam>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let provider_ids = parse_provider_ids(param.provider_ids.as_deref())?;
    let report = ProviderAdminService::new(&state.db)
        .get_provider_summary_report(range.start_date, range.end_date, &provider_ids)
        .await?;

    Ok((StatusCode::OK, Json(report)))
}

#[utoipa::path(
    get,
    path = "/providers/{id}/timeline",
    tag = PROVIDER_ADMIN_TAG,
    params(
        ("id" = i32, Path, description = "Provider ID"),
        ("start_date" = Option<String>, Query, description = "First day, YYYY-MM-DD (default: 30 days ago)"),
        ("end_date" = Option<String>, Query, description = "Last day, YYYY-MM-DD (default: today)"),
        ("limit" = Option<usize>, Query, description = "Maximum events (default: 50)")
    ),
    responses(
        (status = 200, description = "Referral events, newest first", body = Vec<TimelineEventDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "Provider not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_provider_timeline(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Query(range): Query<DateRangeParam>,
    Query(param): Query<TimelineLimitParam>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let timeline = ProviderAdminService::new(&state.db)
        .get_provider_timeline(id, range.start_date, range.end_date, param.limit)
        .await?;

    Ok((StatusCode::OK, Json(timeline)))
}

#[utoipa::path(
    post,
    path = "/providers/{id}/performance-review",
    tag = PROVIDER_ADMIN_TAG,
    params(
        ("id" = i32, Path, description = "Provider ID")
    ),
    request_body = CreatePerformanceReviewDto,
    responses(
        (status = 201, description = "Review recorded with a metrics snapshot", body = PerformanceReviewDto),
        (status = 400, description = "Rating outside 1-5", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "Provider not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_performance_review(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<CreatePerformanceReviewDto>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let review = ProviderAdminService::new(&state.db)
        .create_performance_review(id, payload, admin.id)
        .await?;

    Ok((StatusCode::CREATED, Json(review.into_dto())))
}

#[utoipa::path(
    get,
    path = "/dashboard/summary",
    tag = PROVIDER_ADMIN_TAG,
    responses(
        (status = 200, description = "Provider and referral counts, recent referrals and critical alerts", body = AdminDashboardSummaryDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_dashboard_summary(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let summary = ProviderAdminService::new(&state.db)
        .get_dashboard_summary()
        .await?;

    Ok((StatusCode::OK, Json(summary)))
}

#[cfg(test)]
mod test {
    use super::parse_provider_ids;

    #[test]
    fn parses_comma_separated_ids() {
        assert_eq!(parse_provider_ids(Some("1, 2,,3")).unwrap(), vec![1, 2, 3]);
        assert!(parse_provider_ids(None).unwrap().is_empty());
        assert!(parse_provider_ids(Some("1,x")).is_err());
    }
}
