use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        auth::{self, AUTH_TAG},
        dynamic_data::{self, DYNAMIC_DATA_TAG},
        email::{self, EMAIL_TAG},
        health::{self, HEALTH_TAG},
        provider::{self, PROVIDER_TAG},
        provider_admin::{self, PROVIDER_ADMIN_TAG},
        referral::{self, REFERRAL_TAG},
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "NDIS Referral Service",
        description = "Referral intake, provider assignment and provider management API"
    ),
    tags(
        (name = AUTH_TAG, description = "Registration, login and session checks"),
        (name = REFERRAL_TAG, description = "Referral submission and admin maintenance"),
        (name = DYNAMIC_DATA_TAG, description = "Configurable reference lists"),
        (name = EMAIL_TAG, description = "Email delivery status"),
        (name = PROVIDER_TAG, description = "Provider self-service"),
        (name = PROVIDER_ADMIN_TAG, description = "Provider oversight for admins"),
        (name = HEALTH_TAG, description = "Liveness probe")
    )
)]
struct ApiDoc;

/// Builds the application router with every API route and the Swagger UI.
///
/// API routes live under `/api/v1`. The generated OpenAPI document is served at
/// `/api-docs/openapi.json` and browsable at `/docs`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(health::healthz))
        .nest("/api/v1/auth", auth_routes())
        .nest("/api/v1/referrals", referral_routes())
        .nest("/api/v1/dynamic-data", dynamic_data_routes())
        .nest("/api/v1/email-status", email_routes())
        .nest("/api/v1/providers", provider_routes())
        .nest("/api/v1/provider-admin", provider_admin_routes())
        .split_for_parts();

    router.merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", api))
}

fn auth_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(auth::register))
        .routes(routes!(auth::login))
        .routes(routes!(auth::logout))
        .routes(routes!(auth::get_me))
        .routes(routes!(auth::get_providers))
        .routes(routes!(auth::create_provider))
        .routes(routes!(auth::check_auth))
}

fn referral_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(referral::create_referral, referral::list_referrals))
        .routes(routes!(
            referral::get_referral,
            referral::update_referral,
            referral::delete_referral
        ))
}

fn dynamic_data_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(
            dynamic_data::get_data_types,
            dynamic_data::create_data_type
        ))
        .routes(routes!(
            dynamic_data::get_data_type,
            dynamic_data::update_data_type,
            dynamic_data::delete_data_type
        ))
        .routes(routes!(dynamic_data::get_data_points))
        .routes(routes!(dynamic_data::create_data_point))
        .routes(routes!(dynamic_data::bulk_create_data_points))
        .routes(routes!(
            dynamic_data::get_data_point,
            dynamic_data::update_data_point,
            dynamic_data::delete_data_point
        ))
        .routes(routes!(dynamic_data::search_data_points))
        .routes(routes!(dynamic_data::initialize_data))
        .routes(routes!(dynamic_data::reset_data))
        .routes(routes!(dynamic_data::get_status))
        .routes(routes!(dynamic_data::get_disability_types))
        .routes(routes!(dynamic_data::get_service_types))
        .routes(routes!(dynamic_data::get_plan_types))
        .routes(routes!(dynamic_data::get_contact_methods))
        .routes(routes!(dynamic_data::get_support_categories))
        .routes(routes!(dynamic_data::get_urgency_levels))
}

fn email_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(email::get_referral_emails))
        .routes(routes!(email::resend_notifications))
        .routes(routes!(email::get_failed_emails))
        .routes(routes!(email::get_email_statistics))
}

fn provider_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(provider::get_dashboard))
        .routes(routes!(provider::get_referrals))
        .routes(routes!(provider::get_referral))
        .routes(routes!(provider::update_referral_status))
        .routes(routes!(provider::accept_referral))
        .routes(routes!(provider::decline_referral))
        .routes(routes!(provider::get_session_notes))
        .routes(routes!(provider::get_performance))
        .routes(routes!(provider::update_profile))
        .routes(routes!(
            provider::get_availability,
            provider::set_availability
        ))
        .routes(routes!(provider::get_schedule))
        .routes(routes!(provider::create_appointment))
        .routes(routes!(provider::update_appointment_status))
        .routes(routes!(provider::add_session_note))
        .routes(routes!(provider::get_participants))
        .routes(routes!(provider::get_notifications))
        .routes(routes!(provider::mark_notification_read))
}

fn provider_admin_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(provider_admin::list_providers))
        .routes(routes!(provider_admin::get_provider_dashboard))
        .routes(routes!(provider_admin::get_provider_performance))
        .routes(routes!(provider_admin::activate_provider))
        .routes(routes!(provider_admin::deactivate_provider))
        .routes(routes!(provider_admin::get_provider_referrals))
        .routes(routes!(provider_admin::get_provider_capacity))
        .routes(routes!(provider_admin::send_notification))
        .routes(routes!(provider_admin::get_provider_timeline))
        .routes(routes!(provider_admin::create_performance_review))
        .routes(routes!(provider_admin::get_unassigned_referrals))
        .routes(routes!(provider_admin::get_overdue_referrals))
        .routes(routes!(provider_admin::bulk_assign))
        .routes(routes!(provider_admin::assign_referral))
        .routes(routes!(provider_admin::reassign_referral))
        .routes(routes!(provider_admin::get_assignment_suggestions))
        .routes(routes!(provider_admin::get_workload_analytics))
        .routes(routes!(provider_admin::get_performance_summary))
        .routes(routes!(provider_admin::get_provider_alerts))
        .routes(routes!(provider_admin::get_provider_summary_report))
        .routes(routes!(provider_admin::get_dashboard_summary))
}
