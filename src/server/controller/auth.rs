use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        user::{CheckAuthDto, LoginDto, LoginResponseDto, ProviderSummaryDto, RegisterUserDto, UserDto},
    },
    server::{
        data::user::UserRepository,
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            session::AuthSession,
        },
        model::user::User,
        service::auth::AuthService,
        state::AppState,
    },
};

pub static AUTH_TAG: &str = "auth";

#[utoipa::path(
    post,
    path = "/register",
    tag = AUTH_TAG,
    request_body = RegisterUserDto,
    responses(
        (status = 201, description = "Account created", body = UserDto),
        (status = 400, description = "Invalid data or email already registered", body = ErrorDto),
        (status = 403, description = "Invalid or expired admin code", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthService::new(&state.db)
        .register(payload, &state.admin_code_service)
        .await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

#[utoipa::path(
    post,
    path = "/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in; session cookie set", body = LoginResponseDto),
        (status = 400, description = "User account is inactive", body = ErrorDto),
        (status = 401, description = "Incorrect email or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthService::new(&state.db)
        .login(&payload.email, &payload.password)
        .await?;

    session.cycle_id().await?;
    AuthSession::new(&session).set_user_id(user.id).await?;

    Ok((
        StatusCode::OK,
        Json(LoginResponseDto {
            user: user.into_dto(),
            message: "Login successful".to_string(),
        }),
    ))
}

#[utoipa::path(
    post,
    path = "/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Session cleared", body = MessageDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await;

    Ok((StatusCode::OK, Json(MessageDto::new("Successfully logged out"))))
}

#[utoipa::path(
    get,
    path = "/me",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user", body = UserDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_me(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

#[utoipa::path(
    get,
    path = "/providers",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "All provider accounts", body = Vec<ProviderSummaryDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_providers(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let providers = AuthService::new(&state.db).get_providers().await?;

    let dto: Vec<ProviderSummaryDto> = providers
        .into_iter()
        .map(User::into_provider_summary_dto)
        .collect();

    Ok((StatusCode::OK, Json(dto)))
}

#[utoipa::path(
    post,
    path = "/create-provider",
    tag = AUTH_TAG,
    request_body = RegisterUserDto,
    responses(
        (status = 201, description = "Provider account created", body = UserDto),
        (status = 400, description = "Invalid data or email already registered", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_provider(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<RegisterUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let provider = AuthService::new(&state.db).create_provider(payload).await?;

    Ok((StatusCode::CREATED, Json(provider.into_dto())))
}

/// Reports whether the session belongs to a known user without rejecting anonymous callers.
#[utoipa::path(
    get,
    path = "/check-auth",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Authentication state", body = CheckAuthDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn check_auth(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = match AuthSession::new(&session).get_user_id().await? {
        Some(user_id) => UserRepository::new(&state.db).find_by_id(user_id).await?,
        None => None,
    };

    let dto = match user {
        Some(user) => CheckAuthDto {
            authenticated: true,
            user_id: Some(user.id),
            email: Some(user.email),
            role: Some(user.role),
            is_active: Some(user.is_active),
        },
        None => CheckAuthDto {
            authenticated: false,
            user_id: None,
            email: None,
            role: None,
            is_active: None,
        },
    };

    Ok((StatusCode::OK, Json(dto)))
}
