//! Application errors and their HTTP mapping.
//!
//! Repositories return `DbErr`; services and controllers return `AppError`, which converts
//! into a JSON `{"error": ...}` response. Client errors carry their message through,
//! everything else is logged and answered with a generic 500.

pub mod auth;
pub mod config;
pub mod email;
pub mod internal;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError, internal::InternalError},
};

#[derive(Error, Debug)]
pub enum AppError {
    /// Invalid or missing environment configuration. Only raised during startup.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Login, session or role failure; status chosen by `AuthError`.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Password hashing or JSON serialization failure.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Reading or writing session data failed.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// Creating the session table failed.
    #[error(transparent)]
    SessionStoreErr(#[from] tower_sessions_sqlx_store::sqlx::Error),

    /// Binding or serving the listener failed.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Building the outbound HTTP client failed.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// 404 with the given message, e.g. "Referral not found".
    #[error("{0}")]
    NotFound(String),

    /// 400 with the given message, used for validation failures.
    #[error("{0}")]
    BadRequest(String),

    /// 409 with the given message, used for duplicate reference data names.
    #[error("{0}")]
    Conflict(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::AuthErr(err) => return err.into_response(),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::Conflict(msg) => (StatusCode::CONFLICT, msg),
            err => return InternalServerError(err).into_response(),
        };

        (status, Json(ErrorDto { error: message })).into_response()
    }
}

/// Logs the wrapped error and responds with a generic 500.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("Internal error: {}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
