use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user ID stored in the session.
    ///
    /// The request did not come from a logged in session. Results in 401.
    #[error("No user in session")]
    UserNotInSession,

    /// The session references a user that no longer exists.
    ///
    /// Results in 401 so the client re-authenticates.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// Authenticated user has been deactivated.
    #[error("User {0} is inactive")]
    InactiveUser(i32),

    /// User lacks a required permission.
    ///
    /// # Fields
    /// - ID of the user that was denied
    /// - Reason logged server-side
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(i32, String),

    /// Unknown email or password mismatch during login.
    #[error("Invalid login credentials")]
    InvalidCredentials,

    /// Login attempted on a deactivated account.
    #[error("Login attempted on inactive account")]
    AccountInactive,

    /// Registration attempted with an email that is already in use.
    #[error("Email already registered")]
    EmailAlreadyRegistered,

    /// Admin registration with a missing, wrong or expired bootstrap code.
    #[error("Invalid or expired admin code")]
    InvalidAdminCode,
}

/// Converts authentication errors into HTTP responses.
///
/// Session and credential failures map to 401, inactive accounts and duplicate
/// registrations to 400, and permission failures to 403. Client-facing messages
/// stay generic; the specific reason is logged at debug level.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => {
                (StatusCode::UNAUTHORIZED, "Not authenticated")
            }
            Self::InactiveUser(_) => (StatusCode::BAD_REQUEST, "Inactive user"),
            Self::AccessDenied(_, _) => (StatusCode::FORBIDDEN, "Not enough permissions"),
            Self::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Incorrect email or password"),
            Self::AccountInactive => (StatusCode::BAD_REQUEST, "User account is inactive"),
            Self::EmailAlreadyRegistered => (StatusCode::BAD_REQUEST, "Email already registered"),
            Self::InvalidAdminCode => (StatusCode::FORBIDDEN, "Invalid or expired admin code"),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
