use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user id stored in the request's session.
    ///
    /// The caller hit an endpoint that requires authentication without having
    /// logged in, or the session has expired. Results in a 401 Unauthorized
    /// response.
    #[error("No authenticated user in session")]
    UserNotInSession,

    /// The session references a user that no longer exists.
    ///
    /// A user id was found in the session but no matching row exists in the
    /// database, typically because the account was deleted while the session
    /// was still live. Results in a 401 Unauthorized response.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// Username or password did not match during login.
    ///
    /// Covers both unknown usernames and wrong passwords so the response does
    /// not reveal which half failed. Results in a 401 Unauthorized response.
    #[error("Invalid login credentials")]
    InvalidCredentials,

    /// The account exists but has been deactivated by an admin.
    ///
    /// Results in a 403 Forbidden response. Also raised by the auth guard when
    /// a deactivated user presents a still-live session.
    #[error("User {0} is deactivated")]
    AccountDisabled(i32),

    /// The user lacks the role required by the endpoint.
    ///
    /// Results in a 403 Forbidden response with a generic message; the detail
    /// string is logged server-side only.
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// Maps authentication errors to appropriate HTTP status codes and user-facing messages:
/// - `UserNotInSession` / `UserNotInDatabase` → 401 with "Authentication required"
/// - `InvalidCredentials` → 401 with "Invalid username or password"
/// - `AccountDisabled` → 403 with "Account is deactivated"
/// - `AccessDenied` → 403 with "You do not have permission to perform this action"
///
/// All errors are logged at debug level for diagnostics while keeping client-facing
/// messages generic to avoid information leakage.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Authentication required".to_string(),
                }),
            )
                .into_response(),
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Invalid username or password".to_string(),
                }),
            )
                .into_response(),
            Self::AccountDisabled(_) => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "Account is deactivated".to_string(),
                }),
            )
                .into_response(),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "You do not have permission to perform this action".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
