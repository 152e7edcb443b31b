use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        user::{LoginDto, UserDto},
    },
    server::{error::AppError, middleware::auth::AuthGuard, service::auth::AuthService,
        state::AppState},
};

/// Session key holding the authenticated user's id.
pub static SESSION_AUTH_USER_ID: &str = "auth:user_id";

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Log a staff or admin user in.
///
/// Verifies the credentials and stores the user id in the session cookie.
///
/// # Returns
/// - `200 OK` - Logged in; body is the user
/// - `401 Unauthorized` - Unknown username or wrong password
/// - `403 Forbidden` - Valid credentials for a deactivated account
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in successfully", body = UserDto),
        (status = 401, description = "Invalid username or password", body = ErrorDto),
        (status = 403, description = "Account is deactivated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = AuthService::new(&state.db);

    let user = auth_service
        .verify_credentials(&payload.username, &payload.password)
        .await?;

    session.insert(SESSION_AUTH_USER_ID, user.id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Log the current user out.
///
/// Flushes the session; succeeds whether or not anyone was logged in.
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Session cleared", body = MessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    session.flush().await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Logged out successfully".to_string(),
        }),
    ))
}

/// Get the currently logged-in user.
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "The authenticated user", body = UserDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
