use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        dashboard::{DailyReportDto, DashboardDto},
        menu::MenuItemDetailDto,
        user::{CreateUserDto, ResetPasswordDto, UpdateUserDto, UpdateUserRoleDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            dashboard::DailyReportRow,
            menu::MenuItemWithCategory,
            user::{CreateAccountParams, UpdateUserParams, User, UserRole},
        },
        service::{admin::AdminService, menu::MenuService, user::UserService},
        state::AppState,
    },
};

/// Tag for grouping admin endpoints in OpenAPI documentation
pub static ADMIN_TAG: &str = "admin";

#[derive(Deserialize)]
pub struct ReportRangeQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

fn parse_role(value: &str) -> Result<UserRole, AppError> {
    UserRole::parse(value)
        .ok_or_else(|| AppError::BadRequest("Valid role (admin/staff) is required".to_string()))
}

fn parse_date(value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| AppError::BadRequest(format!("Invalid date '{}'", value)))
}

/// Get the staff dashboard.
///
/// Today's order count, revenue and status breakdown, the overall pending
/// count, the newest active orders, and today's most ordered items.
///
/// # Access Control
/// - `Staff` - Staff or admin may view the dashboard
#[utoipa::path(
    get,
    path = "/api/admin/dashboard",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Dashboard aggregates", body = DashboardDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not staff or admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn dashboard(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let service = AdminService::new(&state.db);

    let stats = service.dashboard().await?;

    Ok((StatusCode::OK, Json(stats.into_dto())))
}

/// Get the per-day order report.
///
/// Defaults to the last 30 days when no window is given.
///
/// # Access Control
/// - `Admin` - Only admins may read reports
#[utoipa::path(
    get,
    path = "/api/admin/reports/daily",
    tag = ADMIN_TAG,
    params(
        ("start_date" = Option<String>, Query, description = "First day (YYYY-MM-DD, inclusive)"),
        ("end_date" = Option<String>, Query, description = "Last day (YYYY-MM-DD, inclusive)")
    ),
    responses(
        (status = 200, description = "Per-day totals, newest day first", body = [DailyReportDto]),
        (status = 400, description = "Invalid date or reversed window", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn daily_report(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<ReportRangeQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let start_date = match &query.start_date {
        Some(value) => Some(parse_date(value)?),
        None => None,
    };

    let end_date = match &query.end_date {
        Some(value) => Some(parse_date(value)?),
        None => None,
    };

    let service = AdminService::new(&state.db);

    let rows = service.daily_report(start_date, end_date).await?;
    let rows_dto: Vec<_> = rows.into_iter().map(DailyReportRow::into_dto).collect();

    Ok((StatusCode::OK, Json(rows_dto)))
}

/// Get every menu item including unavailable ones, with category names.
///
/// # Access Control
/// - `Admin` - Only admins may read the full catalog
#[utoipa::path(
    get,
    path = "/api/admin/menu/items",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "All menu items", body = [MenuItemDetailDto]),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_menu_items(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = MenuService::new(&state.db);

    let items = service.get_all_items().await?;
    let items_dto: Vec<_> = items
        .into_iter()
        .map(MenuItemWithCategory::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(items_dto)))
}

/// Get all user accounts, newest first.
///
/// # Access Control
/// - `Admin` - Only admins may manage accounts
#[utoipa::path(
    get,
    path = "/api/admin/users",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "All users", body = [UserDto]),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = UserService::new(&state.db);

    let users = service.get_all().await?;
    let users_dto: Vec<_> = users.into_iter().map(User::into_dto).collect();

    Ok((StatusCode::OK, Json(users_dto)))
}

/// Create a user account.
///
/// # Access Control
/// - `Admin` - Only admins may manage accounts
#[utoipa::path(
    post,
    path = "/api/admin/users",
    tag = ADMIN_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "Created user", body = UserDto),
        (status = 400, description = "Missing fields, bad role, or duplicate username/email", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let role = parse_role(&payload.role)?;

    let service = UserService::new(&state.db);

    let user = service
        .create(CreateAccountParams {
            username: payload.username,
            email: payload.email,
            password: payload.password,
            role,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// Update a user account.
///
/// # Access Control
/// - `Admin` - Only admins may manage accounts
#[utoipa::path(
    put,
    path = "/api/admin/users/{id}",
    tag = ADMIN_TAG,
    params(
        ("id" = i32, Path, description = "User id")
    ),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "Updated user", body = UserDto),
        (status = 400, description = "Bad role or duplicate username/email", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let role = parse_role(&payload.role)?;

    let service = UserService::new(&state.db);

    let user = service
        .update(UpdateUserParams {
            id,
            username: payload.username,
            email: payload.email,
            role,
            is_active: payload.is_active,
        })
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Change the role of a user account.
///
/// # Access Control
/// - `Admin` - Only admins may manage accounts
#[utoipa::path(
    patch,
    path = "/api/admin/users/{id}/role",
    tag = ADMIN_TAG,
    params(
        ("id" = i32, Path, description = "User id")
    ),
    request_body = UpdateUserRoleDto,
    responses(
        (status = 200, description = "User with its new role", body = UserDto),
        (status = 400, description = "Bad role value", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user_role(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateUserRoleDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let role = parse_role(&payload.role)?;

    let service = UserService::new(&state.db);

    let user = service.set_role(id, role).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Reset the password of a user account.
///
/// # Access Control
/// - `Admin` - Only admins may manage accounts
#[utoipa::path(
    patch,
    path = "/api/admin/users/{id}/reset-password",
    tag = ADMIN_TAG,
    params(
        ("id" = i32, Path, description = "User id")
    ),
    request_body = ResetPasswordDto,
    responses(
        (status = 200, description = "User whose password was reset", body = UserDto),
        (status = 400, description = "Empty password", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reset_user_password(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<ResetPasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = UserService::new(&state.db);

    let user = service.reset_password(id, &payload.new_password).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Toggle the activation flag of a user account.
///
/// # Access Control
/// - `Admin` - Only admins may manage accounts
#[utoipa::path(
    patch,
    path = "/api/admin/users/{id}/toggle-status",
    tag = ADMIN_TAG,
    params(
        ("id" = i32, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "User with its toggled flag", body = UserDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn toggle_user_status(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = UserService::new(&state.db);

    let user = service.toggle_active(id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
