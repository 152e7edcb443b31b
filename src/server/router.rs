use axum::{
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch, post, put},
    Json, Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::api::{ErrorDto, HealthDto},
    server::{
        controller::{admin, auth, menu, order, room},
        state::AppState,
    },
};

/// OpenAPI document covering every REST endpoint.
#[derive(OpenApi)]
#[openapi(
    paths(
        health,
        crate::server::controller::auth::login,
        crate::server::controller::auth::logout,
        crate::server::controller::auth::get_user,
        crate::server::controller::menu::get_menu,
        crate::server::controller::menu::get_categories,
        crate::server::controller::menu::get_category_items,
        crate::server::controller::menu::get_menu_item,
        crate::server::controller::menu::create_category,
        crate::server::controller::menu::update_category,
        crate::server::controller::menu::delete_category,
        crate::server::controller::menu::create_menu_item,
        crate::server::controller::menu::update_menu_item,
        crate::server::controller::menu::delete_menu_item,
        crate::server::controller::room::get_rooms,
        crate::server::controller::room::get_room,
        crate::server::controller::room::get_room_by_number,
        crate::server::controller::room::get_room_orders,
        crate::server::controller::room::create_room,
        crate::server::controller::room::update_room,
        crate::server::controller::room::delete_room,
        crate::server::controller::room::bulk_update_room_status,
        crate::server::controller::order::create_order,
        crate::server::controller::order::get_order,
        crate::server::controller::order::get_orders,
        crate::server::controller::order::manage_orders,
        crate::server::controller::order::update_order_status,
        crate::server::controller::order::bulk_update_order_status,
        crate::server::controller::order::get_order_history,
        crate::server::controller::admin::dashboard,
        crate::server::controller::admin::daily_report,
        crate::server::controller::admin::get_all_menu_items,
        crate::server::controller::admin::get_users,
        crate::server::controller::admin::create_user,
        crate::server::controller::admin::update_user,
        crate::server::controller::admin::update_user_role,
        crate::server::controller::admin::reset_user_password,
        crate::server::controller::admin::toggle_user_status,
    ),
    components(schemas(
        crate::model::api::ErrorDto,
        crate::model::api::MessageDto,
        crate::model::api::HealthDto,
        crate::model::user::UserDto,
        crate::model::user::LoginDto,
        crate::model::user::CreateUserDto,
        crate::model::user::UpdateUserDto,
        crate::model::user::UpdateUserRoleDto,
        crate::model::user::ResetPasswordDto,
        crate::model::menu::MenuCategoryDto,
        crate::model::menu::MenuItemDto,
        crate::model::menu::MenuItemDetailDto,
        crate::model::menu::MenuCategoryWithItemsDto,
        crate::model::menu::CreateMenuCategoryDto,
        crate::model::menu::UpdateMenuCategoryDto,
        crate::model::menu::CreateMenuItemDto,
        crate::model::menu::UpdateMenuItemDto,
        crate::model::room::RoomDto,
        crate::model::room::CreateRoomDto,
        crate::model::room::UpdateRoomDto,
        crate::model::room::BulkRoomStatusDto,
        crate::model::order::CreateOrderItemDto,
        crate::model::order::CreateOrderDto,
        crate::model::order::OrderCreatedDto,
        crate::model::order::OrderSummaryDto,
        crate::model::order::OrderLineDto,
        crate::model::order::OrderDetailDto,
        crate::model::order::PaginationDto,
        crate::model::order::PaginatedOrdersDto,
        crate::model::order::UpdateOrderStatusDto,
        crate::model::order::BulkOrderStatusDto,
        crate::model::order::OrderStatusUpdatedDto,
        crate::model::order::BulkStatusUpdatedDto,
        crate::model::order::OrderStatusHistoryDto,
        crate::model::dashboard::TodayStatsDto,
        crate::model::dashboard::StatusCountDto,
        crate::model::dashboard::ActiveOrderDto,
        crate::model::dashboard::PopularItemDto,
        crate::model::dashboard::DashboardDto,
        crate::model::dashboard::DailyReportDto,
    )),
    tags(
        (name = "system", description = "Liveness probe"),
        (name = "auth", description = "Session login for staff and admins"),
        (name = "menu", description = "Guest menu reads and staff menu management"),
        (name = "rooms", description = "Room lookups and staff room management"),
        (name = "orders", description = "Guest ordering and staff order tracking"),
        (name = "admin", description = "Dashboard, reports, and account management")
    )
)]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", get(auth::logout))
        .route("/api/auth/user", get(auth::get_user))
        .route("/api/menu", get(menu::get_menu))
        .route(
            "/api/menu/categories",
            get(menu::get_categories).post(menu::create_category),
        )
        .route(
            "/api/menu/categories/{id}",
            put(menu::update_category).delete(menu::delete_category),
        )
        .route("/api/menu/categories/{id}/items", get(menu::get_category_items))
        .route("/api/menu/items", post(menu::create_menu_item))
        .route(
            "/api/menu/items/{id}",
            get(menu::get_menu_item)
                .put(menu::update_menu_item)
                .delete(menu::delete_menu_item),
        )
        .route("/api/rooms", get(room::get_rooms).post(room::create_room))
        .route("/api/rooms/bulk-status", patch(room::bulk_update_room_status))
        .route("/api/rooms/number/{room_number}", get(room::get_room_by_number))
        .route(
            "/api/rooms/{id}",
            get(room::get_room)
                .put(room::update_room)
                .delete(room::delete_room),
        )
        .route("/api/rooms/{id}/orders", get(room::get_room_orders))
        .route("/api/orders", post(order::create_order).get(order::get_orders))
        .route("/api/orders/manage", get(order::manage_orders))
        .route(
            "/api/orders/bulk-status",
            patch(order::bulk_update_order_status),
        )
        .route("/api/orders/{id}", get(order::get_order))
        .route("/api/orders/{id}/status", patch(order::update_order_status))
        .route("/api/orders/{id}/history", get(order::get_order_history))
        .route("/api/admin/dashboard", get(admin::dashboard))
        .route("/api/admin/reports/daily", get(admin::daily_report))
        .route("/api/admin/menu/items", get(admin::get_all_menu_items))
        .route(
            "/api/admin/users",
            get(admin::get_users).post(admin::create_user),
        )
        .route("/api/admin/users/{id}", put(admin::update_user))
        .route("/api/admin/users/{id}/role", patch(admin::update_user_role))
        .route(
            "/api/admin/users/{id}/reset-password",
            patch(admin::reset_user_password),
        )
        .route(
            "/api/admin/users/{id}/toggle-status",
            patch(admin::toggle_user_status),
        )
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback(not_found)
}

/// Liveness probe.
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "system",
    responses(
        (status = 200, description = "Service is up", body = HealthDto)
    ),
)]
async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthDto {
            status: "OK".to_string(),
            message: "Hotel order tracking API is running".to_string(),
        }),
    )
}

/// JSON 404 for every unmatched route.
async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorDto {
            error: "Route not found".to_string(),
        }),
    )
}
