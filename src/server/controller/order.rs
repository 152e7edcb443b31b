use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        order::{
            BulkOrderStatusDto, BulkStatusUpdatedDto, CreateOrderDto, OrderCreatedDto,
            OrderDetailDto, OrderStatusHistoryDto, OrderStatusUpdatedDto, OrderSummaryDto,
            PaginatedOrdersDto, UpdateOrderStatusDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::order::{
            BulkOrderStatusParams, HistoryEntry, ManageOrdersFilter, NewOrderParams,
            OrderListFilter, OrderStatus, OrderWithRoom, UpdateOrderStatusParams,
        },
        service::order::OrderService,
        state::AppState,
    },
};

/// Tag for grouping order endpoints in OpenAPI documentation
pub static ORDER_TAG: &str = "orders";

#[derive(Deserialize)]
pub struct OrderListQuery {
    /// Comma-separated status list
    pub status: Option<String>,
    pub room_id: Option<i32>,
    #[serde(default = "default_list_limit")]
    pub limit: u64,
    #[serde(default)]
    pub offset: u64,
}

fn default_list_limit() -> u64 {
    50
}

#[derive(Deserialize)]
pub struct ManageOrdersQuery {
    pub status: Option<String>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
    pub room_number: Option<String>,
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_manage_limit")]
    pub limit: u64,
}

fn default_page() -> u64 {
    1
}

fn default_manage_limit() -> u64 {
    20
}

fn parse_status(value: &str) -> Result<OrderStatus, AppError> {
    OrderStatus::parse(value).ok_or_else(|| AppError::BadRequest("Invalid status".to_string()))
}

fn parse_date(value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| AppError::BadRequest(format!("Invalid date '{}'", value)))
}

fn day_start(date: NaiveDate) -> DateTime<Utc> {
    DateTime::from_naive_utc_and_offset(date.and_time(NaiveTime::MIN), Utc)
}

fn day_end(date: NaiveDate) -> DateTime<Utc> {
    let end_of_day = date.and_time(NaiveTime::from_hms_opt(23, 59, 59).unwrap_or(NaiveTime::MIN));
    DateTime::from_naive_utc_and_offset(end_of_day, Utc)
}

/// Place an order for a room.
///
/// Guest endpoint, no authentication. Prices every line against the current
/// menu, estimates delivery, and writes the order, its lines, and the initial
/// history row in one transaction; any failure leaves no trace.
#[utoipa::path(
    post,
    path = "/api/orders",
    tag = ORDER_TAG,
    request_body = CreateOrderDto,
    responses(
        (status = 201, description = "Order placed", body = OrderCreatedDto),
        (status = 400, description = "Empty items, bad quantity, or unknown/unavailable menu item", body = ErrorDto),
        (status = 404, description = "Room not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_order(
    State(state): State<AppState>,
    Json(payload): Json<CreateOrderDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = OrderService::new(&state.db);

    let created = service
        .create_order(NewOrderParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(created.into_dto())))
}

/// Get one order with its lines.
///
/// Guest endpoint so a room can track its order without an account.
#[utoipa::path(
    get,
    path = "/api/orders/{id}",
    tag = ORDER_TAG,
    params(
        ("id" = i32, Path, description = "Order id")
    ),
    responses(
        (status = 200, description = "The order with lines", body = OrderDetailDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = OrderService::new(&state.db);

    let order = service.get_detail(id).await?;

    Ok((StatusCode::OK, Json(order.into_dto())))
}

/// List orders, newest first.
///
/// # Access Control
/// - `Staff` - Staff or admin may list all orders
#[utoipa::path(
    get,
    path = "/api/orders",
    tag = ORDER_TAG,
    params(
        ("status" = Option<String>, Query, description = "Comma-separated status filter"),
        ("room_id" = Option<i32>, Query, description = "Only orders of this room"),
        ("limit" = Option<u64>, Query, description = "Maximum rows (default: 50)"),
        ("offset" = Option<u64>, Query, description = "Rows to skip (default: 0)")
    ),
    responses(
        (status = 200, description = "Matching orders", body = [OrderSummaryDto]),
        (status = 400, description = "Invalid status filter", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not staff or admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_orders(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<OrderListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let mut statuses = Vec::new();
    if let Some(raw) = &query.status {
        for part in raw.split(',') {
            let part = part.trim();
            if !part.is_empty() {
                statuses.push(parse_status(part)?);
            }
        }
    }

    let service = OrderService::new(&state.db);

    let orders = service
        .list(OrderListFilter {
            statuses,
            room_id: query.room_id,
            limit: Some(query.limit),
            offset: Some(query.offset),
        })
        .await?;

    let orders_dto: Vec<_> = orders
        .into_iter()
        .map(OrderWithRoom::into_summary_dto)
        .collect();

    Ok((StatusCode::OK, Json(orders_dto)))
}

/// List orders for management with pagination and embedded lines.
///
/// # Access Control
/// - `Staff` - Staff or admin may manage orders
#[utoipa::path(
    get,
    path = "/api/orders/manage",
    tag = ORDER_TAG,
    params(
        ("status" = Option<String>, Query, description = "Exact status filter"),
        ("date_from" = Option<String>, Query, description = "First day (YYYY-MM-DD, inclusive)"),
        ("date_to" = Option<String>, Query, description = "Last day (YYYY-MM-DD, inclusive)"),
        ("room_number" = Option<String>, Query, description = "Only orders of this room number"),
        ("page" = Option<u64>, Query, description = "One-indexed page (default: 1)"),
        ("limit" = Option<u64>, Query, description = "Page size (default: 20)")
    ),
    responses(
        (status = 200, description = "One page of orders with lines", body = PaginatedOrdersDto),
        (status = 400, description = "Invalid status or date filter", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not staff or admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn manage_orders(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<ManageOrdersQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let status = match &query.status {
        Some(value) => Some(parse_status(value)?),
        None => None,
    };

    let date_from = match &query.date_from {
        Some(value) => Some(day_start(parse_date(value)?)),
        None => None,
    };

    let date_to = match &query.date_to {
        Some(value) => Some(day_end(parse_date(value)?)),
        None => None,
    };

    let service = OrderService::new(&state.db);

    let page = service
        .list_managed(ManageOrdersFilter {
            status,
            date_from,
            date_to,
            room_number: query.room_number.clone(),
            page: query.page,
            limit: query.limit,
        })
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto())))
}

/// Change the status of one order.
///
/// The acting user becomes the order's assignee; the hop is appended to the
/// history in the same transaction.
///
/// # Access Control
/// - `Staff` - Staff or admin may update order status
#[utoipa::path(
    patch,
    path = "/api/orders/{id}/status",
    tag = ORDER_TAG,
    params(
        ("id" = i32, Path, description = "Order id")
    ),
    request_body = UpdateOrderStatusDto,
    responses(
        (status = 200, description = "Status changed", body = OrderStatusUpdatedDto),
        (status = 400, description = "Invalid status", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not staff or admin", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_order_status(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateOrderStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let status = parse_status(&payload.status)?;

    let service = OrderService::new(&state.db);

    let order = service
        .update_status(UpdateOrderStatusParams {
            order_id: id,
            status,
            notes: payload.notes,
            changed_by: user.id,
        })
        .await?;

    Ok((
        StatusCode::OK,
        Json(OrderStatusUpdatedDto {
            order_number: order.order_number,
            status: order.status,
            updated_at: order.updated_at,
        }),
    ))
}

/// Change the status of several orders at once.
///
/// # Access Control
/// - `Staff` - Staff or admin may update order status
#[utoipa::path(
    patch,
    path = "/api/orders/bulk-status",
    tag = ORDER_TAG,
    request_body = BulkOrderStatusDto,
    responses(
        (status = 200, description = "Statuses changed", body = BulkStatusUpdatedDto),
        (status = 400, description = "Empty id list or invalid status", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not staff or admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn bulk_update_order_status(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<BulkOrderStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let status = parse_status(&payload.status)?;

    let service = OrderService::new(&state.db);

    let updated = service
        .bulk_update_status(BulkOrderStatusParams {
            order_ids: payload.order_ids,
            status,
            notes: payload.notes,
            changed_by: user.id,
        })
        .await?;

    Ok((
        StatusCode::OK,
        Json(BulkStatusUpdatedDto {
            updated,
            status: status.as_str().to_string(),
        }),
    ))
}

/// Get the status history of an order, newest first.
///
/// # Access Control
/// - `Staff` - Staff or admin may read order history
#[utoipa::path(
    get,
    path = "/api/orders/{id}/history",
    tag = ORDER_TAG,
    params(
        ("id" = i32, Path, description = "Order id")
    ),
    responses(
        (status = 200, description = "Status history", body = [OrderStatusHistoryDto]),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not staff or admin", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_order_history(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let service = OrderService::new(&state.db);

    let history = service.history(id).await?;
    let history_dto: Vec<_> = history.into_iter().map(HistoryEntry::into_dto).collect();

    Ok((StatusCode::OK, Json(history_dto)))
}
