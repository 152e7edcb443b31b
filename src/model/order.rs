use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One requested line of a new order.
#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct CreateOrderItemDto {
    pub menu_item_id: i32,
    pub quantity: i32,
    pub special_requests: Option<String>,
}

/// Guest request body for placing an order.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct CreateOrderDto {
    pub room_id: i32,
    pub customer_name: Option<String>,
    pub customer_phone: Option<String>,
    pub special_instructions: Option<String>,
    pub items: Vec<CreateOrderItemDto>,
}

/// Confirmation returned to the guest after the order transaction commits.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct OrderCreatedDto {
    pub id: i32,
    pub order_number: String,
    pub total_cents: i64,
    pub estimated_delivery_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Order row as listed for staff, with room and assignee context joined in.
#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct OrderSummaryDto {
    pub id: i32,
    pub order_number: String,
    pub customer_name: Option<String>,
    pub customer_phone: Option<String>,
    pub total_cents: i64,
    pub status: String,
    pub special_instructions: Option<String>,
    pub estimated_delivery_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub room_number: String,
    pub floor_number: i32,
    pub assigned_staff_name: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct OrderLineDto {
    pub id: i32,
    pub menu_item_id: i32,
    pub menu_item_name: String,
    pub quantity: i32,
    pub unit_price_cents: i64,
    pub subtotal_cents: i64,
    pub special_requests: Option<String>,
}

/// Full order with its lines, for the guest tracking view and staff management list.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct OrderDetailDto {
    pub id: i32,
    pub order_number: String,
    pub customer_name: Option<String>,
    pub customer_phone: Option<String>,
    pub total_cents: i64,
    pub status: String,
    pub special_instructions: Option<String>,
    pub estimated_delivery_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub room_number: String,
    pub floor_number: i32,
    pub assigned_staff_name: Option<String>,
    pub items: Vec<OrderLineDto>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct PaginationDto {
    pub page: u64,
    pub limit: u64,
    pub total: u64,
    pub total_pages: u64,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct PaginatedOrdersDto {
    pub orders: Vec<OrderDetailDto>,
    pub pagination: PaginationDto,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct UpdateOrderStatusDto {
    pub status: String,
    pub notes: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct BulkOrderStatusDto {
    pub order_ids: Vec<i32>,
    pub status: String,
    pub notes: Option<String>,
}

/// Result of a single-order status change.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct OrderStatusUpdatedDto {
    pub order_number: String,
    pub status: String,
    pub updated_at: DateTime<Utc>,
}

/// Result of a bulk status change.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct BulkStatusUpdatedDto {
    pub updated: u64,
    pub status: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct OrderStatusHistoryDto {
    pub status: String,
    pub notes: Option<String>,
    pub changed_by_name: Option<String>,
    pub created_at: DateTime<Utc>,
}
