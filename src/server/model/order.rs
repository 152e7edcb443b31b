//! Order domain models and parameters.
//!
//! The order workflow is the heart of the application: guests create orders in
//! a single transaction, staff move them through the status lifecycle, and
//! every status hop is recorded in the history table. These types carry the
//! data between the controller, service, and data layers.

use chrono::{DateTime, Utc};

use crate::model::order::{
    CreateOrderDto, OrderCreatedDto, OrderDetailDto, OrderLineDto, OrderStatusHistoryDto,
    OrderSummaryDto, PaginatedOrdersDto, PaginationDto,
};
use crate::server::error::internal::InternalError;

/// Lifecycle status of an order.
///
/// No transition graph is enforced: staff may move an order from any status to
/// any other (matching the workflow where e.g. a cancelled order can be
/// reinstated). Every hop is recorded in the status history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Pending,
    Preparing,
    Ready,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// All known statuses, in lifecycle order.
    pub const ALL: [OrderStatus; 5] = [
        Self::Pending,
        Self::Preparing,
        Self::Ready,
        Self::Delivered,
        Self::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Preparing => "preparing",
            Self::Ready => "ready",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
        }
    }

    /// Parses a status string, returning `None` for unknown values.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(Self::Pending),
            "preparing" => Some(Self::Preparing),
            "ready" => Some(Self::Ready),
            "delivered" => Some(Self::Delivered),
            "cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }

    /// Parses a stored status, mapping unknown values to an internal error.
    pub fn from_stored(value: &str) -> Result<Self, InternalError> {
        Self::parse(value).ok_or(InternalError::UnknownOrderStatus {
            value: value.to_string(),
        })
    }

    /// Whether the order has left the active pipeline.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Delivered | Self::Cancelled)
    }
}

/// One requested line of a new order.
#[derive(Debug, Clone)]
pub struct NewOrderItem {
    pub menu_item_id: i32,
    pub quantity: i32,
    pub special_requests: Option<String>,
}

/// Parameters for the order-creation transaction.
#[derive(Debug, Clone)]
pub struct NewOrderParams {
    pub room_id: i32,
    pub customer_name: Option<String>,
    pub customer_phone: Option<String>,
    pub special_instructions: Option<String>,
    pub items: Vec<NewOrderItem>,
}

impl NewOrderParams {
    pub fn from_dto(dto: CreateOrderDto) -> Self {
        Self {
            room_id: dto.room_id,
            customer_name: dto.customer_name,
            customer_phone: dto.customer_phone,
            special_instructions: dto.special_instructions,
            items: dto
                .items
                .into_iter()
                .map(|item| NewOrderItem {
                    menu_item_id: item.menu_item_id,
                    quantity: item.quantity,
                    special_requests: item.special_requests,
                })
                .collect(),
        }
    }
}

/// Computed column values for the order row inserted by the creation
/// transaction. Built by the service after pricing; the repository only
/// persists it.
#[derive(Debug, Clone)]
pub struct NewOrderRecord {
    pub room_id: i32,
    pub order_number: String,
    pub customer_name: Option<String>,
    pub customer_phone: Option<String>,
    pub total_cents: i64,
    pub special_instructions: Option<String>,
    pub estimated_delivery_at: DateTime<Utc>,
}

/// Computed column values for one order line, with the price captured at
/// order time.
#[derive(Debug, Clone)]
pub struct NewOrderLine {
    pub menu_item_id: i32,
    pub quantity: i32,
    pub unit_price_cents: i64,
    pub subtotal_cents: i64,
    pub special_requests: Option<String>,
}

/// Confirmation data for a freshly committed order.
#[derive(Debug, Clone)]
pub struct CreatedOrder {
    pub id: i32,
    pub order_number: String,
    pub total_cents: i64,
    pub estimated_delivery_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl CreatedOrder {
    pub fn into_dto(self) -> OrderCreatedDto {
        OrderCreatedDto {
            id: self.id,
            order_number: self.order_number,
            total_cents: self.total_cents,
            estimated_delivery_at: self.estimated_delivery_at,
            created_at: self.created_at,
        }
    }
}

/// An order joined with its room and the assignee's name.
#[derive(Debug, Clone)]
pub struct OrderWithRoom {
    pub order: entity::order::Model,
    pub room: entity::room::Model,
    pub assigned_staff_name: Option<String>,
}

impl OrderWithRoom {
    pub fn into_summary_dto(self) -> OrderSummaryDto {
        OrderSummaryDto {
            id: self.order.id,
            order_number: self.order.order_number,
            customer_name: self.order.customer_name,
            customer_phone: self.order.customer_phone,
            total_cents: self.order.total_cents,
            status: self.order.status,
            special_instructions: self.order.special_instructions,
            estimated_delivery_at: self.order.estimated_delivery_at,
            created_at: self.order.created_at,
            updated_at: self.order.updated_at,
            room_number: self.room.room_number,
            floor_number: self.room.floor_number,
            assigned_staff_name: self.assigned_staff_name,
        }
    }
}

/// One order line enriched with the menu item name.
#[derive(Debug, Clone)]
pub struct OrderLine {
    pub line: entity::order_item::Model,
    pub menu_item_name: String,
}

impl OrderLine {
    pub fn into_dto(self) -> OrderLineDto {
        OrderLineDto {
            id: self.line.id,
            menu_item_id: self.line.menu_item_id,
            menu_item_name: self.menu_item_name,
            quantity: self.line.quantity,
            unit_price_cents: self.line.unit_price_cents,
            subtotal_cents: self.line.subtotal_cents,
            special_requests: self.line.special_requests,
        }
    }
}

/// Full order detail: room context plus all lines.
#[derive(Debug, Clone)]
pub struct OrderWithLines {
    pub order: OrderWithRoom,
    pub lines: Vec<OrderLine>,
}

impl OrderWithLines {
    pub fn into_dto(self) -> OrderDetailDto {
        let summary = self.order.into_summary_dto();

        OrderDetailDto {
            id: summary.id,
            order_number: summary.order_number,
            customer_name: summary.customer_name,
            customer_phone: summary.customer_phone,
            total_cents: summary.total_cents,
            status: summary.status,
            special_instructions: summary.special_instructions,
            estimated_delivery_at: summary.estimated_delivery_at,
            created_at: summary.created_at,
            updated_at: summary.updated_at,
            room_number: summary.room_number,
            floor_number: summary.floor_number,
            assigned_staff_name: summary.assigned_staff_name,
            items: self.lines.into_iter().map(OrderLine::into_dto).collect(),
        }
    }
}

/// Filters for the flat staff order list.
#[derive(Debug, Clone, Default)]
pub struct OrderListFilter {
    /// Match any of these statuses; empty means no status filter.
    pub statuses: Vec<OrderStatus>,
    pub room_id: Option<i32>,
    /// `None` returns every match (the in-room order list).
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

/// Filters for the paginated management list.
#[derive(Debug, Clone, Default)]
pub struct ManageOrdersFilter {
    pub status: Option<OrderStatus>,
    pub date_from: Option<DateTime<Utc>>,
    pub date_to: Option<DateTime<Utc>>,
    pub room_number: Option<String>,
    /// One-indexed page number.
    pub page: u64,
    pub limit: u64,
}

/// A page of orders with lines plus pagination metadata.
#[derive(Debug, Clone)]
pub struct PaginatedOrders {
    pub orders: Vec<OrderWithLines>,
    pub page: u64,
    pub limit: u64,
    pub total: u64,
    pub total_pages: u64,
}

impl PaginatedOrders {
    pub fn into_dto(self) -> PaginatedOrdersDto {
        PaginatedOrdersDto {
            orders: self
                .orders
                .into_iter()
                .map(OrderWithLines::into_dto)
                .collect(),
            pagination: PaginationDto {
                page: self.page,
                limit: self.limit,
                total: self.total,
                total_pages: self.total_pages,
            },
        }
    }
}

/// Parameters for a single-order status change by staff.
#[derive(Debug, Clone)]
pub struct UpdateOrderStatusParams {
    pub order_id: i32,
    pub status: OrderStatus,
    pub notes: Option<String>,
    /// Id of the staff user making the change; recorded in the history and as
    /// the order's assignee.
    pub changed_by: i32,
}

/// Parameters for a bulk status change by staff.
#[derive(Debug, Clone)]
pub struct BulkOrderStatusParams {
    pub order_ids: Vec<i32>,
    pub status: OrderStatus,
    pub notes: Option<String>,
    pub changed_by: i32,
}

/// One history row enriched with the changing user's name.
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub entry: entity::order_status_history::Model,
    pub changed_by_name: Option<String>,
}

impl HistoryEntry {
    pub fn into_dto(self) -> OrderStatusHistoryDto {
        OrderStatusHistoryDto {
            status: self.entry.status,
            notes: self.entry.notes,
            changed_by_name: self.changed_by_name,
            created_at: self.entry.created_at,
        }
    }
}
