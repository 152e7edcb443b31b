use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Aggregate counters for orders created today.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct TodayStatsDto {
    pub total_orders: u64,
    pub total_revenue_cents: i64,
    pub pending_orders: u64,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct StatusCountDto {
    pub status: String,
    pub count: u64,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ActiveOrderDto {
    pub id: i32,
    pub order_number: String,
    pub customer_name: Option<String>,
    pub total_cents: i64,
    pub status: String,
    pub estimated_delivery_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub room_number: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct PopularItemDto {
    pub name: String,
    pub total_quantity: i64,
    pub order_count: u64,
}

/// Staff dashboard payload.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct DashboardDto {
    pub today: TodayStatsDto,
    pub status_breakdown: Vec<StatusCountDto>,
    pub active_orders: Vec<ActiveOrderDto>,
    pub popular_items: Vec<PopularItemDto>,
}

/// One day of the admin revenue report.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct DailyReportDto {
    pub date: NaiveDate,
    pub total_orders: u64,
    pub total_revenue_cents: i64,
    pub delivered_orders: u64,
    pub cancelled_orders: u64,
}
