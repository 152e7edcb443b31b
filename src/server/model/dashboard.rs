//! Dashboard and report projections.
//!
//! Read-only aggregates assembled by the admin service from order rows; no
//! entity maps one-to-one onto these.

use chrono::NaiveDate;

use crate::model::dashboard::{
    ActiveOrderDto, DailyReportDto, DashboardDto, PopularItemDto, StatusCountDto, TodayStatsDto,
};

/// An active order with its room number, as shown on the dashboard.
#[derive(Debug, Clone)]
pub struct ActiveOrder {
    pub order: entity::order::Model,
    pub room_number: String,
}

impl ActiveOrder {
    pub fn into_dto(self) -> ActiveOrderDto {
        ActiveOrderDto {
            id: self.order.id,
            order_number: self.order.order_number,
            customer_name: self.order.customer_name,
            total_cents: self.order.total_cents,
            status: self.order.status,
            estimated_delivery_at: self.order.estimated_delivery_at,
            created_at: self.order.created_at,
            room_number: self.room_number,
        }
    }
}

/// A menu item ranked by how often it was ordered today.
#[derive(Debug, Clone)]
pub struct PopularItem {
    pub name: String,
    pub total_quantity: i64,
    pub order_count: u64,
}

/// Everything the staff dashboard shows in one payload.
#[derive(Debug, Clone)]
pub struct DashboardStats {
    pub total_orders_today: u64,
    pub total_revenue_today_cents: i64,
    pub pending_orders: u64,
    /// (status, count) pairs for today's orders.
    pub status_breakdown: Vec<(String, u64)>,
    pub active_orders: Vec<ActiveOrder>,
    pub popular_items: Vec<PopularItem>,
}

impl DashboardStats {
    pub fn into_dto(self) -> DashboardDto {
        DashboardDto {
            today: TodayStatsDto {
                total_orders: self.total_orders_today,
                total_revenue_cents: self.total_revenue_today_cents,
                pending_orders: self.pending_orders,
            },
            status_breakdown: self
                .status_breakdown
                .into_iter()
                .map(|(status, count)| StatusCountDto { status, count })
                .collect(),
            active_orders: self
                .active_orders
                .into_iter()
                .map(ActiveOrder::into_dto)
                .collect(),
            popular_items: self
                .popular_items
                .into_iter()
                .map(|item| PopularItemDto {
                    name: item.name,
                    total_quantity: item.total_quantity,
                    order_count: item.order_count,
                })
                .collect(),
        }
    }
}

/// One day of the revenue report.
#[derive(Debug, Clone)]
pub struct DailyReportRow {
    pub date: NaiveDate,
    pub total_orders: u64,
    pub total_revenue_cents: i64,
    pub delivered_orders: u64,
    pub cancelled_orders: u64,
}

impl DailyReportRow {
    pub fn into_dto(self) -> DailyReportDto {
        DailyReportDto {
            date: self.date,
            total_orders: self.total_orders,
            total_revenue_cents: self.total_revenue_cents,
            delivered_orders: self.delivered_orders,
            cancelled_orders: self.cancelled_orders,
        }
    }
}
