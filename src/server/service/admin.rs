//! Dashboard and report aggregation.
//!
//! Both endpoints are read-only projections over the order tables. Rows are
//! fetched for the relevant date window and aggregated here rather than with
//! dialect-specific SQL date functions.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use sea_orm::DatabaseConnection;
use std::collections::{BTreeMap, HashMap, HashSet};

use crate::server::{
    data::order::OrderRepository,
    error::AppError,
    model::{
        dashboard::{DailyReportRow, DashboardStats, PopularItem},
        order::OrderStatus,
    },
};

/// How many active orders the dashboard shows.
const DASHBOARD_ACTIVE_ORDERS: u64 = 20;
/// How many popular items the dashboard ranks.
const DASHBOARD_POPULAR_ITEMS: usize = 10;
/// Report window when the caller gives no dates.
const DEFAULT_REPORT_DAYS: i64 = 30;

/// Service assembling the staff dashboard and the admin daily report.
pub struct AdminService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> AdminService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Builds the staff dashboard.
    ///
    /// Aggregates today's order count, revenue, and per-status breakdown,
    /// counts pending orders overall, lists the newest active orders, and
    /// ranks today's most ordered items.
    pub async fn dashboard(&self) -> Result<DashboardStats, AppError> {
        let order_repo = OrderRepository::new(self.db);

        let today_start = day_start(Utc::now().date_naive());
        let today_end = today_start + Duration::days(1);

        let todays_orders = order_repo.list_between(today_start, today_end).await?;

        let total_orders_today = todays_orders.len() as u64;
        let total_revenue_today_cents = todays_orders.iter().map(|o| o.total_cents).sum();

        // Per-status counts for today, in lifecycle order, skipping zeroes
        let mut counts: HashMap<&str, u64> = HashMap::new();
        for order in &todays_orders {
            *counts.entry(order.status.as_str()).or_default() += 1;
        }
        let status_breakdown = OrderStatus::ALL
            .iter()
            .filter_map(|status| {
                counts
                    .get(status.as_str())
                    .map(|count| (status.as_str().to_string(), *count))
            })
            .collect();

        let pending_orders = order_repo.count_with_status(OrderStatus::Pending).await?;

        let active_orders = order_repo.active_with_room(DASHBOARD_ACTIVE_ORDERS).await?;

        let popular_items = self
            .popular_items(&order_repo, &todays_orders)
            .await?;

        Ok(DashboardStats {
            total_orders_today,
            total_revenue_today_cents,
            pending_orders,
            status_breakdown,
            active_orders,
            popular_items,
        })
    }

    /// Builds the per-day revenue report for the given window.
    ///
    /// Defaults to the last 30 days up to today. Days without orders are
    /// omitted, newest day first.
    ///
    /// # Arguments
    /// - `start_date` - First day of the window (inclusive), optional
    /// - `end_date` - Last day of the window (inclusive), optional
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - Window start after window end
    pub async fn daily_report(
        &self,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<Vec<DailyReportRow>, AppError> {
        let end_date = end_date.unwrap_or_else(|| Utc::now().date_naive());
        let start_date = start_date.unwrap_or(end_date - Duration::days(DEFAULT_REPORT_DAYS));

        if start_date > end_date {
            return Err(AppError::BadRequest(
                "Start date must not be after end date".to_string(),
            ));
        }

        let order_repo = OrderRepository::new(self.db);
        let orders = order_repo
            .list_between(day_start(start_date), day_start(end_date) + Duration::days(1))
            .await?;

        let mut days: BTreeMap<NaiveDate, DailyReportRow> = BTreeMap::new();
        for order in orders {
            let date = order.created_at.date_naive();
            let row = days.entry(date).or_insert_with(|| DailyReportRow {
                date,
                total_orders: 0,
                total_revenue_cents: 0,
                delivered_orders: 0,
                cancelled_orders: 0,
            });

            row.total_orders += 1;
            row.total_revenue_cents += order.total_cents;

            match OrderStatus::from_stored(&order.status)? {
                OrderStatus::Delivered => row.delivered_orders += 1,
                OrderStatus::Cancelled => row.cancelled_orders += 1,
                _ => {}
            }
        }

        Ok(days.into_values().rev().collect())
    }

    /// Ranks today's items by total quantity ordered.
    async fn popular_items(
        &self,
        order_repo: &OrderRepository<'_, DatabaseConnection>,
        todays_orders: &[entity::order::Model],
    ) -> Result<Vec<PopularItem>, AppError> {
        let order_ids: Vec<i32> = todays_orders.iter().map(|o| o.id).collect();
        let lines = order_repo.lines_for_order_ids(&order_ids).await?;

        // name -> (total quantity, distinct orders)
        let mut by_item: HashMap<String, (i64, HashSet<i32>)> = HashMap::new();
        for (line, menu_item) in lines {
            let name = menu_item.map(|i| i.name).unwrap_or_default();
            let entry = by_item.entry(name).or_default();
            entry.0 += line.quantity as i64;
            entry.1.insert(line.order_id);
        }

        let mut items: Vec<PopularItem> = by_item
            .into_iter()
            .map(|(name, (total_quantity, orders))| PopularItem {
                name,
                total_quantity,
                order_count: orders.len() as u64,
            })
            .collect();

        items.sort_by(|a, b| b.total_quantity.cmp(&a.total_quantity));
        items.truncate(DASHBOARD_POPULAR_ITEMS);

        Ok(items)
    }
}

/// Midnight UTC at the start of the given day.
fn day_start(date: NaiveDate) -> DateTime<Utc> {
    DateTime::from_naive_utc_and_offset(date.and_time(NaiveTime::MIN), Utc)
}
