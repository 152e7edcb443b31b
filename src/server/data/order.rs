//! Order data repository for database operations.
//!
//! Handles the order, order-line, and status-history tables. The repository is
//! generic over `ConnectionTrait` because the creation and status-update flows
//! run all their statements inside one transaction; the same methods also work
//! against the pooled connection for plain reads.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use std::collections::HashMap;

use crate::server::model::{
    dashboard::ActiveOrder,
    order::{
        HistoryEntry, ManageOrdersFilter, NewOrderLine, NewOrderRecord, OrderLine,
        OrderListFilter, OrderStatus, OrderWithLines, OrderWithRoom, UpdateOrderStatusParams,
    },
};

/// Repository providing database operations for orders, their lines, and
/// their status history.
pub struct OrderRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OrderRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts the order row of a new order in `pending` status.
    ///
    /// Part of the creation transaction; lines and the initial history row are
    /// inserted separately on the same connection.
    pub async fn create(&self, record: NewOrderRecord) -> Result<entity::order::Model, DbErr> {
        let now = Utc::now();

        entity::order::ActiveModel {
            room_id: ActiveValue::Set(record.room_id),
            order_number: ActiveValue::Set(record.order_number),
            customer_name: ActiveValue::Set(record.customer_name),
            customer_phone: ActiveValue::Set(record.customer_phone),
            total_cents: ActiveValue::Set(record.total_cents),
            status: ActiveValue::Set(OrderStatus::Pending.as_str().to_string()),
            special_instructions: ActiveValue::Set(record.special_instructions),
            estimated_delivery_at: ActiveValue::Set(record.estimated_delivery_at),
            assigned_staff_id: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Inserts one order line with its captured prices.
    pub async fn add_line(
        &self,
        order_id: i32,
        line: NewOrderLine,
    ) -> Result<entity::order_item::Model, DbErr> {
        entity::order_item::ActiveModel {
            order_id: ActiveValue::Set(order_id),
            menu_item_id: ActiveValue::Set(line.menu_item_id),
            quantity: ActiveValue::Set(line.quantity),
            unit_price_cents: ActiveValue::Set(line.unit_price_cents),
            subtotal_cents: ActiveValue::Set(line.subtotal_cents),
            special_requests: ActiveValue::Set(line.special_requests),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Appends a status history row for an order.
    ///
    /// `changed_by` is `None` for the guest-created initial row.
    pub async fn add_history(
        &self,
        order_id: i32,
        status: OrderStatus,
        changed_by: Option<i32>,
        notes: Option<String>,
    ) -> Result<entity::order_status_history::Model, DbErr> {
        entity::order_status_history::ActiveModel {
            order_id: ActiveValue::Set(order_id),
            status: ActiveValue::Set(status.as_str().to_string()),
            changed_by: ActiveValue::Set(changed_by),
            notes: ActiveValue::Set(notes),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::order::Model>, DbErr> {
        entity::prelude::Order::find_by_id(id).one(self.db).await
    }

    /// Gets one order with its room, assignee name, and all lines.
    pub async fn get_detail(&self, id: i32) -> Result<Option<OrderWithLines>, DbErr> {
        let Some((order, room)) = entity::prelude::Order::find_by_id(id)
            .find_also_related(entity::prelude::Room)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let room = room.ok_or_else(|| {
            DbErr::RecordNotFound(format!("Room for order {} not found", order.id))
        })?;

        let assigned_staff_name = match order.assigned_staff_id {
            Some(staff_id) => entity::prelude::User::find_by_id(staff_id)
                .one(self.db)
                .await?
                .map(|u| u.username),
            None => None,
        };

        let lines = self.lines_for_order_ids(&[order.id]).await?;
        let lines = lines
            .into_iter()
            .map(|(line, item)| OrderLine {
                menu_item_name: item.map(|i| i.name).unwrap_or_default(),
                line,
            })
            .collect();

        Ok(Some(OrderWithLines {
            order: OrderWithRoom {
                order,
                room,
                assigned_staff_name,
            },
            lines,
        }))
    }

    /// Lists orders for the staff view, newest first.
    ///
    /// Applies the status set, room filter, and limit/offset from the filter.
    pub async fn list(&self, filter: &OrderListFilter) -> Result<Vec<OrderWithRoom>, DbErr> {
        let mut query = entity::prelude::Order::find()
            .find_also_related(entity::prelude::Room)
            .order_by_desc(entity::order::Column::CreatedAt);

        if !filter.statuses.is_empty() {
            let statuses: Vec<&str> = filter.statuses.iter().map(OrderStatus::as_str).collect();
            query = query.filter(entity::order::Column::Status.is_in(statuses));
        }

        if let Some(room_id) = filter.room_id {
            query = query.filter(entity::order::Column::RoomId.eq(room_id));
        }

        if let Some(limit) = filter.limit {
            query = query.limit(limit);
        }

        if let Some(offset) = filter.offset {
            query = query.offset(offset);
        }

        let rows = query.all(self.db).await?;

        self.with_staff_names(rows).await
    }

    /// Lists orders for the management view with pagination and embedded lines.
    ///
    /// # Arguments
    /// - `filter` - Status, date window, room number, and one-indexed page
    ///
    /// # Returns
    /// - `Ok((orders, total))` - The requested page and the total match count
    pub async fn list_managed(
        &self,
        filter: &ManageOrdersFilter,
    ) -> Result<(Vec<OrderWithLines>, u64), DbErr> {
        let mut query = entity::prelude::Order::find()
            .find_also_related(entity::prelude::Room)
            .order_by_desc(entity::order::Column::CreatedAt);

        if let Some(status) = filter.status {
            query = query.filter(entity::order::Column::Status.eq(status.as_str()));
        }

        if let Some(from) = filter.date_from {
            query = query.filter(entity::order::Column::CreatedAt.gte(from));
        }

        if let Some(to) = filter.date_to {
            query = query.filter(entity::order::Column::CreatedAt.lte(to));
        }

        if let Some(room_number) = &filter.room_number {
            query = query.filter(entity::room::Column::RoomNumber.eq(room_number.as_str()));
        }

        let page = filter.page.max(1);
        let paginator = query.paginate(self.db, filter.limit);

        let total = paginator.num_items().await?;
        let rows = paginator.fetch_page(page - 1).await?;

        let orders = self.with_staff_names(rows).await?;

        // Attach lines for the page's orders in one query
        let order_ids: Vec<i32> = orders.iter().map(|o| o.order.id).collect();
        let lines = self.lines_for_order_ids(&order_ids).await?;

        let mut lines_by_order: HashMap<i32, Vec<OrderLine>> = HashMap::new();
        for (line, item) in lines {
            let order_id = line.order_id;
            lines_by_order.entry(order_id).or_default().push(OrderLine {
                menu_item_name: item.map(|i| i.name).unwrap_or_default(),
                line,
            });
        }

        let orders = orders
            .into_iter()
            .map(|order| {
                let lines = lines_by_order.remove(&order.order.id).unwrap_or_default();
                OrderWithLines { order, lines }
            })
            .collect();

        Ok((orders, total))
    }

    /// Updates status, assignee, and timestamp of one order.
    ///
    /// Part of the status-update transaction; the matching history row is
    /// appended separately on the same connection.
    ///
    /// # Returns
    /// - `Ok(Model)` - The updated order
    /// - `Err(DbErr::RecordNotFound)` - No order with that id
    pub async fn update_status(
        &self,
        params: &UpdateOrderStatusParams,
    ) -> Result<entity::order::Model, DbErr> {
        let order = entity::prelude::Order::find_by_id(params.order_id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Order with id {} not found",
                params.order_id
            )))?;

        let mut active_model: entity::order::ActiveModel = order.into();
        active_model.status = ActiveValue::Set(params.status.as_str().to_string());
        active_model.assigned_staff_id = ActiveValue::Set(Some(params.changed_by));
        active_model.updated_at = ActiveValue::Set(Utc::now());

        active_model.update(self.db).await
    }

    /// Sets the status of several orders at once.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of order rows updated
    pub async fn set_status_bulk(
        &self,
        order_ids: &[i32],
        status: OrderStatus,
    ) -> Result<u64, DbErr> {
        if order_ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::Order::update_many()
            .filter(entity::order::Column::Id.is_in(order_ids.to_vec()))
            .col_expr(
                entity::order::Column::Status,
                sea_orm::sea_query::Expr::value(status.as_str()),
            )
            .col_expr(
                entity::order::Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Gets the status history of an order, newest first, with the changing
    /// user's name joined in.
    pub async fn get_history(&self, order_id: i32) -> Result<Vec<HistoryEntry>, DbErr> {
        let rows = entity::prelude::OrderStatusHistory::find()
            .filter(entity::order_status_history::Column::OrderId.eq(order_id))
            .find_also_related(entity::prelude::User)
            .order_by_desc(entity::order_status_history::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(entry, user)| HistoryEntry {
                entry,
                changed_by_name: user.map(|u| u.username),
            })
            .collect())
    }

    /// Gets all orders created inside `[start, end)`.
    ///
    /// Raw rows for the dashboard and report aggregations, which are computed
    /// in the service.
    pub async fn list_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<entity::order::Model>, DbErr> {
        entity::prelude::Order::find()
            .filter(entity::order::Column::CreatedAt.gte(start))
            .filter(entity::order::Column::CreatedAt.lt(end))
            .order_by_desc(entity::order::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Counts orders currently in the given status.
    pub async fn count_with_status(&self, status: OrderStatus) -> Result<u64, DbErr> {
        entity::prelude::Order::find()
            .filter(entity::order::Column::Status.eq(status.as_str()))
            .count(self.db)
            .await
    }

    /// Gets the newest non-terminal orders with their room numbers.
    pub async fn active_with_room(&self, limit: u64) -> Result<Vec<ActiveOrder>, DbErr> {
        let terminal: Vec<&str> = OrderStatus::ALL
            .iter()
            .filter(|s| s.is_terminal())
            .map(OrderStatus::as_str)
            .collect();

        let rows = entity::prelude::Order::find()
            .find_also_related(entity::prelude::Room)
            .filter(entity::order::Column::Status.is_not_in(terminal))
            .order_by_desc(entity::order::Column::CreatedAt)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(order, room)| ActiveOrder {
                order,
                room_number: room.map(|r| r.room_number).unwrap_or_default(),
            })
            .collect())
    }

    /// Gets all lines of the given orders together with their menu items.
    pub async fn lines_for_order_ids(
        &self,
        order_ids: &[i32],
    ) -> Result<Vec<(entity::order_item::Model, Option<entity::menu_item::Model>)>, DbErr> {
        if order_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::OrderItem::find()
            .filter(entity::order_item::Column::OrderId.is_in(order_ids.to_vec()))
            .find_also_related(entity::prelude::MenuItem)
            .all(self.db)
            .await
    }

    /// Resolves assignee names for a batch of (order, room) rows.
    ///
    /// One query for all distinct staff ids instead of one per order.
    async fn with_staff_names(
        &self,
        rows: Vec<(entity::order::Model, Option<entity::room::Model>)>,
    ) -> Result<Vec<OrderWithRoom>, DbErr> {
        let mut staff_ids: Vec<i32> = rows
            .iter()
            .filter_map(|(order, _)| order.assigned_staff_id)
            .collect();
        staff_ids.sort_unstable();
        staff_ids.dedup();

        let names: HashMap<i32, String> = if staff_ids.is_empty() {
            HashMap::new()
        } else {
            entity::prelude::User::find()
                .filter(entity::user::Column::Id.is_in(staff_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|u| (u.id, u.username))
                .collect()
        };

        let mut orders = Vec::new();
        for (order, room) in rows {
            let room = room.ok_or_else(|| {
                DbErr::RecordNotFound(format!("Room for order {} not found", order.id))
            })?;

            let assigned_staff_name = order
                .assigned_staff_id
                .and_then(|id| names.get(&id).cloned());

            orders.push(OrderWithRoom {
                order,
                room,
                assigned_staff_name,
            });
        }

        Ok(orders)
    }
}
