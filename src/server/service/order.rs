//! Order business logic.
//!
//! Owns the two transactional flows of the application: order creation
//! (pricing, delivery estimation, multi-row insert) and status changes
//! (order update plus history append). Everything inside a flow runs on one
//! transaction; an early `?` drops the transaction and rolls the whole flow
//! back.

use chrono::{Duration, Utc};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{menu::MenuItemRepository, order::OrderRepository, room::RoomRepository},
    error::AppError,
    model::order::{
        BulkOrderStatusParams, CreatedOrder, HistoryEntry, ManageOrdersFilter, NewOrderLine,
        NewOrderParams, NewOrderRecord, OrderListFilter, OrderStatus, OrderWithLines,
        OrderWithRoom, PaginatedOrders, UpdateOrderStatusParams,
    },
    util::order_number::generate_order_number,
};

/// Minutes added on top of the longest preparation time to estimate delivery.
const DELIVERY_BUFFER_MINUTES: i64 = 10;

/// Service providing business logic for orders.
pub struct OrderService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> OrderService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an order in a single all-or-nothing transaction.
    ///
    /// Validates the room and every requested line, captures unit prices and
    /// subtotals at order time, computes the total and the estimated delivery
    /// time (longest preparation time plus a fixed delivery buffer), and
    /// inserts the order row, all line rows, and the initial `pending`
    /// history row. Any failure rolls the entire transaction back so no
    /// partial order is ever visible.
    ///
    /// # Arguments
    /// - `params` - Room, customer fields, and the requested lines
    ///
    /// # Returns
    /// - `Ok(CreatedOrder)` - Confirmation data for the committed order
    /// - `Err(AppError::BadRequest)` - Empty items, bad quantity, or an
    ///   unknown/unavailable menu item
    /// - `Err(AppError::NotFound)` - Unknown room
    pub async fn create_order(&self, params: NewOrderParams) -> Result<CreatedOrder, AppError> {
        if params.items.is_empty() {
            return Err(AppError::BadRequest(
                "Room ID and items are required".to_string(),
            ));
        }

        for item in &params.items {
            if item.quantity < 1 {
                return Err(AppError::BadRequest(format!(
                    "Invalid quantity for menu item {}",
                    item.menu_item_id
                )));
            }
        }

        let txn = self.db.begin().await?;

        let room_repo = RoomRepository::new(&txn);
        if room_repo.find_by_id(params.room_id).await?.is_none() {
            return Err(AppError::NotFound("Room not found".to_string()));
        }

        // Price every line against the current menu inside the transaction so
        // a concurrent menu edit cannot split the order across two price sets.
        let item_repo = MenuItemRepository::new(&txn);
        let mut total_cents: i64 = 0;
        let mut max_preparation_minutes: i32 = 0;
        let mut lines = Vec::with_capacity(params.items.len());

        for requested in &params.items {
            let Some(menu_item) = item_repo
                .find_available_by_id(requested.menu_item_id)
                .await?
            else {
                return Err(AppError::BadRequest(format!(
                    "Menu item {} not found or unavailable",
                    requested.menu_item_id
                )));
            };

            let subtotal_cents = menu_item.price_cents * requested.quantity as i64;
            total_cents += subtotal_cents;
            max_preparation_minutes = max_preparation_minutes.max(menu_item.preparation_minutes);

            lines.push(NewOrderLine {
                menu_item_id: menu_item.id,
                quantity: requested.quantity,
                unit_price_cents: menu_item.price_cents,
                subtotal_cents,
                special_requests: requested.special_requests.clone(),
            });
        }

        let estimated_delivery_at = Utc::now()
            + Duration::minutes(max_preparation_minutes as i64 + DELIVERY_BUFFER_MINUTES);

        let order_repo = OrderRepository::new(&txn);
        let order = order_repo
            .create(NewOrderRecord {
                room_id: params.room_id,
                order_number: generate_order_number(),
                customer_name: params.customer_name,
                customer_phone: params.customer_phone,
                total_cents,
                special_instructions: params.special_instructions,
                estimated_delivery_at,
            })
            .await?;

        for line in lines {
            order_repo.add_line(order.id, line).await?;
        }

        order_repo
            .add_history(
                order.id,
                OrderStatus::Pending,
                None,
                Some("Order created".to_string()),
            )
            .await?;

        txn.commit().await?;

        Ok(CreatedOrder {
            id: order.id,
            order_number: order.order_number,
            total_cents: order.total_cents,
            estimated_delivery_at: order.estimated_delivery_at,
            created_at: order.created_at,
        })
    }

    /// Gets one order with room context and lines.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - No order with that id
    pub async fn get_detail(&self, id: i32) -> Result<OrderWithLines, AppError> {
        let order_repo = OrderRepository::new(self.db);

        order_repo
            .get_detail(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Order not found".to_string()))
    }

    /// Lists orders for the staff view.
    pub async fn list(&self, filter: OrderListFilter) -> Result<Vec<OrderWithRoom>, AppError> {
        let order_repo = OrderRepository::new(self.db);
        Ok(order_repo.list(&filter).await?)
    }

    /// Lists orders for the management view with pagination metadata.
    pub async fn list_managed(
        &self,
        filter: ManageOrdersFilter,
    ) -> Result<PaginatedOrders, AppError> {
        let order_repo = OrderRepository::new(self.db);

        let page = filter.page.max(1);
        let limit = filter.limit.max(1);
        let filter = ManageOrdersFilter {
            page,
            limit,
            ..filter
        };

        let (orders, total) = order_repo.list_managed(&filter).await?;
        let total_pages = (total as f64 / limit as f64).ceil() as u64;

        Ok(PaginatedOrders {
            orders,
            page,
            limit,
            total,
            total_pages,
        })
    }

    /// Changes the status of one order and records the hop, in one transaction.
    ///
    /// The acting staff user becomes the order's assignee and is recorded in
    /// the history row.
    ///
    /// # Returns
    /// - `Ok(Model)` - The updated order row
    /// - `Err(AppError::NotFound)` - No order with that id
    pub async fn update_status(
        &self,
        params: UpdateOrderStatusParams,
    ) -> Result<entity::order::Model, AppError> {
        let txn = self.db.begin().await?;

        let order_repo = OrderRepository::new(&txn);

        if order_repo.find_by_id(params.order_id).await?.is_none() {
            return Err(AppError::NotFound("Order not found".to_string()));
        }

        let order = order_repo.update_status(&params).await?;

        order_repo
            .add_history(
                params.order_id,
                params.status,
                Some(params.changed_by),
                params.notes,
            )
            .await?;

        txn.commit().await?;

        Ok(order)
    }

    /// Changes the status of several orders, with one history row each, in one
    /// transaction.
    ///
    /// Ids that match no order are skipped; the returned count reflects the
    /// orders actually updated.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of orders updated
    /// - `Err(AppError::BadRequest)` - Empty id list
    pub async fn bulk_update_status(&self, params: BulkOrderStatusParams) -> Result<u64, AppError> {
        if params.order_ids.is_empty() {
            return Err(AppError::BadRequest(
                "Order IDs array and status are required".to_string(),
            ));
        }

        let txn = self.db.begin().await?;

        let order_repo = OrderRepository::new(&txn);

        // Only touch orders that exist; history rows must reference real orders
        let mut existing_ids = Vec::with_capacity(params.order_ids.len());
        for id in &params.order_ids {
            if order_repo.find_by_id(*id).await?.is_some() {
                existing_ids.push(*id);
            }
        }

        let updated = order_repo
            .set_status_bulk(&existing_ids, params.status)
            .await?;

        for order_id in &existing_ids {
            order_repo
                .add_history(
                    *order_id,
                    params.status,
                    Some(params.changed_by),
                    params.notes.clone(),
                )
                .await?;
        }

        txn.commit().await?;

        Ok(updated)
    }

    /// Gets the status history of an order, newest first.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - No order with that id
    pub async fn history(&self, order_id: i32) -> Result<Vec<HistoryEntry>, AppError> {
        let order_repo = OrderRepository::new(self.db);

        if order_repo.find_by_id(order_id).await?.is_none() {
            return Err(AppError::NotFound("Order not found".to_string()));
        }

        Ok(order_repo.get_history(order_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::model::order::NewOrderItem;
    use sea_orm::{EntityTrait, PaginatorTrait};
    use test_utils::{builder::TestBuilder, factory};

    fn order_params(room_id: i32, items: Vec<NewOrderItem>) -> NewOrderParams {
        NewOrderParams {
            room_id,
            customer_name: Some("Jamie Vega".to_string()),
            customer_phone: None,
            special_instructions: None,
            items,
        }
    }

    fn line(menu_item_id: i32, quantity: i32) -> NewOrderItem {
        NewOrderItem {
            menu_item_id,
            quantity,
            special_requests: None,
        }
    }

    #[tokio::test]
    async fn creates_order_with_pricing_and_initial_history() {
        let test = TestBuilder::new().with_order_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let room = factory::room::create_room(db).await.unwrap();
        let category = factory::menu_category::create_category(db).await.unwrap();
        let burger = factory::menu_item::MenuItemFactory::new(db, category.id)
            .name("Burger")
            .price_cents(1200)
            .preparation_minutes(20)
            .build()
            .await
            .unwrap();
        let cola = factory::menu_item::MenuItemFactory::new(db, category.id)
            .name("Cola")
            .price_cents(300)
            .preparation_minutes(5)
            .build()
            .await
            .unwrap();

        let service = OrderService::new(db);
        let before = Utc::now();
        let created = service
            .create_order(order_params(
                room.id,
                vec![line(burger.id, 2), line(cola.id, 1)],
            ))
            .await
            .unwrap();

        // 2 x 1200 + 1 x 300
        assert_eq!(created.total_cents, 2700);
        assert!(created.order_number.starts_with("ORDER"));

        // Longest preparation (20) plus the 10 minute delivery buffer
        let expected = before + Duration::minutes(30);
        let drift = (created.estimated_delivery_at - expected).num_seconds().abs();
        assert!(drift < 5, "delivery estimate off by {}s", drift);

        let lines = entity::prelude::OrderItem::find().all(db).await.unwrap();
        assert_eq!(lines.len(), 2);
        let line_total: i64 = lines.iter().map(|l| l.subtotal_cents).sum();
        assert_eq!(line_total, created.total_cents);

        let history = entity::prelude::OrderStatusHistory::find()
            .all(db)
            .await
            .unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].status, "pending");
        assert_eq!(history[0].changed_by, None);
        assert_eq!(history[0].notes.as_deref(), Some("Order created"));
    }

    #[tokio::test]
    async fn captures_prices_at_order_time() {
        let test = TestBuilder::new().with_order_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let room = factory::room::create_room(db).await.unwrap();
        let category = factory::menu_category::create_category(db).await.unwrap();
        let item = factory::menu_item::MenuItemFactory::new(db, category.id)
            .price_cents(900)
            .build()
            .await
            .unwrap();

        let service = OrderService::new(db);
        let created = service
            .create_order(order_params(room.id, vec![line(item.id, 1)]))
            .await
            .unwrap();

        let stored_line = entity::prelude::OrderItem::find()
            .one(db)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored_line.unit_price_cents, 900);
        assert_eq!(created.total_cents, 900);
    }

    #[tokio::test]
    async fn rolls_back_entirely_when_an_item_is_unavailable() {
        let test = TestBuilder::new().with_order_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let room = factory::room::create_room(db).await.unwrap();
        let category = factory::menu_category::create_category(db).await.unwrap();
        let good = factory::menu_item::create_menu_item(db, category.id)
            .await
            .unwrap();
        let off_menu = factory::menu_item::MenuItemFactory::new(db, category.id)
            .is_available(false)
            .build()
            .await
            .unwrap();

        let service = OrderService::new(db);
        let result = service
            .create_order(order_params(
                room.id,
                vec![line(good.id, 1), line(off_menu.id, 1)],
            ))
            .await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));

        // The whole transaction must have rolled back: no partial rows
        assert_eq!(entity::prelude::Order::find().count(db).await.unwrap(), 0);
        assert_eq!(
            entity::prelude::OrderItem::find().count(db).await.unwrap(),
            0
        );
        assert_eq!(
            entity::prelude::OrderStatusHistory::find()
                .count(db)
                .await
                .unwrap(),
            0
        );
    }

    #[tokio::test]
    async fn rejects_empty_item_list() {
        let test = TestBuilder::new().with_order_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let room = factory::room::create_room(db).await.unwrap();

        let service = OrderService::new(db);
        let result = service.create_order(order_params(room.id, vec![])).await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn rejects_non_positive_quantity() {
        let test = TestBuilder::new().with_order_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let room = factory::room::create_room(db).await.unwrap();
        let category = factory::menu_category::create_category(db).await.unwrap();
        let item = factory::menu_item::create_menu_item(db, category.id)
            .await
            .unwrap();

        let service = OrderService::new(db);
        let result = service
            .create_order(order_params(room.id, vec![line(item.id, 0)]))
            .await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
        assert_eq!(entity::prelude::Order::find().count(db).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn rejects_unknown_room() {
        let test = TestBuilder::new().with_order_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let category = factory::menu_category::create_category(db).await.unwrap();
        let item = factory::menu_item::create_menu_item(db, category.id)
            .await
            .unwrap();

        let service = OrderService::new(db);
        let result = service
            .create_order(order_params(4242, vec![line(item.id, 1)]))
            .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn status_update_appends_history_and_assigns_staff() {
        let test = TestBuilder::new().with_order_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let staff = factory::user::create_staff(db).await.unwrap();
        let room = factory::room::create_room(db).await.unwrap();
        let order = factory::order::create_order(db, room.id).await.unwrap();

        let service = OrderService::new(db);
        let updated = service
            .update_status(UpdateOrderStatusParams {
                order_id: order.id,
                status: OrderStatus::Preparing,
                notes: Some("On it".to_string()),
                changed_by: staff.id,
            })
            .await
            .unwrap();

        assert_eq!(updated.status, "preparing");
        assert_eq!(updated.assigned_staff_id, Some(staff.id));

        let history = service.history(order.id).await.unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].entry.status, "preparing");
        assert_eq!(history[0].entry.changed_by, Some(staff.id));
        assert_eq!(history[0].entry.notes.as_deref(), Some("On it"));
    }

    #[tokio::test]
    async fn bulk_update_skips_missing_orders() {
        let test = TestBuilder::new().with_order_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let staff = factory::user::create_staff(db).await.unwrap();
        let room = factory::room::create_room(db).await.unwrap();
        let a = factory::order::create_order(db, room.id).await.unwrap();
        let b = factory::order::create_order(db, room.id).await.unwrap();

        let service = OrderService::new(db);
        let updated = service
            .bulk_update_status(BulkOrderStatusParams {
                order_ids: vec![a.id, b.id, 4242],
                status: OrderStatus::Ready,
                notes: None,
                changed_by: staff.id,
            })
            .await
            .unwrap();

        assert_eq!(updated, 2);

        // One history row per updated order, none for the unknown id
        assert_eq!(
            entity::prelude::OrderStatusHistory::find()
                .count(db)
                .await
                .unwrap(),
            2
        );
    }

    #[tokio::test]
    async fn history_requires_existing_order() {
        let test = TestBuilder::new().with_order_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let service = OrderService::new(db);
        let result = service.history(4242).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
