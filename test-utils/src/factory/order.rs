//! Order factory for creating test order entities and related rows.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test orders with customizable fields.
///
/// Orders require an existing room, so the factory takes the room id up
/// front. The `created_at` override exists for date-windowed queries
/// (dashboard, reports) that need orders on specific days.
pub struct OrderFactory<'a> {
    db: &'a DatabaseConnection,
    room_id: i32,
    order_number: String,
    customer_name: Option<String>,
    customer_phone: Option<String>,
    total_cents: i64,
    status: String,
    special_instructions: Option<String>,
    estimated_delivery_at: DateTime<Utc>,
    assigned_staff_id: Option<i32>,
    created_at: DateTime<Utc>,
}

impl<'a> OrderFactory<'a> {
    /// Creates a new OrderFactory with default values.
    ///
    /// Defaults:
    /// - order_number: `"ORDER{id:010}"` where id is auto-incremented
    /// - status: `"pending"`
    /// - total_cents: `0`
    /// - estimated_delivery_at: 25 minutes from now
    /// - created_at: now
    /// - everything else: unset
    pub fn new(db: &'a DatabaseConnection, room_id: i32) -> Self {
        let now = Utc::now();
        Self {
            db,
            room_id,
            order_number: format!("ORDER{:010}", next_id()),
            customer_name: None,
            customer_phone: None,
            total_cents: 0,
            status: "pending".to_string(),
            special_instructions: None,
            estimated_delivery_at: now + Duration::minutes(25),
            assigned_staff_id: None,
            created_at: now,
        }
    }

    pub fn order_number(mut self, order_number: impl Into<String>) -> Self {
        self.order_number = order_number.into();
        self
    }

    pub fn customer_name(mut self, customer_name: Option<String>) -> Self {
        self.customer_name = customer_name;
        self
    }

    pub fn total_cents(mut self, total_cents: i64) -> Self {
        self.total_cents = total_cents;
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn assigned_staff_id(mut self, assigned_staff_id: Option<i32>) -> Self {
        self.assigned_staff_id = assigned_staff_id;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the order entity into the database.
    pub async fn build(self) -> Result<entity::order::Model, DbErr> {
        entity::order::ActiveModel {
            room_id: ActiveValue::Set(self.room_id),
            order_number: ActiveValue::Set(self.order_number),
            customer_name: ActiveValue::Set(self.customer_name),
            customer_phone: ActiveValue::Set(self.customer_phone),
            total_cents: ActiveValue::Set(self.total_cents),
            status: ActiveValue::Set(self.status),
            special_instructions: ActiveValue::Set(self.special_instructions),
            estimated_delivery_at: ActiveValue::Set(self.estimated_delivery_at),
            assigned_staff_id: ActiveValue::Set(self.assigned_staff_id),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an order with default values for the given room.
///
/// Shorthand for `OrderFactory::new(db, room_id).build().await`.
pub async fn create_order(
    db: &DatabaseConnection,
    room_id: i32,
) -> Result<entity::order::Model, DbErr> {
    OrderFactory::new(db, room_id).build().await
}

/// Creates an order line for an existing order and menu item.
///
/// The subtotal is computed from quantity and unit price the same way the
/// application does at order time.
pub async fn create_order_item(
    db: &DatabaseConnection,
    order_id: i32,
    menu_item_id: i32,
    quantity: i32,
    unit_price_cents: i64,
) -> Result<entity::order_item::Model, DbErr> {
    entity::order_item::ActiveModel {
        order_id: ActiveValue::Set(order_id),
        menu_item_id: ActiveValue::Set(menu_item_id),
        quantity: ActiveValue::Set(quantity),
        unit_price_cents: ActiveValue::Set(unit_price_cents),
        subtotal_cents: ActiveValue::Set(unit_price_cents * quantity as i64),
        special_requests: ActiveValue::Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a status history row for an existing order.
pub async fn create_status_history(
    db: &DatabaseConnection,
    order_id: i32,
    status: impl Into<String>,
    changed_by: Option<i32>,
) -> Result<entity::order_status_history::Model, DbErr> {
    entity::order_status_history::ActiveModel {
        order_id: ActiveValue::Set(order_id),
        status: ActiveValue::Set(status.into()),
        changed_by: ActiveValue::Set(changed_by),
        notes: ActiveValue::Set(None),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
