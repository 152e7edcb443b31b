//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Process-wide counter feeding unique usernames, room numbers, and order
/// numbers so factories never trip the unique constraints within a test.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Returns the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a complete order hierarchy with all dependencies.
///
/// This is a convenience method that creates:
/// 1. Room
/// 2. Menu category
/// 3. Menu item
/// 4. Order (for the room)
/// 5. Order item (one line for the menu item)
///
/// All entities are created with default values. Use the individual
/// factories if you need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((room, category, item, order, line))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_order_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::room::Model,
        entity::menu_category::Model,
        entity::menu_item::Model,
        entity::order::Model,
        entity::order_item::Model,
    ),
    DbErr,
> {
    let room = crate::factory::room::create_room(db).await?;
    let category = crate::factory::menu_category::create_category(db).await?;
    let item = crate::factory::menu_item::create_menu_item(db, category.id).await?;
    let order = crate::factory::order::create_order(db, room.id).await?;
    let line =
        crate::factory::order::create_order_item(db, order.id, item.id, 1, item.price_cents)
            .await?;

    Ok((room, category, item, order, line))
}
