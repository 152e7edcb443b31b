//! Menu item factory for creating test menu item entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test menu items with customizable fields.
///
/// Menu items require an existing category, so the factory takes the
/// category id up front.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::menu_item::MenuItemFactory;
///
/// let item = MenuItemFactory::new(&db, category.id)
///     .name("Club Sandwich")
///     .price_cents(1450)
///     .preparation_minutes(20)
///     .build()
///     .await?;
/// ```
pub struct MenuItemFactory<'a> {
    db: &'a DatabaseConnection,
    category_id: i32,
    name: String,
    description: Option<String>,
    price_cents: i64,
    image_url: Option<String>,
    is_available: bool,
    preparation_minutes: i32,
}

impl<'a> MenuItemFactory<'a> {
    /// Creates a new MenuItemFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Item {id}"` where id is auto-incremented
    /// - description: `None`
    /// - price_cents: `950`
    /// - image_url: `None`
    /// - is_available: `true`
    /// - preparation_minutes: `15`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `category_id` - Id of an existing menu category
    pub fn new(db: &'a DatabaseConnection, category_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            category_id,
            name: format!("Item {}", id),
            description: None,
            price_cents: 950,
            image_url: None,
            is_available: true,
            preparation_minutes: 15,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn price_cents(mut self, price_cents: i64) -> Self {
        self.price_cents = price_cents;
        self
    }

    pub fn is_available(mut self, is_available: bool) -> Self {
        self.is_available = is_available;
        self
    }

    pub fn preparation_minutes(mut self, preparation_minutes: i32) -> Self {
        self.preparation_minutes = preparation_minutes;
        self
    }

    /// Builds and inserts the menu item entity into the database.
    pub async fn build(self) -> Result<entity::menu_item::Model, DbErr> {
        let now = Utc::now();
        entity::menu_item::ActiveModel {
            category_id: ActiveValue::Set(self.category_id),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            price_cents: ActiveValue::Set(self.price_cents),
            image_url: ActiveValue::Set(self.image_url),
            is_available: ActiveValue::Set(self.is_available),
            preparation_minutes: ActiveValue::Set(self.preparation_minutes),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a menu item with default values in the given category.
///
/// Shorthand for `MenuItemFactory::new(db, category_id).build().await`.
pub async fn create_menu_item(
    db: &DatabaseConnection,
    category_id: i32,
) -> Result<entity::menu_item::Model, DbErr> {
    MenuItemFactory::new(db, category_id).build().await
}
