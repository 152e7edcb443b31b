//! Menu category factory for creating test category entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test menu categories with customizable fields.
pub struct MenuCategoryFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    description: Option<String>,
    display_order: i32,
    is_active: bool,
}

impl<'a> MenuCategoryFactory<'a> {
    /// Creates a new MenuCategoryFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Category {id}"` where id is auto-incremented
    /// - description: `None`
    /// - display_order: `0`
    /// - is_active: `true`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Category {}", id),
            description: None,
            display_order: 0,
            is_active: true,
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

    pub fn display_order(mut self, display_order: i32) -> Self {
        self.display_order = display_order;
        self
    }

    pub fn is_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Builds and inserts the category entity into the database.
    pub async fn build(self) -> Result<entity::menu_category::Model, DbErr> {
        let now = Utc::now();
        entity::menu_category::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            display_order: ActiveValue::Set(self.display_order),
            is_active: ActiveValue::Set(self.is_active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a menu category with default values.
///
/// Shorthand for `MenuCategoryFactory::new(db).build().await`.
pub async fn create_category(
    db: &DatabaseConnection,
) -> Result<entity::menu_category::Model, DbErr> {
    MenuCategoryFactory::new(db).build().await
}
