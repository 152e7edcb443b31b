use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::menu::{
    CreateMenuItemParams, MenuItemWithCategory, UpdateMenuItemParams,
};

/// Repository providing database operations for menu items.
pub struct MenuItemRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MenuItemRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new menu item, available by default.
    pub async fn create(
        &self,
        params: CreateMenuItemParams,
    ) -> Result<entity::menu_item::Model, DbErr> {
        let now = Utc::now();

        entity::menu_item::ActiveModel {
            category_id: ActiveValue::Set(params.category_id),
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            price_cents: ActiveValue::Set(params.price_cents),
            image_url: ActiveValue::Set(params.image_url),
            is_available: ActiveValue::Set(true),
            preparation_minutes: ActiveValue::Set(params.preparation_minutes),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::menu_item::Model>, DbErr> {
        entity::prelude::MenuItem::find_by_id(id).one(self.db).await
    }

    /// Finds an item joined with its category name, for the guest item lookup.
    pub async fn find_with_category(
        &self,
        id: i32,
    ) -> Result<Option<MenuItemWithCategory>, DbErr> {
        let result = entity::prelude::MenuItem::find_by_id(id)
            .find_also_related(entity::prelude::MenuCategory)
            .one(self.db)
            .await?;

        Ok(result.map(|(item, category)| MenuItemWithCategory {
            item,
            category_name: category.map(|c| c.name).unwrap_or_default(),
        }))
    }

    /// Finds an item only if it is currently available.
    ///
    /// This is the lookup the order-creation transaction uses: unavailable and
    /// missing items are indistinguishable to the guest.
    pub async fn find_available_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::menu_item::Model>, DbErr> {
        entity::prelude::MenuItem::find()
            .filter(entity::menu_item::Column::Id.eq(id))
            .filter(entity::menu_item::Column::IsAvailable.eq(true))
            .one(self.db)
            .await
    }

    /// Gets available items of one category ordered by name.
    pub async fn get_available_by_category(
        &self,
        category_id: i32,
    ) -> Result<Vec<entity::menu_item::Model>, DbErr> {
        entity::prelude::MenuItem::find()
            .filter(entity::menu_item::Column::CategoryId.eq(category_id))
            .filter(entity::menu_item::Column::IsAvailable.eq(true))
            .order_by_asc(entity::menu_item::Column::Name)
            .all(self.db)
            .await
    }

    /// Gets every item (available or not) with its category name, for the
    /// admin menu listing. Ordered by category display order, then item name.
    pub async fn get_all_with_category(&self) -> Result<Vec<MenuItemWithCategory>, DbErr> {
        let results = entity::prelude::MenuItem::find()
            .find_also_related(entity::prelude::MenuCategory)
            .order_by_asc(entity::menu_category::Column::DisplayOrder)
            .order_by_asc(entity::menu_item::Column::Name)
            .all(self.db)
            .await?;

        Ok(results
            .into_iter()
            .map(|(item, category)| MenuItemWithCategory {
                item,
                category_name: category.map(|c| c.name).unwrap_or_default(),
            })
            .collect())
    }

    /// Updates all editable fields of a menu item.
    ///
    /// # Returns
    /// - `Ok(Model)` - The updated item
    /// - `Err(DbErr::RecordNotFound)` - No item with that id
    pub async fn update(
        &self,
        params: UpdateMenuItemParams,
    ) -> Result<entity::menu_item::Model, DbErr> {
        let item = entity::prelude::MenuItem::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Menu item with id {} not found",
                params.id
            )))?;

        let mut active_model: entity::menu_item::ActiveModel = item.into();
        active_model.category_id = ActiveValue::Set(params.category_id);
        active_model.name = ActiveValue::Set(params.name);
        active_model.description = ActiveValue::Set(params.description);
        active_model.price_cents = ActiveValue::Set(params.price_cents);
        active_model.image_url = ActiveValue::Set(params.image_url);
        active_model.is_available = ActiveValue::Set(params.is_available);
        active_model.preparation_minutes = ActiveValue::Set(params.preparation_minutes);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        active_model.update(self.db).await
    }

    /// Deletes a menu item.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::MenuItem::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
