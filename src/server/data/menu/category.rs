use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::menu::{CreateMenuCategoryParams, UpdateMenuCategoryParams};

/// Repository providing database operations for menu categories.
pub struct MenuCategoryRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MenuCategoryRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new menu category, active by default.
    pub async fn create(
        &self,
        params: CreateMenuCategoryParams,
    ) -> Result<entity::menu_category::Model, DbErr> {
        let now = Utc::now();

        entity::menu_category::ActiveModel {
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            display_order: ActiveValue::Set(params.display_order),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets active categories in display order, name as tiebreaker.
    pub async fn get_active(&self) -> Result<Vec<entity::menu_category::Model>, DbErr> {
        entity::prelude::MenuCategory::find()
            .filter(entity::menu_category::Column::IsActive.eq(true))
            .order_by_asc(entity::menu_category::Column::DisplayOrder)
            .order_by_asc(entity::menu_category::Column::Name)
            .all(self.db)
            .await
    }

    pub async fn find_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::menu_category::Model>, DbErr> {
        entity::prelude::MenuCategory::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Updates all editable fields of a category.
    ///
    /// # Returns
    /// - `Ok(Model)` - The updated category
    /// - `Err(DbErr::RecordNotFound)` - No category with that id
    pub async fn update(
        &self,
        params: UpdateMenuCategoryParams,
    ) -> Result<entity::menu_category::Model, DbErr> {
        let category = entity::prelude::MenuCategory::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Menu category with id {} not found",
                params.id
            )))?;

        let mut active_model: entity::menu_category::ActiveModel = category.into();
        active_model.name = ActiveValue::Set(params.name);
        active_model.description = ActiveValue::Set(params.description);
        active_model.display_order = ActiveValue::Set(params.display_order);
        active_model.is_active = ActiveValue::Set(params.is_active);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        active_model.update(self.db).await
    }

    /// Deletes a category.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::MenuCategory::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Checks whether any menu items still reference the category.
    ///
    /// Categories with items cannot be deleted.
    pub async fn has_items(&self, category_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::MenuItem::find()
            .filter(entity::menu_item::Column::CategoryId.eq(category_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks whether a category exists at all (active or not).
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::MenuCategory::find()
            .filter(entity::menu_category::Column::Id.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
