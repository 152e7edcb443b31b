//! Menu business logic: guest reads and staff management.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::menu::{MenuCategoryRepository, MenuItemRepository},
    error::AppError,
    model::menu::{
        CreateMenuCategoryParams, CreateMenuItemParams, MenuCategoryWithItems,
        MenuItemWithCategory, UpdateMenuCategoryParams, UpdateMenuItemParams,
    },
};

/// Service providing business logic for the menu.
pub struct MenuService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> MenuService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the guest menu: active categories with their available items.
    pub async fn get_menu(&self) -> Result<Vec<MenuCategoryWithItems>, AppError> {
        let category_repo = MenuCategoryRepository::new(self.db);
        let item_repo = MenuItemRepository::new(self.db);

        let categories = category_repo.get_active().await?;

        let mut result = Vec::with_capacity(categories.len());
        for category in categories {
            let items = item_repo.get_available_by_category(category.id).await?;
            result.push(MenuCategoryWithItems { category, items });
        }

        Ok(result)
    }

    /// Gets active categories without items.
    pub async fn get_categories(&self) -> Result<Vec<entity::menu_category::Model>, AppError> {
        let category_repo = MenuCategoryRepository::new(self.db);
        Ok(category_repo.get_active().await?)
    }

    /// Gets the available items of one category.
    pub async fn get_category_items(
        &self,
        category_id: i32,
    ) -> Result<Vec<entity::menu_item::Model>, AppError> {
        let item_repo = MenuItemRepository::new(self.db);
        Ok(item_repo.get_available_by_category(category_id).await?)
    }

    /// Gets one menu item with its category name.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - No item with that id
    pub async fn get_item(&self, id: i32) -> Result<MenuItemWithCategory, AppError> {
        let item_repo = MenuItemRepository::new(self.db);

        item_repo
            .find_with_category(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Menu item not found".to_string()))
    }

    /// Gets every item with its category name for the admin listing.
    pub async fn get_all_items(&self) -> Result<Vec<MenuItemWithCategory>, AppError> {
        let item_repo = MenuItemRepository::new(self.db);
        Ok(item_repo.get_all_with_category().await?)
    }

    /// Creates a menu category.
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - Empty name
    pub async fn create_category(
        &self,
        params: CreateMenuCategoryParams,
    ) -> Result<entity::menu_category::Model, AppError> {
        if params.name.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Category name is required".to_string(),
            ));
        }

        let category_repo = MenuCategoryRepository::new(self.db);
        Ok(category_repo.create(params).await?)
    }

    /// Updates a menu category.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - No category with that id
    pub async fn update_category(
        &self,
        params: UpdateMenuCategoryParams,
    ) -> Result<entity::menu_category::Model, AppError> {
        let category_repo = MenuCategoryRepository::new(self.db);

        if category_repo.find_by_id(params.id).await?.is_none() {
            return Err(AppError::NotFound("Category not found".to_string()));
        }

        Ok(category_repo.update(params).await?)
    }

    /// Deletes a menu category.
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - The category still has menu items
    /// - `Err(AppError::NotFound)` - No category with that id
    pub async fn delete_category(&self, id: i32) -> Result<(), AppError> {
        let category_repo = MenuCategoryRepository::new(self.db);

        if category_repo.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound("Category not found".to_string()));
        }

        if category_repo.has_items(id).await? {
            return Err(AppError::BadRequest(
                "Cannot delete category with existing menu items".to_string(),
            ));
        }

        category_repo.delete(id).await?;

        Ok(())
    }

    /// Creates a menu item in an existing category.
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - Empty name, non-positive price, or unknown category
    pub async fn create_item(
        &self,
        params: CreateMenuItemParams,
    ) -> Result<entity::menu_item::Model, AppError> {
        if params.name.trim().is_empty() || params.price_cents <= 0 {
            return Err(AppError::BadRequest(
                "Name, price, and category are required".to_string(),
            ));
        }

        let category_repo = MenuCategoryRepository::new(self.db);
        if !category_repo.exists(params.category_id).await? {
            return Err(AppError::BadRequest("Invalid category ID".to_string()));
        }

        let item_repo = MenuItemRepository::new(self.db);
        Ok(item_repo.create(params).await?)
    }

    /// Updates a menu item.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - No item with that id
    /// - `Err(AppError::BadRequest)` - Unknown target category
    pub async fn update_item(
        &self,
        params: UpdateMenuItemParams,
    ) -> Result<entity::menu_item::Model, AppError> {
        let item_repo = MenuItemRepository::new(self.db);

        if item_repo.find_by_id(params.id).await?.is_none() {
            return Err(AppError::NotFound("Menu item not found".to_string()));
        }

        let category_repo = MenuCategoryRepository::new(self.db);
        if !category_repo.exists(params.category_id).await? {
            return Err(AppError::BadRequest("Invalid category ID".to_string()));
        }

        Ok(item_repo.update(params).await?)
    }

    /// Deletes a menu item.
    ///
    /// Existing order lines keep their captured name-free prices; only the
    /// catalog entry disappears.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - No item with that id
    pub async fn delete_item(&self, id: i32) -> Result<(), AppError> {
        let item_repo = MenuItemRepository::new(self.db);

        if item_repo.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound("Menu item not found".to_string()));
        }

        item_repo.delete(id).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory};

    #[tokio::test]
    async fn menu_skips_inactive_categories_and_unavailable_items() {
        let test = TestBuilder::new().with_menu_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let visible = factory::menu_category::MenuCategoryFactory::new(db)
            .name("Mains")
            .build()
            .await
            .unwrap();
        factory::menu_category::MenuCategoryFactory::new(db)
            .name("Retired")
            .is_active(false)
            .build()
            .await
            .unwrap();

        factory::menu_item::MenuItemFactory::new(db, visible.id)
            .name("Club Sandwich")
            .build()
            .await
            .unwrap();
        factory::menu_item::MenuItemFactory::new(db, visible.id)
            .name("Off Menu")
            .is_available(false)
            .build()
            .await
            .unwrap();

        let service = MenuService::new(db);
        let menu = service.get_menu().await.unwrap();

        assert_eq!(menu.len(), 1);
        assert_eq!(menu[0].category.name, "Mains");
        assert_eq!(menu[0].items.len(), 1);
        assert_eq!(menu[0].items[0].name, "Club Sandwich");
    }

    #[tokio::test]
    async fn cannot_delete_category_with_items() {
        let test = TestBuilder::new().with_menu_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let category = factory::menu_category::create_category(db).await.unwrap();
        factory::menu_item::create_menu_item(db, category.id)
            .await
            .unwrap();

        let service = MenuService::new(db);
        let result = service.delete_category(category.id).await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn create_item_requires_known_category() {
        let test = TestBuilder::new().with_menu_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let service = MenuService::new(db);
        let result = service
            .create_item(CreateMenuItemParams {
                category_id: 42,
                name: "Orphan".to_string(),
                description: None,
                price_cents: 1000,
                image_url: None,
                preparation_minutes: 15,
            })
            .await;

        assert!(matches!(result, Err(AppError::BadRequest(msg)) if msg.contains("category")));
    }
}
