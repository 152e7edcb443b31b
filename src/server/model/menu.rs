//! Menu domain parameters and DTO conversions.

use crate::model::menu::{
    MenuCategoryDto, MenuCategoryWithItemsDto, MenuItemDetailDto, MenuItemDto,
};

#[derive(Debug, Clone)]
pub struct CreateMenuCategoryParams {
    pub name: String,
    pub description: Option<String>,
    pub display_order: i32,
}

#[derive(Debug, Clone)]
pub struct UpdateMenuCategoryParams {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub display_order: i32,
    pub is_active: bool,
}

#[derive(Debug, Clone)]
pub struct CreateMenuItemParams {
    pub category_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price_cents: i64,
    pub image_url: Option<String>,
    pub preparation_minutes: i32,
}

#[derive(Debug, Clone)]
pub struct UpdateMenuItemParams {
    pub id: i32,
    pub category_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price_cents: i64,
    pub image_url: Option<String>,
    pub is_available: bool,
    pub preparation_minutes: i32,
}

/// A menu item joined with its category, for the single-item lookup.
#[derive(Debug, Clone)]
pub struct MenuItemWithCategory {
    pub item: entity::menu_item::Model,
    pub category_name: String,
}

impl MenuItemWithCategory {
    pub fn into_dto(self) -> MenuItemDetailDto {
        MenuItemDetailDto {
            id: self.item.id,
            category_id: self.item.category_id,
            category_name: self.category_name,
            name: self.item.name,
            description: self.item.description,
            price_cents: self.item.price_cents,
            image_url: self.item.image_url,
            is_available: self.item.is_available,
            preparation_minutes: self.item.preparation_minutes,
        }
    }
}

/// An active category together with its available items, for the guest menu.
#[derive(Debug, Clone)]
pub struct MenuCategoryWithItems {
    pub category: entity::menu_category::Model,
    pub items: Vec<entity::menu_item::Model>,
}

impl MenuCategoryWithItems {
    pub fn into_dto(self) -> MenuCategoryWithItemsDto {
        MenuCategoryWithItemsDto {
            id: self.category.id,
            name: self.category.name,
            description: self.category.description,
            display_order: self.category.display_order,
            items: self.items.into_iter().map(MenuItemDto::from).collect(),
        }
    }
}

impl From<entity::menu_category::Model> for MenuCategoryDto {
    fn from(category: entity::menu_category::Model) -> Self {
        Self {
            id: category.id,
            name: category.name,
            description: category.description,
            display_order: category.display_order,
            is_active: category.is_active,
            created_at: category.created_at,
            updated_at: category.updated_at,
        }
    }
}

impl From<entity::menu_item::Model> for MenuItemDto {
    fn from(item: entity::menu_item::Model) -> Self {
        Self {
            id: item.id,
            category_id: item.category_id,
            name: item.name,
            description: item.description,
            price_cents: item.price_cents,
            image_url: item.image_url,
            is_available: item.is_available,
            preparation_minutes: item.preparation_minutes,
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}
