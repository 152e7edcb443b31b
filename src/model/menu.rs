use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct MenuCategoryDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub display_order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct MenuItemDto {
    pub id: i32,
    pub category_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price_cents: i64,
    pub image_url: Option<String>,
    pub is_available: bool,
    pub preparation_minutes: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Menu item enriched with its category name, returned by the single-item lookup.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct MenuItemDetailDto {
    pub id: i32,
    pub category_id: i32,
    pub category_name: String,
    pub name: String,
    pub description: Option<String>,
    pub price_cents: i64,
    pub image_url: Option<String>,
    pub is_available: bool,
    pub preparation_minutes: i32,
}

/// One active category together with its available items, as served to guests.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct MenuCategoryWithItemsDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub display_order: i32,
    pub items: Vec<MenuItemDto>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct CreateMenuCategoryDto {
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub display_order: i32,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct UpdateMenuCategoryDto {
    pub name: String,
    pub description: Option<String>,
    pub display_order: i32,
    pub is_active: bool,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct CreateMenuItemDto {
    pub category_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price_cents: i64,
    pub image_url: Option<String>,
    pub preparation_minutes: Option<i32>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct UpdateMenuItemDto {
    pub category_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price_cents: i64,
    pub image_url: Option<String>,
    pub is_available: bool,
    pub preparation_minutes: i32,
}
