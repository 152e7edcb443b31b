use crate::server::data::menu::{MenuCategoryRepository, MenuItemRepository};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod available_items;
mod find_with_category;
mod has_items;
