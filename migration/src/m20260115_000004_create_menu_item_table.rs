use sea_orm_migration::{prelude::*, schema::*};

use super::m20260115_000003_create_menu_category_table::MenuCategory;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MenuItem::Table)
                    .if_not_exists()
                    .col(pk_auto(MenuItem::Id))
                    .col(integer(MenuItem::CategoryId))
                    .col(string(MenuItem::Name))
                    .col(text_null(MenuItem::Description))
                    .col(big_integer(MenuItem::PriceCents))
                    .col(string_null(MenuItem::ImageUrl))
                    .col(boolean(MenuItem::IsAvailable).default(true))
                    .col(integer(MenuItem::PreparationMinutes).default(15))
                    .col(
                        timestamp(MenuItem::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(MenuItem::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_menu_item_category_id")
                            .from(MenuItem::Table, MenuItem::CategoryId)
                            .to(MenuCategory::Table, MenuCategory::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MenuItem::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MenuItem {
    Table,
    Id,
    CategoryId,
    Name,
    Description,
    PriceCents,
    ImageUrl,
    IsAvailable,
    PreparationMinutes,
    CreatedAt,
    UpdatedAt,
}
