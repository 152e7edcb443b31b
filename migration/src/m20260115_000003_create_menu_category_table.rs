use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MenuCategory::Table)
                    .if_not_exists()
                    .col(pk_auto(MenuCategory::Id))
                    .col(string(MenuCategory::Name))
                    .col(text_null(MenuCategory::Description))
                    .col(integer(MenuCategory::DisplayOrder).default(0))
                    .col(boolean(MenuCategory::IsActive).default(true))
                    .col(
                        timestamp(MenuCategory::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(MenuCategory::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MenuCategory::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MenuCategory {
    Table,
    Id,
    Name,
    Description,
    DisplayOrder,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
