use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260115_000001_create_user_table::User, m20260115_000002_create_room_table::Room,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Order::Table)
                    .if_not_exists()
                    .col(pk_auto(Order::Id))
                    .col(integer(Order::RoomId))
                    .col(string_uniq(Order::OrderNumber))
                    .col(string_null(Order::CustomerName))
                    .col(string_null(Order::CustomerPhone))
                    .col(big_integer(Order::TotalCents))
                    .col(string(Order::Status).default("pending"))
                    .col(text_null(Order::SpecialInstructions))
                    .col(timestamp(Order::EstimatedDeliveryAt))
                    .col(integer_null(Order::AssignedStaffId))
                    .col(
                        timestamp(Order::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Order::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_room_id")
                            .from(Order::Table, Order::RoomId)
                            .to(Room::Table, Room::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_assigned_staff_id")
                            .from(Order::Table, Order::AssignedStaffId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Order::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Order {
    Table,
    Id,
    RoomId,
    OrderNumber,
    CustomerName,
    CustomerPhone,
    TotalCents,
    Status,
    SpecialInstructions,
    EstimatedDeliveryAt,
    AssignedStaffId,
    CreatedAt,
    UpdatedAt,
}
