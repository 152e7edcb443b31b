use crate::server::data::order::OrderRepository;
use crate::server::model::order::{
    ManageOrdersFilter, OrderListFilter, OrderStatus, UpdateOrderStatusParams,
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod active_with_room;
mod get_detail;
mod get_history;
mod list;
mod list_managed;
mod list_between;
mod update_status;
