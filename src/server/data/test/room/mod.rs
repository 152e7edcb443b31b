use crate::server::data::room::RoomRepository;
use crate::server::model::room::RoomStatus;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_by_number;
mod has_orders;
mod set_status_bulk;
