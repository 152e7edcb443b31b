use crate::server::data::user::UserRepository;
use crate::server::model::user::{CreateUserParams, UserRole};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod admin_exists;
mod create;
mod find_by_username;
mod set_active;
mod username_exists;
