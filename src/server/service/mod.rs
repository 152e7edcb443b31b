//! Business logic layer between controllers and repositories.
//!
//! Services validate operation-level rules (uniqueness, existence, guard
//! conditions), orchestrate repositories, and own the transactions that span
//! multiple statements. Controllers never touch the database directly and
//! repositories never decide HTTP semantics; both of those live here as
//! `AppError::BadRequest` / `AppError::NotFound` decisions.

pub mod admin;
pub mod auth;
pub mod menu;
pub mod order;
pub mod room;
pub mod user;
