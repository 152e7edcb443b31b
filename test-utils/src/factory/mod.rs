//! Factories for creating test entities with sensible defaults.
//!
//! Each factory provides a builder pattern over one entity so tests can create
//! rows with minimal boilerplate and override only the fields they care about.

pub mod helpers;
pub mod menu_category;
pub mod menu_item;
pub mod order;
pub mod room;
pub mod user;
