//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain or parameter models to maintain separation between the data layer and business
//! logic layer. Every repository is generic over `ConnectionTrait` so the same methods run
//! against the pooled connection or inside an open transaction.

pub mod menu;
pub mod order;
pub mod room;
pub mod user;

#[cfg(test)]
mod test;
