//! Wire-level DTOs shared by every API endpoint.
//!
//! These types define the JSON request and response bodies of the REST API.
//! They carry serde derives for (de)serialization and utoipa schemas for the
//! generated OpenAPI document. Conversion from domain models happens at the
//! controller boundary via `into_dto()` methods on the server-side models.

pub mod api;
pub mod dashboard;
pub mod menu;
pub mod order;
pub mod room;
pub mod user;
