//! HTTP request handlers.
//!
//! Controllers are thin: they check access through the auth guard, convert
//! DTOs to operation parameters, call the matching service, and convert the
//! result back to a DTO with the right status code. Each handler carries a
//! `utoipa::path` annotation feeding the generated OpenAPI document.

pub mod admin;
pub mod auth;
pub mod menu;
pub mod order;
pub mod room;
