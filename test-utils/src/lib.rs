//! Roomservice Test Utils
//!
//! Shared testing utilities for the room-service ordering application. The
//! crate centers on `TestBuilder`, which stands up an isolated in-memory
//! SQLite database with exactly the tables a test needs, and on per-entity
//! factories that insert rows with sensible defaults.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn places_an_order() {
//!     let test = TestBuilder::new().with_order_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let room = factory::room::create_room(db).await.unwrap();
//!     // Exercise repositories and services against `db`...
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
