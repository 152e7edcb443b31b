use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Fluent builder assembling a `TestContext` with the tables a test needs.
///
/// Tables are derived straight from the entity definitions, so test schemas
/// can never drift from production entities. Add tables individually with
/// `with_table` or use the convenience groups for common slices of the
/// schema, then call `build()`.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Room, User};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Room)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements in insertion order.
    ///
    /// Parents must be added before tables carrying foreign keys to them.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds one entity's table to the schema.
    ///
    /// The CREATE TABLE statement is generated with SQLite syntax from the
    /// entity definition, including unique constraints and foreign keys.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity whose table should exist in the test database
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the tables required for menu operations.
    ///
    /// This convenience method adds the following tables in dependency order:
    /// - MenuCategory
    /// - MenuItem
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_menu_tables(self) -> Self {
        self.with_table(MenuCategory).with_table(MenuItem)
    }

    /// Adds all tables required for order operations.
    ///
    /// This convenience method adds the following tables in dependency order:
    /// - User
    /// - Room
    /// - MenuCategory
    /// - MenuItem
    /// - Order
    /// - OrderItem
    /// - OrderStatusHistory
    ///
    /// Use this when testing order creation, status updates, or anything else
    /// that touches the full order hierarchy.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_order_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_order_tables(self) -> Self {
        self.with_table(User)
            .with_table(Room)
            .with_menu_tables()
            .with_table(Order)
            .with_table(OrderItem)
            .with_table(OrderStatusHistory)
    }

    /// Connects to a fresh in-memory database and creates the configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with every requested table ready
    /// - `Err(TestError::Database)` - Connection or CREATE TABLE failure
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
