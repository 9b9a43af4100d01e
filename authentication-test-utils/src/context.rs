//! Test context structure and utilities.
//!
//! This module provides the `TestContext` returned by `TestBuilder` and the setup macros.
//! Every context owns its own in-memory SQLite database, so tests never observe each
//! other's rows.

use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::error::TestError;

/// Test context structure returned by `TestBuilder`
///
/// Provides access to the test database and to fixture helpers for inserting
/// users, groups and permissions.
///
/// # Usage
///
/// Most users should create this via [`TestBuilder`](crate::TestBuilder) or the
/// `test_setup_with_user_tables!` macro rather than constructing it directly.
///
/// ```ignore
/// let test = TestBuilder::new().with_user_tables().build().await?;
///
/// let user = test.user().insert_user("testuser").await?;
/// let group = test.group().insert_group("Test Group").await?;
/// test.group().add_user(user.id, group.id).await?;
/// ```
pub struct TestContext {
    /// Database connection to in-memory SQLite database
    pub db: DatabaseConnection,
}

impl TestContext {
    /// Create a new test context backed by an empty in-memory SQLite database.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with no tables created
    /// - `Err(TestError::DbErr)` - Database connection failed
    pub async fn new() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext { db })
    }

    /// Create database tables from schema statements.
    ///
    /// # Arguments
    /// - `stmts` - Vector of CREATE TABLE statements to execute
    ///
    /// # Returns
    /// - `Ok(())` - All tables created successfully
    /// - `Err(TestError::DbErr)` - Table creation failed
    pub async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }
}
