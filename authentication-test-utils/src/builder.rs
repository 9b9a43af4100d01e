//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! The builder pattern allows chaining multiple configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, setup::user_tables, TestContext};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables and
/// user, group and permission fixtures. Methods can be chained together and finalized
/// with `build()`.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_user_tables: bool,

    // Database fixtures to insert
    users: Vec<String>,
    groups: Vec<String>,
    permissions: Vec<(String, String)>, // (codename, name)
    memberships: Vec<(String, String)>, // (username, group_name)
}

impl TestBuilder {
    /// Create a new TestBuilder.
    ///
    /// Initializes an empty builder with no tables or fixtures configured.
    ///
    /// # Returns
    /// - `TestBuilder` - A new builder instance ready for configuration
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_user_tables: false,
            users: Vec::new(),
            groups: Vec::new(),
            permissions: Vec::new(),
            memberships: Vec::new(),
        }
    }

    /// Add the user, group, permission and junction tables to the test database.
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_user_tables(mut self) -> Self {
        self.include_user_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`.
    ///
    /// # Arguments
    /// - `entity` - Entity type implementing `EntityTrait`
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    ///
    /// # Example
    ///
    /// ```no_run
    /// use authentication_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), authentication_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(AuthUser)
    ///     .with_table(AuthGroup)
    ///     .with_table(AuthUserGroups)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a user fixture with an unusable password.
    ///
    /// # Arguments
    /// - `username` - Username of the user, email becomes `<username>@example.com`
    pub fn with_user(mut self, username: impl Into<String>) -> Self {
        self.users.push(username.into());
        self
    }

    /// Insert a group fixture.
    pub fn with_group(mut self, name: impl Into<String>) -> Self {
        self.groups.push(name.into());
        self
    }

    /// Insert a permission fixture.
    pub fn with_permission(mut self, codename: impl Into<String>, name: impl Into<String>) -> Self {
        self.permissions.push((codename.into(), name.into()));
        self
    }

    /// Add a user fixture to a group fixture.
    ///
    /// Both must be queued with `with_user` and `with_group`.
    pub fn with_group_member(
        mut self,
        username: impl Into<String>,
        group_name: impl Into<String>,
    ) -> Self {
        self.memberships.push((username.into(), group_name.into()));
        self
    }

    /// Build the test setup by creating all configured tables and fixtures.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Creates database tables (user tables if specified, then custom tables)
    /// 2. Inserts users, groups and permissions
    /// 3. Links group members
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    /// - `Err(TestError::FixtureNotFound)` - A membership names a user or group never queued
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_user_tables {
            all_tables.extend(user_tables());
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert database fixtures
        for username in &self.users {
            setup.user().insert_user(username).await?;
        }

        for name in &self.groups {
            setup.group().insert_group(name).await?;
        }

        for (codename, name) in &self.permissions {
            setup.permission().insert_permission(codename, name).await?;
        }

        // 3. Link memberships
        for (username, group_name) in &self.memberships {
            let user = setup.user().get_user(username).await?;
            let group = setup.group().get_group(group_name).await?;
            setup.group().add_user(user.id, group.id).await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
