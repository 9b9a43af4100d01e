use sea_orm::{sea_query::TableCreateStatement, DbBackend, Schema};

/// CREATE TABLE statements for every user, group and permission table.
///
/// Tables are ordered so that junction tables come after the tables they reference.
pub fn user_tables() -> Vec<TableCreateStatement> {
    let schema = Schema::new(DbBackend::Sqlite);

    vec![
        schema.create_table_from_entity(entity::prelude::AuthUser),
        schema.create_table_from_entity(entity::prelude::AuthGroup),
        schema.create_table_from_entity(entity::prelude::AuthPermission),
        schema.create_table_from_entity(entity::prelude::AuthUserGroups),
        schema.create_table_from_entity(entity::prelude::AuthUserUserPermissions),
        schema.create_table_from_entity(entity::prelude::AuthGroupPermissions),
    ]
}

#[macro_export]
macro_rules! test_setup_with_tables {
    // Pattern 1: No entities provided
    () => {{
        $crate::TestContext::new().await
    }};

    // Pattern 2: Entities provided
    ($($entity:expr),+ $(,)?) => {{
        async {
            let setup = $crate::TestContext::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                $(schema.create_table_from_entity($entity),)+
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}

#[macro_export]
macro_rules! test_setup_with_user_tables {
    // Pattern 1: No entities provided
    () => {{
        async {
            let setup = $crate::TestContext::new().await?;
            setup.with_tables($crate::user_tables()).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};

    // Pattern 2: Entities provided
    ($($entity:expr),+ $(,)?) => {{
        async {
            let setup = $crate::TestContext::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let mut stmts = $crate::user_tables();
            stmts.extend(vec![
                $(schema.create_table_from_entity($entity),)+
            ]);
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}
