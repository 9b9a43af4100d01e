use sea_orm::{ActiveValue, ColumnTrait, EntityTrait, QueryFilter};

use crate::{error::TestError, model::PermissionModel, TestContext};

impl TestContext {
    pub fn permission(&self) -> PermissionFixtures<'_> {
        PermissionFixtures { setup: self }
    }
}

pub struct PermissionFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> PermissionFixtures<'a> {
    pub async fn insert_permission(
        &self,
        codename: &str,
        name: &str,
    ) -> Result<PermissionModel, TestError> {
        Ok(
            entity::prelude::AuthPermission::insert(entity::auth_permission::ActiveModel {
                codename: ActiveValue::Set(codename.to_string()),
                name: ActiveValue::Set(name.to_string()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn get_permission(&self, codename: &str) -> Result<PermissionModel, TestError> {
        entity::prelude::AuthPermission::find()
            .filter(entity::auth_permission::Column::Codename.eq(codename))
            .one(&self.setup.db)
            .await?
            .ok_or_else(|| TestError::FixtureNotFound(format!("permission {}", codename)))
    }
}
