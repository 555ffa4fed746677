use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::entities::{RolePatch, UserRole};
use crate::repository::errors::RepositoryError;
use crate::repository::generic::Repository;
use crate::repository::traits::UserRoleRepositoryTrait;

/// Pure specialization of the generic repository for roles; no behavior of
/// its own.
#[derive(Debug, Clone)]
pub struct UserRoleRepository {
    repo: Repository<UserRole>,
}

impl UserRoleRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self {
            repo: Repository::new(pool),
        }
    }

    pub async fn create_role(
        &self,
        name: String,
        description: String,
    ) -> Result<UserRole, RepositoryError> {
        self.repo
            .add(UserRole {
                id: 0,
                name,
                description,
            })
            .await
    }

    pub async fn update_role(
        &self,
        role_id: i64,
        patch: RolePatch,
    ) -> Result<UserRole, RepositoryError> {
        self.repo.update(role_id, patch).await
    }

    pub async fn delete_role(&self, role_id: i64) -> Result<bool, RepositoryError> {
        self.repo.delete(role_id).await
    }
}

#[async_trait]
impl UserRoleRepositoryTrait for UserRoleRepository {
    async fn get_role(&self, role_id: i64) -> Result<Option<UserRole>, RepositoryError> {
        self.repo.get(role_id).await
    }

    async fn get_roles(&self) -> Result<Vec<UserRole>, RepositoryError> {
        self.repo.get_all().await
    }
}
