use async_trait::async_trait;

use crate::entities::{NewUser, User, UserPatch, UserRole};
use crate::repository::errors::RepositoryError;

#[async_trait]
pub trait UserRepositoryTrait: Send + Sync {
    async fn create_user(&self, new_user: NewUser) -> Result<User, RepositoryError>;
    async fn get_user(&self, user_id: i64) -> Result<Option<User>, RepositoryError>;
    async fn get_users(&self) -> Result<Vec<User>, RepositoryError>;
    async fn update_user(&self, user_id: i64, patch: UserPatch) -> Result<User, RepositoryError>;
    async fn delete_user(&self, user_id: i64) -> Result<bool, RepositoryError>;
}

#[async_trait]
pub trait UserRoleRepositoryTrait: Send + Sync {
    async fn get_role(&self, role_id: i64) -> Result<Option<UserRole>, RepositoryError>;
    async fn get_roles(&self) -> Result<Vec<UserRole>, RepositoryError>;
}
