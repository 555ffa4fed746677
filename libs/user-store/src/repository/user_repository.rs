use async_trait::async_trait;
use chrono::Utc;
use sqlx::MySqlPool;

use crate::entities::{NewUser, User, UserPatch};
use crate::repository::errors::RepositoryError;
use crate::repository::generic::Repository;
use crate::repository::traits::UserRepositoryTrait;

#[derive(Debug, Clone)]
pub struct UserRepository {
    repo: Repository<User>,
    pool: MySqlPool,
}

impl UserRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self {
            repo: Repository::new(pool.clone()),
            pool,
        }
    }
}

#[async_trait]
impl UserRepositoryTrait for UserRepository {
    async fn create_user(&self, new_user: NewUser) -> Result<User, RepositoryError> {
        self.repo.add(new_user.into_user(Utc::now())).await
    }

    async fn get_user(&self, user_id: i64) -> Result<Option<User>, RepositoryError> {
        self.repo.get(user_id).await
    }

    async fn get_users(&self) -> Result<Vec<User>, RepositoryError> {
        self.repo.get_all().await
    }

    async fn update_user(&self, user_id: i64, patch: UserPatch) -> Result<User, RepositoryError> {
        self.repo.update(user_id, patch).await?;

        // The modification stamp always wins, whatever the caller sent.
        sqlx::query("UPDATE `user` SET updated_at = ? WHERE id = ?")
            .bind(Utc::now())
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        self.repo
            .get(user_id)
            .await?
            .ok_or(RepositoryError::NotFound)
    }

    async fn delete_user(&self, user_id: i64) -> Result<bool, RepositoryError> {
        self.repo.delete(user_id).await
    }
}
