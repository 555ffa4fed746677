use std::sync::Arc;

use crate::entities::{NewUser, User, UserDetail, UserPatch, UserRole};
use crate::errors_service::UserServiceError;
use crate::repository::traits::{UserRepositoryTrait, UserRoleRepositoryTrait};
use crate::repository::{UserRepository, UserRoleRepository};

const MAX_FIELD_LENGTH: usize = 255;

fn validate_required(field: &str, value: &str) -> Result<(), UserServiceError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(UserServiceError::Validation(format!(
            "{field} cannot be empty"
        )));
    }
    if value.len() > MAX_FIELD_LENGTH {
        return Err(UserServiceError::Validation(format!(
            "{field} cannot exceed {MAX_FIELD_LENGTH} characters"
        )));
    }
    Ok(())
}

#[derive(Debug, Clone)]
pub struct UserService<U = UserRepository, R = UserRoleRepository>
where
    U: UserRepositoryTrait,
    R: UserRoleRepositoryTrait,
{
    pub user_repo: Arc<U>,
    pub role_repo: Arc<R>,
}

impl UserService<UserRepository, UserRoleRepository> {
    pub fn new(user_repo: UserRepository, role_repo: UserRoleRepository) -> Self {
        Self {
            user_repo: Arc::new(user_repo),
            role_repo: Arc::new(role_repo),
        }
    }
}

impl<U, R> UserService<U, R>
where
    U: UserRepositoryTrait,
    R: UserRoleRepositoryTrait,
{
    pub fn with_repos(user_repo: Arc<U>, role_repo: Arc<R>) -> Self {
        Self {
            user_repo,
            role_repo,
        }
    }

    async fn resolve_role(
        &self,
        role_id: Option<i64>,
    ) -> Result<Option<UserRole>, UserServiceError> {
        match role_id {
            Some(role_id) => self
                .role_repo
                .get_role(role_id)
                .await
                .map_err(UserServiceError::from),
            None => Ok(None),
        }
    }

    pub async fn create_user(&self, mut new_user: NewUser) -> Result<User, UserServiceError> {
        validate_required("username", &new_user.username)?;
        validate_required("email", &new_user.email)?;
        new_user.username = new_user.username.trim().to_string();
        new_user.email = new_user.email.trim().to_string();

        self.user_repo
            .create_user(new_user)
            .await
            .map_err(UserServiceError::from)
    }

    pub async fn get_user(&self, user_id: i64) -> Result<Option<UserDetail>, UserServiceError> {
        let user = self
            .user_repo
            .get_user(user_id)
            .await
            .map_err(UserServiceError::from)?;
        match user {
            Some(user) => {
                let role = self.resolve_role(user.role_id).await?;
                Ok(Some(UserDetail { user, role }))
            }
            None => Ok(None),
        }
    }

    pub async fn get_users(&self) -> Result<Vec<User>, UserServiceError> {
        self.user_repo
            .get_users()
            .await
            .map_err(UserServiceError::from)
    }

    pub async fn update_user(
        &self,
        user_id: i64,
        patch: UserPatch,
    ) -> Result<User, UserServiceError> {
        self.user_repo
            .update_user(user_id, patch)
            .await
            .map_err(UserServiceError::from)
    }

    pub async fn delete_user(&self, user_id: i64) -> Result<bool, UserServiceError> {
        self.user_repo
            .delete_user(user_id)
            .await
            .map_err(UserServiceError::from)
    }

    pub async fn get_roles(&self) -> Result<Vec<UserRole>, UserServiceError> {
        self.role_repo
            .get_roles()
            .await
            .map_err(UserServiceError::from)
    }
}
