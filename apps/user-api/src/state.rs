use std::sync::Arc;

use user_store::repository::traits::{UserRepositoryTrait, UserRoleRepositoryTrait};
use user_store::repository::user_repository::UserRepository;
use user_store::repository::user_role_repository::UserRoleRepository;
use user_store::user_service::UserService;

pub struct AppState<U = UserRepository, R = UserRoleRepository>
where
    U: UserRepositoryTrait + Send + Sync + 'static,
    R: UserRoleRepositoryTrait + Send + Sync + 'static,
{
    pub user_service: Arc<UserService<U, R>>,
    pub env: String,
}

impl<U, R> Clone for AppState<U, R>
where
    U: UserRepositoryTrait + Send + Sync + 'static,
    R: UserRoleRepositoryTrait + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            user_service: Arc::clone(&self.user_service),
            env: self.env.clone(),
        }
    }
}
