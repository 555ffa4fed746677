use axum::extract::State;
use axum::Json;

use user_store::repository::traits::{UserRepositoryTrait, UserRoleRepositoryTrait};

use crate::error::{handle_service_error, ApiError};
use crate::methods::entities::UserListResponse;
use crate::methods::routes::USERS_PATH;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = USERS_PATH,
    tag = "users",
    responses(
        (status = 200, description = "List of users", body = [UserListResponse]),
        (status = 500, description = "Internal server error"),
    )
)]
pub async fn get_users<U, R>(
    State(state): State<AppState<U, R>>,
) -> Result<Json<Vec<UserListResponse>>, ApiError>
where
    U: UserRepositoryTrait + 'static,
    R: UserRoleRepositoryTrait + 'static,
{
    state
        .user_service
        .get_users()
        .await
        .map(|users| Json(users.into_iter().map(UserListResponse::from).collect()))
        .map_err(|e| handle_service_error(e, &state.env, "get_users"))
}
