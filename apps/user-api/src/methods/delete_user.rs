use axum::extract::{Path, State};
use axum::Json;

use user_store::errors_service::UserServiceError;
use user_store::repository::traits::{UserRepositoryTrait, UserRoleRepositoryTrait};

use crate::error::{handle_service_error, ApiError};
use crate::methods::routes::USERS_BY_ID_PATH;
use crate::state::AppState;

#[utoipa::path(
    delete,
    path = USERS_BY_ID_PATH,
    tag = "users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deleted successfully", body = bool),
        (status = 404, description = "User not found"),
        (status = 500, description = "Internal server error"),
    )
)]
pub async fn delete_user<U, R>(
    Path(id): Path<i64>,
    State(state): State<AppState<U, R>>,
) -> Result<Json<bool>, ApiError>
where
    U: UserRepositoryTrait + 'static,
    R: UserRoleRepositoryTrait + 'static,
{
    state
        .user_service
        .delete_user(id)
        .await
        .map(Json)
        .map_err(|e| match e {
            UserServiceError::NotFound => ApiError::user_not_found(),
            other => handle_service_error(other, &state.env, "delete_user"),
        })
}
