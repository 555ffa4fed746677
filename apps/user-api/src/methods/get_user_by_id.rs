use axum::extract::{Path, State};
use axum::Json;

use user_store::repository::traits::{UserRepositoryTrait, UserRoleRepositoryTrait};

use crate::error::{handle_service_error, ApiError};
use crate::methods::entities::UserDetailResponse;
use crate::methods::routes::USERS_BY_ID_PATH;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = USERS_BY_ID_PATH,
    tag = "users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = UserDetailResponse),
        (status = 404, description = "User not found"),
        (status = 500, description = "Internal server error"),
    )
)]
pub async fn get_user_by_id<U, R>(
    Path(id): Path<i64>,
    State(state): State<AppState<U, R>>,
) -> Result<Json<UserDetailResponse>, ApiError>
where
    U: UserRepositoryTrait + 'static,
    R: UserRoleRepositoryTrait + 'static,
{
    match state.user_service.get_user(id).await {
        Ok(Some(detail)) => Ok(Json(UserDetailResponse::from(detail))),
        Ok(None) => Err(ApiError::user_not_found()),
        Err(e) => Err(handle_service_error(e, &state.env, "get_user")),
    }
}
