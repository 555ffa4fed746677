use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use validator::Validate;

use user_store::errors_service::UserServiceError;
use user_store::repository::traits::{UserRepositoryTrait, UserRoleRepositoryTrait};

use crate::error::{handle_service_error, ApiError};
use crate::methods::entities::{UpdateUserRequest, UserResponse};
use crate::methods::routes::USERS_BY_ID_PATH;
use crate::state::AppState;

#[utoipa::path(
    put,
    path = USERS_BY_ID_PATH,
    tag = "users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated successfully", body = UserResponse),
        (status = 404, description = "User not found"),
        (status = 422, description = "Validation error"),
        (status = 500, description = "Internal server error"),
    )
)]
pub async fn update_user<U, R>(
    Path(id): Path<i64>,
    State(state): State<AppState<U, R>>,
    payload: Result<Json<UpdateUserRequest>, JsonRejection>,
) -> Result<Json<UserResponse>, ApiError>
where
    U: UserRepositoryTrait + 'static,
    R: UserRoleRepositoryTrait + 'static,
{
    let Json(payload) = payload?;
    payload.validate().map_err(|e| {
        ApiError::validation(
            serde_json::to_value(&e).unwrap_or_else(|_| serde_json::json!([e.to_string()])),
        )
    })?;

    state
        .user_service
        .update_user(id, payload.into())
        .await
        .map(|user| Json(UserResponse::from(user)))
        .map_err(|e| match e {
            UserServiceError::NotFound => ApiError::user_not_found(),
            other => handle_service_error(other, &state.env, "update_user"),
        })
}
