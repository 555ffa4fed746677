use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use validator::Validate;

use user_store::repository::traits::{UserRepositoryTrait, UserRoleRepositoryTrait};

use crate::error::{handle_service_error, ApiError};
use crate::methods::entities::{CreateUserRequest, UserResponse};
use crate::methods::routes::USERS_PATH;
use crate::state::AppState;

#[utoipa::path(
    post,
    path = USERS_PATH,
    tag = "users",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "User created successfully", body = UserResponse),
        (status = 422, description = "Validation error"),
        (status = 500, description = "Internal server error"),
    )
)]
pub async fn create_user<U, R>(
    State(state): State<AppState<U, R>>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
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
        .create_user(payload.into())
        .await
        .map(|user| Json(UserResponse::from(user)))
        .map_err(|e| handle_service_error(e, &state.env, "create_user"))
}
