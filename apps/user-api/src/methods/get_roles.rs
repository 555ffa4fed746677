use axum::extract::State;
use axum::Json;

use user_store::repository::traits::{UserRepositoryTrait, UserRoleRepositoryTrait};

use crate::error::{handle_service_error, ApiError};
use crate::methods::entities::RoleResponse;
use crate::methods::routes::ROLES_PATH;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = ROLES_PATH,
    tag = "roles",
    responses(
        (status = 200, description = "List of roles", body = [RoleResponse]),
        (status = 500, description = "Internal server error"),
    )
)]
pub async fn get_roles<U, R>(
    State(state): State<AppState<U, R>>,
) -> Result<Json<Vec<RoleResponse>>, ApiError>
where
    U: UserRepositoryTrait + 'static,
    R: UserRoleRepositoryTrait + 'static,
{
    state
        .user_service
        .get_roles()
        .await
        .map(|roles| Json(roles.into_iter().map(RoleResponse::from).collect()))
        .map_err(|e| handle_service_error(e, &state.env, "get_roles"))
}
