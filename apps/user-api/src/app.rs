use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use user_store::repository::traits::{UserRepositoryTrait, UserRoleRepositoryTrait};

use crate::methods::create_user::{__path_create_user, create_user};
use crate::methods::delete_user::{__path_delete_user, delete_user};
use crate::methods::entities::{
    CreateUserRequest, RoleResponse, UpdateUserRequest, UserDetailResponse, UserListResponse,
    UserResponse,
};
use crate::methods::get_roles::{__path_get_roles, get_roles};
use crate::methods::get_user_by_id::{__path_get_user_by_id, get_user_by_id};
use crate::methods::get_users::{__path_get_users, get_users};
use crate::methods::health_check::{
    __path_get_version, __path_health_check, __path_root, get_version, health_check, root,
};
use crate::methods::routes::{
    ROLES_PATH, ROOT_PATH, SERVICE_DOCS_PATH, SERVICE_HEALTH_PATH, SERVICE_VERSION_PATH,
    USERS_BY_ID_PATH, USERS_PATH,
};
use crate::methods::update_user::{__path_update_user, update_user};
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        create_user, get_user_by_id, get_users, update_user, delete_user,
        get_roles,
        root, health_check, get_version
    ),
    components(schemas(
        CreateUserRequest, UpdateUserRequest, UserResponse, UserDetailResponse,
        UserListResponse, RoleResponse
    )),
    tags(
        (name = "users", description = "User management endpoints"),
        (name = "roles", description = "Role management endpoints")
    )
)]
pub struct ApiDoc;

/// Assembles the full application router over any store implementation.
pub fn build_router<U, R>(state: AppState<U, R>) -> Router
where
    U: UserRepositoryTrait + 'static,
    R: UserRoleRepositoryTrait + 'static,
{
    let entity_routes = Router::new()
        .route(USERS_PATH, get(get_users::<U, R>).post(create_user::<U, R>))
        .route(
            USERS_BY_ID_PATH,
            get(get_user_by_id::<U, R>)
                .put(update_user::<U, R>)
                .delete(delete_user::<U, R>),
        )
        .route(ROLES_PATH, get(get_roles::<U, R>));

    let root_routes = Router::new()
        .route(ROOT_PATH, get(root))
        .route(SERVICE_HEALTH_PATH, get(health_check))
        .route(SERVICE_VERSION_PATH, get(get_version))
        .merge(SwaggerUi::new(SERVICE_DOCS_PATH).url("/api-doc/openapi.json", ApiDoc::openapi()));

    Router::new()
        .merge(entity_routes)
        .merge(root_routes)
        .with_state(state)
}
