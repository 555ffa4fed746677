use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use user_store::entities::{NewUser, User, UserDetail, UserPatch, UserRole};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Serialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 255))]
    pub username: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(max = 255))]
    pub first_name: String,
    #[validate(length(max = 255))]
    pub last_name: String,
    #[serde(default)]
    pub active: Option<bool>,
    #[serde(default)]
    pub role_id: Option<i64>,
}

impl From<CreateUserRequest> for NewUser {
    fn from(req: CreateUserRequest) -> Self {
        NewUser {
            username: req.username,
            email: req.email,
            first_name: req.first_name,
            last_name: req.last_name,
            active: req.active.unwrap_or(true),
            role_id: req.role_id,
        }
    }
}

/// Deserializes a field that was present in the body, wrapping it in the
/// outer `Some`. Combined with `#[serde(default)]` this keeps "omitted"
/// (`None`) distinct from "explicitly null" (`Some(None)`).
fn double_option<'de, D>(deserializer: D) -> Result<Option<Option<i64>>, D::Error>
where
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

/// Update payload with partial semantics: absent fields keep their stored
/// values. `"role_id": null` clears the role; leaving it out keeps it.
#[derive(Debug, Default, Deserialize, Serialize, Validate, ToSchema)]
pub struct UpdateUserRequest {
    pub username: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub active: Option<bool>,
    #[serde(default, deserialize_with = "double_option")]
    pub role_id: Option<Option<i64>>,
}

impl From<UpdateUserRequest> for UserPatch {
    fn from(req: UpdateUserRequest) -> Self {
        UserPatch {
            username: req.username,
            email: req.email,
            first_name: req.first_name,
            last_name: req.last_name,
            active: req.active,
            role_id: req.role_id,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RoleResponse {
    pub id: i64,
    pub name: String,
    pub description: String,
}

impl From<UserRole> for RoleResponse {
    fn from(role: UserRole) -> Self {
        RoleResponse {
            id: role.id,
            name: role.name,
            description: role.description,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub role_id: Option<i64>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        UserResponse {
            id: user.id,
            username: user.username,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            active: user.active,
            created_at: user.created_at,
            updated_at: user.updated_at,
            role_id: user.role_id,
        }
    }
}

/// Single-user read model with the role resolved by lookup.
#[derive(Debug, Serialize, ToSchema)]
pub struct UserDetailResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub role_id: Option<i64>,
    pub role: Option<RoleResponse>,
}

impl From<UserDetail> for UserDetailResponse {
    fn from(detail: UserDetail) -> Self {
        let user = detail.user;
        UserDetailResponse {
            id: user.id,
            username: user.username,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            active: user.active,
            created_at: user.created_at,
            updated_at: user.updated_at,
            role_id: user.role_id,
            role: detail.role.map(RoleResponse::from),
        }
    }
}

/// Collection read model: base fields only, no id or role linkage.
#[derive(Debug, Serialize, ToSchema)]
pub struct UserListResponse {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserListResponse {
    fn from(user: User) -> Self {
        UserListResponse {
            username: user.username,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            active: user.active,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}
