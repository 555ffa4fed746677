use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A role users can be assigned to. Owns the one-to-many side of the
/// relation; users point back through `role_id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, FromRow)]
pub struct UserRole {
    pub id: i64,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct User {
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

/// Creation draft for a user. The id and both timestamps are assigned by the
/// store at insert time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub active: bool,
    pub role_id: Option<i64>,
}

impl NewUser {
    /// Materializes the draft into a row ready for insertion. Both
    /// timestamps start out equal; `updated_at` advances on every update.
    pub fn into_user(self, now: DateTime<Utc>) -> User {
        User {
            // placeholder, replaced by the database-assigned key on insert
            id: 0,
            username: self.username,
            email: self.email,
            first_name: self.first_name,
            last_name: self.last_name,
            active: self.active,
            created_at: now,
            updated_at: now,
            role_id: self.role_id,
        }
    }
}

/// Sparse update for a user. `None` leaves the stored value alone. `role_id`
/// distinguishes "not sent" (`None`) from "clear the role" (`Some(None)`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserPatch {
    pub username: Option<String>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub active: Option<bool>,
    pub role_id: Option<Option<i64>>,
}

/// Sparse update for a role.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RolePatch {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// A user together with its resolved role.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct UserDetail {
    #[serde(flatten)]
    pub user: User,
    pub role: Option<UserRole>,
}
