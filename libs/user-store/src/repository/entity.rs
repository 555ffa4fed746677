use sqlx::mysql::{MySql, MySqlArguments, MySqlRow};
use sqlx::query::Query;
use sqlx::FromRow;

use crate::entities::{RolePatch, User, UserPatch, UserRole};

/// Compile-time descriptor binding a row-backed domain type to its table.
///
/// The consts drive the SQL text [`Repository`](crate::repository::Repository)
/// assembles; the binder methods supply values in the same column order.
/// `apply_patch` carries the partial-update contract: only fields present in
/// the patch overwrite the loaded row.
pub trait Entity: for<'r> FromRow<'r, MySqlRow> + Send + Sync + Unpin {
    /// Sparse update payload; absent fields preserve the stored value.
    type Patch: Send;

    const TABLE: &'static str;
    const SELECT_COLUMNS: &'static str;
    const INSERT_COLUMNS: &'static str;
    const INSERT_PLACEHOLDERS: &'static str;
    const UPDATE_ASSIGNMENTS: &'static str;

    fn bind_insert<'q>(
        &self,
        query: Query<'q, MySql, MySqlArguments>,
    ) -> Query<'q, MySql, MySqlArguments>;

    fn bind_update<'q>(
        &self,
        query: Query<'q, MySql, MySqlArguments>,
    ) -> Query<'q, MySql, MySqlArguments>;

    fn apply_patch(&mut self, patch: Self::Patch);
}

impl Entity for UserRole {
    type Patch = RolePatch;

    const TABLE: &'static str = "userrole";
    const SELECT_COLUMNS: &'static str = "id, name, description";
    const INSERT_COLUMNS: &'static str = "name, description";
    const INSERT_PLACEHOLDERS: &'static str = "?, ?";
    const UPDATE_ASSIGNMENTS: &'static str = "name = ?, description = ?";

    fn bind_insert<'q>(
        &self,
        query: Query<'q, MySql, MySqlArguments>,
    ) -> Query<'q, MySql, MySqlArguments> {
        query.bind(self.name.clone()).bind(self.description.clone())
    }

    fn bind_update<'q>(
        &self,
        query: Query<'q, MySql, MySqlArguments>,
    ) -> Query<'q, MySql, MySqlArguments> {
        query.bind(self.name.clone()).bind(self.description.clone())
    }

    fn apply_patch(&mut self, patch: RolePatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
    }
}

impl Entity for User {
    type Patch = UserPatch;

    const TABLE: &'static str = "user";
    const SELECT_COLUMNS: &'static str =
        "id, username, email, first_name, last_name, active, created_at, updated_at, role_id";
    const INSERT_COLUMNS: &'static str =
        "username, email, first_name, last_name, active, created_at, updated_at, role_id";
    const INSERT_PLACEHOLDERS: &'static str = "?, ?, ?, ?, ?, ?, ?, ?";
    const UPDATE_ASSIGNMENTS: &'static str =
        "username = ?, email = ?, first_name = ?, last_name = ?, active = ?, created_at = ?, updated_at = ?, role_id = ?";

    fn bind_insert<'q>(
        &self,
        query: Query<'q, MySql, MySqlArguments>,
    ) -> Query<'q, MySql, MySqlArguments> {
        query
            .bind(self.username.clone())
            .bind(self.email.clone())
            .bind(self.first_name.clone())
            .bind(self.last_name.clone())
            .bind(self.active)
            .bind(self.created_at)
            .bind(self.updated_at)
            .bind(self.role_id)
    }

    fn bind_update<'q>(
        &self,
        query: Query<'q, MySql, MySqlArguments>,
    ) -> Query<'q, MySql, MySqlArguments> {
        query
            .bind(self.username.clone())
            .bind(self.email.clone())
            .bind(self.first_name.clone())
            .bind(self.last_name.clone())
            .bind(self.active)
            .bind(self.created_at)
            .bind(self.updated_at)
            .bind(self.role_id)
    }

    fn apply_patch(&mut self, patch: UserPatch) {
        if let Some(username) = patch.username {
            self.username = username;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(first_name) = patch.first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = patch.last_name {
            self.last_name = last_name;
        }
        if let Some(active) = patch.active {
            self.active = active;
        }
        if let Some(role_id) = patch.role_id {
            self.role_id = role_id;
        }
    }
}
