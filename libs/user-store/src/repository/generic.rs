use std::marker::PhantomData;

use sqlx::MySqlPool;

use crate::repository::entity::Entity;
use crate::repository::errors::RepositoryError;

fn select_sql<E: Entity>() -> String {
    format!("SELECT {} FROM `{}`", E::SELECT_COLUMNS, E::TABLE)
}

fn select_by_id_sql<E: Entity>() -> String {
    format!("SELECT {} FROM `{}` WHERE id = ?", E::SELECT_COLUMNS, E::TABLE)
}

fn insert_sql<E: Entity>() -> String {
    format!(
        "INSERT INTO `{}` ({}) VALUES ({})",
        E::TABLE,
        E::INSERT_COLUMNS,
        E::INSERT_PLACEHOLDERS
    )
}

fn update_sql<E: Entity>() -> String {
    format!("UPDATE `{}` SET {} WHERE id = ?", E::TABLE, E::UPDATE_ASSIGNMENTS)
}

fn delete_sql<E: Entity>() -> String {
    format!("DELETE FROM `{}` WHERE id = ?", E::TABLE)
}

/// Uniform CRUD access to one entity's table. Bound to a concrete entity
/// through the [`Entity`] descriptor; every operation is a single
/// autocommitted statement sequence against the pool.
pub struct Repository<E> {
    pool: MySqlPool,
    _entity: PhantomData<E>,
}

impl<E> Clone for Repository<E> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            _entity: PhantomData,
        }
    }
}

impl<E: Entity> std::fmt::Debug for Repository<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Repository").field("table", &E::TABLE).finish()
    }
}

impl<E: Entity> Repository<E> {
    pub fn new(pool: MySqlPool) -> Self {
        Self {
            pool,
            _entity: PhantomData,
        }
    }

    /// Looks up a row by primary key. An absent row is `Ok(None)`, never an
    /// error.
    pub async fn get(&self, id: i64) -> Result<Option<E>, RepositoryError> {
        let sql = select_by_id_sql::<E>();
        let row = sqlx::query_as::<_, E>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    /// Returns every row of the entity's table. No ORDER BY; callers must
    /// not rely on row order.
    pub async fn get_all(&self) -> Result<Vec<E>, RepositoryError> {
        let sql = select_sql::<E>();
        let rows = sqlx::query_as::<_, E>(&sql).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    /// Inserts a new row and returns it re-read from the store, so all
    /// server-assigned fields (the key in particular) are populated.
    pub async fn add(&self, entity: E) -> Result<E, RepositoryError> {
        let sql = insert_sql::<E>();
        let result = entity
            .bind_insert(sqlx::query(&sql))
            .execute(&self.pool)
            .await?;
        let id = result.last_insert_id() as i64;
        self.fetch_by_id(id).await
    }

    /// Loads the row, applies only the fields present in `patch`, writes the
    /// row back and returns it refreshed. Absent rows surface `NotFound`.
    pub async fn update(&self, id: i64, patch: E::Patch) -> Result<E, RepositoryError> {
        let mut row = self.get(id).await?.ok_or(RepositoryError::NotFound)?;
        row.apply_patch(patch);

        let sql = update_sql::<E>();
        row.bind_update(sqlx::query(&sql))
            .bind(id)
            .execute(&self.pool)
            .await?;

        self.fetch_by_id(id).await
    }

    /// Removes the row. Deleting an absent id surfaces `NotFound`, the same
    /// condition `update` uses.
    pub async fn delete(&self, id: i64) -> Result<bool, RepositoryError> {
        let sql = delete_sql::<E>();
        let result = sqlx::query(&sql).bind(id).execute(&self.pool).await?;
        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(true)
    }

    async fn fetch_by_id(&self, id: i64) -> Result<E, RepositoryError> {
        let sql = select_by_id_sql::<E>();
        let row = sqlx::query_as::<_, E>(&sql)
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }
}
