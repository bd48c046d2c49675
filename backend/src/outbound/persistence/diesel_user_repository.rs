//! PostgreSQL-backed `RecordRepository<User>` using Diesel.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{RecordPersistenceError, RecordRepository};
use crate::domain::{RecordId, User, UserChanges};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{NewUserRow, UserChangeset, UserRow};
use super::pool::{DbPool, PoolError};
use super::schema::users;

/// Diesel-backed user storage.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    /// Repository over connections from `pool`.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> RecordPersistenceError {
    map_basic_pool_error(error, RecordPersistenceError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> RecordPersistenceError {
    map_basic_diesel_error(
        error,
        RecordPersistenceError::query,
        RecordPersistenceError::connection,
    )
}

#[async_trait]
impl RecordRepository<User> for DieselUserRepository {
    async fn list_all(&self) -> Result<Vec<User>, RecordPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows = users::table
            .select(UserRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn insert(&self, record: &User) -> Result<User, RecordPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = diesel::insert_into(users::table)
            .values(NewUserRow::from(record))
            .returning(UserRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(User::from(row))
    }

    async fn update_by_id(
        &self,
        id: &RecordId,
        changes: &UserChanges,
    ) -> Result<Option<User>, RecordPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let target = users::table.find(*id.as_uuid());
        // Diesel refuses an UPDATE with no columns; nothing to change is a read.
        let row = if changes.is_empty() {
            target
                .select(UserRow::as_select())
                .first(&mut conn)
                .await
                .optional()
        } else {
            diesel::update(target)
                .set(UserChangeset::from(changes))
                .returning(UserRow::as_returning())
                .get_result(&mut conn)
                .await
                .optional()
        }
        .map_err(map_diesel_error)?;
        Ok(row.map(User::from))
    }

    async fn delete_by_id(&self, id: &RecordId) -> Result<bool, RecordPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let deleted = diesel::delete(users::table.find(*id.as_uuid()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(deleted > 0)
    }
}
