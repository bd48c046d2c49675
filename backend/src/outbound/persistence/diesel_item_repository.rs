//! PostgreSQL-backed `RecordRepository<Item>` using Diesel.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{RecordPersistenceError, RecordRepository};
use crate::domain::{Item, ItemChanges, RecordId};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{ItemChangeset, ItemRow, NewItemRow};
use super::pool::{DbPool, PoolError};
use super::schema::items;

/// Diesel-backed item storage.
#[derive(Clone)]
pub struct DieselItemRepository {
    pool: DbPool,
}

impl DieselItemRepository {
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
impl RecordRepository<Item> for DieselItemRepository {
    async fn list_all(&self) -> Result<Vec<Item>, RecordPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows = items::table
            .select(ItemRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(Item::from).collect())
    }

    async fn insert(&self, record: &Item) -> Result<Item, RecordPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = diesel::insert_into(items::table)
            .values(NewItemRow::from(record))
            .returning(ItemRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(Item::from(row))
    }

    async fn update_by_id(
        &self,
        id: &RecordId,
        changes: &ItemChanges,
    ) -> Result<Option<Item>, RecordPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let target = items::table.find(*id.as_uuid());
        // Diesel refuses an UPDATE with no columns; nothing to change is a read.
        let row = if changes.is_empty() {
            target
                .select(ItemRow::as_select())
                .first(&mut conn)
                .await
                .optional()
        } else {
            diesel::update(target)
                .set(ItemChangeset::from(changes))
                .returning(ItemRow::as_returning())
                .get_result(&mut conn)
                .await
                .optional()
        }
        .map_err(map_diesel_error)?;
        Ok(row.map(Item::from))
    }

    async fn delete_by_id(&self, id: &RecordId) -> Result<bool, RecordPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let deleted = diesel::delete(items::table.find(*id.as_uuid()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(deleted > 0)
    }
}
