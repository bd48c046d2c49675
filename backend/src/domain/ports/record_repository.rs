//! Storage port for record collections and its errors.
//!
//! One trait serves every kind; adapters implement it once per collection.
//! Validation happens before these methods are called, so implementations
//! only ever see records that satisfy their schema.

use async_trait::async_trait;

use crate::domain::{Record, RecordId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by record repository adapters.
    pub enum RecordPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "record repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "record repository query failed: {message}",
    }
}

/// Durable storage for one record kind, keyed by [`RecordId`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordRepository<R: Record>: Send + Sync {
    /// Every stored record; order is unspecified.
    async fn list_all(&self) -> Result<Vec<R>, RecordPersistenceError>;

    /// Persist a new record and return it as stored.
    async fn insert(&self, record: &R) -> Result<R, RecordPersistenceError>;

    /// Apply changes to the record with `id`; `None` when no such record.
    async fn update_by_id(
        &self,
        id: &RecordId,
        changes: &R::Changes,
    ) -> Result<Option<R>, RecordPersistenceError>;

    /// Remove the record with `id`; `false` when no such record.
    async fn delete_by_id(&self, id: &RecordId) -> Result<bool, RecordPersistenceError>;
}
