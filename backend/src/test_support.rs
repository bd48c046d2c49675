//! Test utilities shared by unit and integration tests.
//!
//! Compiled with the `test-support` feature, which the crate enables for its
//! own dev builds through a self dev-dependency.

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{RecordPersistenceError, RecordRepository};
use crate::domain::{Item, Record, RecordId, User};
use crate::inbound::http::state::HttpState;

/// Storage port kept in process memory, in insertion order.
///
/// [`fail_with`](Self::fail_with) makes every subsequent call return the
/// given error, simulating an unavailable database.
pub struct InMemoryRecordRepository<R> {
    records: Mutex<Vec<R>>,
    failure: Mutex<Option<RecordPersistenceError>>,
}

impl<R> Default for InMemoryRecordRepository<R> {
    fn default() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            failure: Mutex::new(None),
        }
    }
}

impl<R: Record> InMemoryRecordRepository<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with `records`.
    pub fn with_records(records: impl IntoIterator<Item = R>) -> Self {
        Self {
            records: Mutex::new(records.into_iter().collect()),
            failure: Mutex::new(None),
        }
    }

    /// Fail every call with `error` until cleared with `None`.
    pub fn fail_with(&self, error: Option<RecordPersistenceError>) {
        match self.failure.lock() {
            Ok(mut slot) => *slot = error,
            Err(poisoned) => *poisoned.into_inner() = error,
        }
    }

    /// Snapshot of the stored records.
    pub fn snapshot(&self) -> Vec<R> {
        self.records
            .lock()
            .map(|records| records.clone())
            .unwrap_or_default()
    }

    fn guard(&self) -> Result<MutexGuard<'_, Vec<R>>, RecordPersistenceError> {
        let failure = self
            .failure
            .lock()
            .map_err(|_| RecordPersistenceError::connection("failure switch poisoned"))?
            .clone();
        if let Some(error) = failure {
            return Err(error);
        }
        self.records
            .lock()
            .map_err(|_| RecordPersistenceError::connection("in-memory store poisoned"))
    }
}

#[async_trait]
impl<R: Record> RecordRepository<R> for InMemoryRecordRepository<R> {
    async fn list_all(&self) -> Result<Vec<R>, RecordPersistenceError> {
        Ok(self.guard()?.clone())
    }

    async fn insert(&self, record: &R) -> Result<R, RecordPersistenceError> {
        let mut records = self.guard()?;
        if records.iter().any(|existing| existing.id() == record.id()) {
            return Err(RecordPersistenceError::query(format!(
                "duplicate {} id {}",
                R::KIND,
                record.id()
            )));
        }
        records.push(record.clone());
        Ok(record.clone())
    }

    async fn update_by_id(
        &self,
        id: &RecordId,
        changes: &R::Changes,
    ) -> Result<Option<R>, RecordPersistenceError> {
        let mut records = self.guard()?;
        Ok(records
            .iter_mut()
            .find(|record| record.id() == id)
            .map(|record| {
                record.apply(changes);
                record.clone()
            }))
    }

    async fn delete_by_id(&self, id: &RecordId) -> Result<bool, RecordPersistenceError> {
        let mut records = self.guard()?;
        let before = records.len();
        records.retain(|record| record.id() != id);
        Ok(records.len() < before)
    }
}

/// HTTP state over fresh in-memory stores, returning the stores for
/// inspection.
pub fn in_memory_state() -> (
    HttpState,
    Arc<InMemoryRecordRepository<Item>>,
    Arc<InMemoryRecordRepository<User>>,
) {
    let items = Arc::new(InMemoryRecordRepository::new());
    let users = Arc::new(InMemoryRecordRepository::new());
    let state = HttpState::new(items.clone(), users.clone());
    (state, items, users)
}
