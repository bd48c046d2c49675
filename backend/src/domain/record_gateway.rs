//! Persistence gateway: the single path from CRUD intents to storage.
//!
//! Every write is validated against the record's schema before the storage
//! port is touched, so an invalid payload never reaches the database. The
//! gateway returns an explicit result type; inbound adapters translate
//! "not found" themselves and hand everything else to the shared error
//! mapping through [`From<GatewayError> for Error`](Error).

use std::sync::Arc;

use serde_json::json;
use tracing::debug;

use super::ports::{RecordPersistenceError, RecordRepository};
use super::record::{Record, RecordId};
use super::schema::SchemaViolation;
use super::Error;

/// Outcome of a delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal {
    Removed,
    NotFound,
}

/// Failures surfaced by [`RecordGateway`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
    /// A required field is missing, `null`, or empty.
    #[error(transparent)]
    Validation(#[from] SchemaViolation),
    /// Storage rejected or could not run the operation.
    #[error(transparent)]
    Persistence(#[from] RecordPersistenceError),
}

impl From<GatewayError> for Error {
    fn from(error: GatewayError) -> Self {
        match error {
            GatewayError::Validation(violation) => Error::invalid_request(violation.to_string())
                .with_details(json!({
                    "kind": violation.kind().name(),
                    "fields": violation.fields(),
                    "code": "missing_field",
                })),
            GatewayError::Persistence(failure) => Error::internal(failure.to_string()),
        }
    }
}

/// CRUD operations for one record kind.
///
/// # Examples
/// ```ignore
/// let gateway = RecordGateway::<Item>::new(Arc::new(DieselItemRepository::new(pool)));
/// let created = gateway.insert(ItemDraft { name: Some("Lamp".into()), ..Default::default() }).await?;
/// ```
pub struct RecordGateway<R: Record> {
    repository: Arc<dyn RecordRepository<R>>,
}

impl<R: Record> Clone for RecordGateway<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: Record> RecordGateway<R> {
    /// Create a gateway over the given storage port.
    pub fn new(repository: Arc<dyn RecordRepository<R>>) -> Self {
        Self { repository }
    }

    /// Every record of this kind.
    pub async fn list_all(&self) -> Result<Vec<R>, GatewayError> {
        Ok(self.repository.list_all().await?)
    }

    /// Validate, assign an identifier, and persist a new record.
    pub async fn insert(&self, draft: R::Draft) -> Result<R, GatewayError> {
        let new = R::validate_draft(draft)?;
        let record = R::assemble(RecordId::random(), new);
        let stored = self.repository.insert(&record).await?;
        debug!(kind = %R::KIND, id = %stored.id(), "record inserted");
        Ok(stored)
    }

    /// Validate a partial update and apply it to the record with `id`.
    ///
    /// Returns `Ok(None)` when no such record exists.
    pub async fn update_by_id(
        &self,
        id: &RecordId,
        patch: R::Patch,
    ) -> Result<Option<R>, GatewayError> {
        let changes = R::validate_patch(patch)?;
        let updated = self.repository.update_by_id(id, &changes).await?;
        if updated.is_some() {
            debug!(kind = %R::KIND, %id, "record updated");
        }
        Ok(updated)
    }

    /// Remove the record with `id`.
    pub async fn delete_by_id(&self, id: &RecordId) -> Result<Removal, GatewayError> {
        if self.repository.delete_by_id(id).await? {
            debug!(kind = %R::KIND, %id, "record removed");
            Ok(Removal::Removed)
        } else {
            Ok(Removal::NotFound)
        }
    }
}
