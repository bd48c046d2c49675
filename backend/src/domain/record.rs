//! Shared record vocabulary: kinds, identifiers, and the per-kind schema
//! contract implemented by [`crate::domain::Item`] and
//! [`crate::domain::User`].

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::schema::SchemaViolation;

/// Entity type a record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Item,
    User,
}

impl Kind {
    /// Display name used in client-facing messages.
    pub fn name(self) -> &'static str {
        match self {
            Self::Item => "Item",
            Self::User => "User",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Malformed identifier text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid record id {value:?}: expected a UUID")]
pub struct InvalidRecordId {
    value: String,
}

/// System-generated, immutable record identifier.
///
/// # Examples
/// ```
/// use crud_backend::domain::RecordId;
///
/// let id = RecordId::parse("3fa85f64-5717-4562-b3fc-2c963f66afa6").expect("uuid");
/// assert_eq!(id.to_string(), "3fa85f64-5717-4562-b3fc-2c963f66afa6");
/// assert!(RecordId::parse("42").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(Uuid);

impl RecordId {
    /// Generate a new random identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse the textual form received in request paths.
    pub fn parse(value: &str) -> Result<Self, InvalidRecordId> {
        Uuid::parse_str(value).map(Self).map_err(|_| InvalidRecordId {
            value: value.to_owned(),
        })
    }

    /// Wrap an identifier read back from storage.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Schema contract for a stored entity kind.
///
/// `Draft` and `Patch` carry unvalidated client fields; validation turns them
/// into `New` and `Changes`, which are the only shapes the storage port ever
/// receives.
pub trait Record: Clone + Send + Sync + 'static {
    /// Kind tag used in messages.
    const KIND: Kind;

    /// Fields submitted on create.
    type Draft: Send + 'static;
    /// Validated create fields.
    type New: Send + 'static;
    /// Fields submitted on update.
    type Patch: Send + 'static;
    /// Validated update fields; `None` members leave stored values untouched.
    type Changes: Send + Sync + 'static;

    /// Check the full required-field set and apply default values.
    fn validate_draft(draft: Self::Draft) -> Result<Self::New, SchemaViolation>;

    /// Check that a patch leaves every required field populated once merged.
    fn validate_patch(patch: Self::Patch) -> Result<Self::Changes, SchemaViolation>;

    /// Build the record persisted on create.
    fn assemble(id: RecordId, new: Self::New) -> Self;

    /// Merge validated changes into the record.
    fn apply(&mut self, changes: &Self::Changes);

    /// Identifier of the record.
    fn id(&self) -> &RecordId;
}
