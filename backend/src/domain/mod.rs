//! Domain primitives, record schemas, ports, and the persistence gateway.
//!
//! Purpose: define the stored entity kinds and the CRUD contract over them
//! without depending on HTTP or database frameworks.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - Record / Kind / RecordId: per-kind schema contract and identifiers.
//! - Item / User: the two stored kinds with their draft and patch shapes.
//! - RecordGateway: validated CRUD over a [`ports::RecordRepository`].

pub mod error;
pub mod item;
pub mod ports;
pub mod record;
pub mod record_gateway;
pub mod schema;
pub mod trace_id;
pub mod user;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::item::{Item, ItemChanges, ItemDraft, ItemPatch, NewItem};
pub use self::record::{InvalidRecordId, Kind, Record, RecordId};
pub use self::record_gateway::{GatewayError, RecordGateway, Removal};
pub use self::schema::{MissingField, SchemaViolation, required_text, required_text_update};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{NewUser, User, UserChanges, UserDraft, UserPatch};
