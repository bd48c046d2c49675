//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod record_repository;

#[cfg(test)]
pub use record_repository::MockRecordRepository;
pub use record_repository::{RecordPersistenceError, RecordRepository};
