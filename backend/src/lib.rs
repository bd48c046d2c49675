//! Items and users CRUD backend.
//!
//! - [`domain`]: records, validation, the storage port and the gateway.
//! - [`inbound::http`]: Actix handlers and the error normaliser.
//! - [`outbound::persistence`]: Diesel/PostgreSQL adapters.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;
#[cfg(feature = "test-support")]
pub mod test_support;

/// Public OpenAPI surface used by Swagger UI.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
