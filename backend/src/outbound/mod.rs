//! Outbound adapters implementing domain ports.
//!
//! - **persistence**: PostgreSQL-backed record repositories using Diesel.
//!
//! Adapters are thin translators between domain records and storage rows.

pub mod persistence;
