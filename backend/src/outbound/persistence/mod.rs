//! PostgreSQL persistence adapters using Diesel.
//!
//! Repositories here only translate between Diesel rows and domain records;
//! validation has already happened in the gateway. Row structs (`models`)
//! and table definitions (`schema`) stay private to this module.
//!
//! # Example
//!
//! ```ignore
//! use crud_backend::outbound::persistence::{DbPool, DieselItemRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/records")).await?;
//! let items = DieselItemRepository::new(pool);
//! ```

mod diesel_basic_error_mapping;
mod diesel_item_repository;
mod diesel_user_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_item_repository::DieselItemRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{MigrationError, run_pending_migrations, run_pending_migrations_async};
pub use pool::{DbPool, PoolConfig, PoolError};
