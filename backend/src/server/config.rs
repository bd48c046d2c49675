//! HTTP server configuration object and helpers.

use std::net::SocketAddr;

use crud_backend::outbound::persistence::DbPool;
use crud_backend::settings::{AppSettings, SettingsError};

/// Everything [`super::create_server`] needs besides the health flags.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) allowed_origin: String,
    pub(crate) workers: usize,
    pub(crate) db_pool: DbPool,
}

impl ServerConfig {
    /// Combine validated settings with a connected pool.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] when the origin or worker count is invalid.
    pub fn from_settings(settings: &AppSettings, db_pool: DbPool) -> Result<Self, SettingsError> {
        Ok(Self {
            bind_addr: settings.bind_addr(),
            allowed_origin: settings.allowed_origin()?,
            workers: settings.workers()?,
            db_pool,
        })
    }
}
