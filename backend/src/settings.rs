//! Application settings loaded via OrthoConfig.
//!
//! Values come from `APP_*` environment variables (or the matching CLI
//! flags). `port` carries a load-time default so an empty environment still
//! loads; the remaining fields are optional and their accessors apply defaults
//! and report the values that cannot be defaulted.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;
use url::Url;

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";
const DEFAULT_WORKERS: usize = 1;
const DEFAULT_POOL_MAX_SIZE: u32 = 10;

/// Problems with the loaded settings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("APP_DATABASE_URL is not set")]
    MissingDatabaseUrl,
    #[error("invalid allowed origin {value:?}: {reason}")]
    InvalidOrigin { value: String, reason: String },
    #[error("{field} must be greater than zero")]
    Zero { field: &'static str },
}

/// Runtime configuration for the HTTP service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "APP")]
pub struct AppSettings {
    /// PostgreSQL connection string.
    pub database_url: Option<String>,
    /// Listen port.
    #[ortho_config(default = 3000)]
    pub port: u16,
    /// Bind address.
    pub host: Option<IpAddr>,
    /// The single origin allowed by CORS.
    pub allowed_origin: Option<String>,
    /// Actix worker count.
    pub workers: Option<usize>,
    /// Maximum pooled database connections.
    pub pool_max_size: Option<u32>,
}

impl AppSettings {
    /// The PostgreSQL connection string; blank counts as missing.
    pub fn database_url(&self) -> Result<&str, SettingsError> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .ok_or(SettingsError::MissingDatabaseUrl)
    }

    /// Address the listener binds, falling back to all interfaces.
    pub fn host(&self) -> IpAddr {
        self.host.unwrap_or(DEFAULT_HOST)
    }

    /// Combined listen address.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host(), self.port)
    }

    /// The CORS origin in its serialised `scheme://host[:port]` form.
    pub fn allowed_origin(&self) -> Result<String, SettingsError> {
        let raw = self
            .allowed_origin
            .as_deref()
            .unwrap_or(DEFAULT_ALLOWED_ORIGIN);
        let invalid = |reason: String| SettingsError::InvalidOrigin {
            value: raw.to_owned(),
            reason,
        };
        let url = Url::parse(raw).map_err(|err| invalid(err.to_string()))?;
        let origin = url.origin();
        if !origin.is_tuple() {
            return Err(invalid("origin must include a scheme and host".to_owned()));
        }
        Ok(origin.ascii_serialization())
    }

    /// Actix worker count, at least one.
    pub fn workers(&self) -> Result<usize, SettingsError> {
        match self.workers.unwrap_or(DEFAULT_WORKERS) {
            0 => Err(SettingsError::Zero { field: "workers" }),
            n => Ok(n),
        }
    }

    /// Connection pool ceiling, at least one.
    pub fn pool_max_size(&self) -> Result<u32, SettingsError> {
        match self.pool_max_size.unwrap_or(DEFAULT_POOL_MAX_SIZE) {
            0 => Err(SettingsError::Zero {
                field: "pool_max_size",
            }),
            n => Ok(n),
        }
    }
}

#[cfg(test)]
mod tests {
    //! Configuration parsing, defaults, and validation.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 6] = [
        "APP_DATABASE_URL",
        "APP_PORT",
        "APP_HOST",
        "APP_ALLOWED_ORIGIN",
        "APP_WORKERS",
        "APP_POOL_MAX_SIZE",
    ];

    fn unset() -> AppSettings {
        AppSettings {
            database_url: None,
            port: 3000,
            host: None,
            allowed_origin: None,
            workers: None,
            pool_max_size: None,
        }
    }

    fn load_from_empty_args() -> AppSettings {
        AppSettings::load_from_iter([OsString::from("crud-backend")]).expect("config should load")
    }

    #[rstest]
    fn defaults_apply_when_unset() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));

        let settings = load_from_empty_args();

        assert_eq!(settings.database_url(), Err(SettingsError::MissingDatabaseUrl));
        assert_eq!(settings.bind_addr(), "0.0.0.0:3000".parse().expect("addr"));
        assert_eq!(
            settings.allowed_origin().as_deref(),
            Ok("http://localhost:3000")
        );
        assert_eq!(settings.workers(), Ok(1));
        assert_eq!(settings.pool_max_size(), Ok(10));
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("APP_DATABASE_URL", Some("postgres://db/records".to_owned())),
            ("APP_PORT", Some("8080".to_owned())),
            ("APP_HOST", Some("127.0.0.1".to_owned())),
            ("APP_ALLOWED_ORIGIN", Some("https://app.example.com/".to_owned())),
            ("APP_WORKERS", Some("4".to_owned())),
            ("APP_POOL_MAX_SIZE", Some("3".to_owned())),
        ]);

        let settings = load_from_empty_args();

        assert_eq!(settings.database_url(), Ok("postgres://db/records"));
        assert_eq!(settings.bind_addr(), "127.0.0.1:8080".parse().expect("addr"));
        assert_eq!(
            settings.allowed_origin().as_deref(),
            Ok("https://app.example.com")
        );
        assert_eq!(settings.workers(), Ok(4));
        assert_eq!(settings.pool_max_size(), Ok(3));
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn blank_database_url_counts_as_missing(#[case] raw: &str) {
        let settings = AppSettings {
            database_url: Some(raw.to_owned()),
            ..unset()
        };

        assert_eq!(settings.database_url(), Err(SettingsError::MissingDatabaseUrl));
    }

    #[rstest]
    #[case("localhost:3000")]
    #[case("not a url")]
    #[case("data:text/plain,hello")]
    fn malformed_origins_are_rejected(#[case] raw: &str) {
        let settings = AppSettings {
            allowed_origin: Some(raw.to_owned()),
            ..unset()
        };

        assert!(matches!(
            settings.allowed_origin(),
            Err(SettingsError::InvalidOrigin { .. })
        ));
    }

    #[rstest]
    fn zero_workers_are_rejected() {
        let settings = AppSettings {
            workers: Some(0),
            ..unset()
        };

        assert_eq!(settings.workers(), Err(SettingsError::Zero { field: "workers" }));
    }
}
