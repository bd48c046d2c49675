//! Backend entry point: loads settings, migrates the schema, and serves HTTP.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{debug, error, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use crud_backend::inbound::http::health::HealthState;
use crud_backend::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations_async};
use crud_backend::settings::AppSettings;

use server::{ServerConfig, create_server};

fn startup_error(message: impl Into<String>) -> std::io::Error {
    std::io::Error::other(message.into())
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let dotenv = dotenv::dotenv();

    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }
    match dotenv {
        Ok(path) => debug!(path = %path.display(), "loaded .env file"),
        Err(e) => debug!(error = %e, "no .env file loaded"),
    }

    let settings = AppSettings::load().map_err(|e| {
        error!(error = %e, "failed to load settings");
        startup_error(e.to_string())
    })?;

    let database_url = settings.database_url().map_err(|e| {
        error!(error = %e, "storage connection failed");
        startup_error(e.to_string())
    })?;
    let pool_max_size = settings.pool_max_size().map_err(|e| {
        error!(error = %e, "invalid settings");
        startup_error(e.to_string())
    })?;

    run_pending_migrations_async(database_url.to_owned())
        .await
        .map_err(|e| {
            error!(error = %e, "storage connection failed");
            startup_error(e.to_string())
        })?;

    let pool = DbPool::new(PoolConfig::new(database_url).with_max_size(pool_max_size))
        .await
        .map_err(|e| {
            error!(error = %e, "storage connection failed");
            startup_error(e.to_string())
        })?;
    info!("storage connected");

    let config = ServerConfig::from_settings(&settings, pool).map_err(|e| {
        error!(error = %e, "invalid settings");
        startup_error(e.to_string())
    })?;

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    let handle = server.handle();
    actix_web::rt::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("shutdown requested, draining");
            health_state.mark_unhealthy();
            handle.stop(true).await;
        }
    });
    server.await
}
