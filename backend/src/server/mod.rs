//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::Server;
use actix_web::{App, HttpServer, web};
use tracing::info;

use crud_backend::Trace;
#[cfg(debug_assertions)]
use crud_backend::doc::ApiDoc;
use crud_backend::inbound::http::cors::cors;
use crud_backend::inbound::http::health::HealthState;
use crud_backend::inbound::http::state::HttpState;
use crud_backend::inbound::http::{configure, json_config};
use crud_backend::outbound::persistence::{DbPool, DieselItemRepository, DieselUserRepository};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

fn build_http_state(pool: &DbPool) -> web::Data<HttpState> {
    web::Data::new(HttpState::new(
        Arc::new(DieselItemRepository::new(pool.clone())),
        Arc::new(DieselUserRepository::new(pool.clone())),
    ))
}

/// Bind the listener and start serving.
///
/// Readiness is flipped once the socket is bound.
///
/// # Errors
///
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let ServerConfig {
        bind_addr,
        allowed_origin,
        workers,
        db_pool,
    } = config;
    let http_state = build_http_state(&db_pool);
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || {
        let app = App::new()
            .app_data(server_health_state.clone())
            .app_data(http_state.clone())
            .app_data(json_config())
            .wrap(cors(&allowed_origin))
            .wrap(Trace)
            .configure(configure);

        #[cfg(debug_assertions)]
        let app = app.service(
            SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
        );

        app
    })
    .workers(workers)
    .bind(bind_addr)?
    .run();

    info!(%bind_addr, workers, "listening");
    health_state.mark_ready();
    Ok(server)
}
