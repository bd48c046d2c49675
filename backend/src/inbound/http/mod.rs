//! HTTP inbound adapter exposing REST endpoints.

use actix_web::web;

pub mod cors;
pub mod error;
pub mod health;
pub mod items;
pub mod records;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;

pub use error::{ApiResult, json_config};

/// Register every route on an app or scope.
///
/// Handlers expect `web::Data<HttpState>` and `web::Data<HealthState>` in app
/// data; install [`json_config`] so malformed bodies become `400`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health::root)
        .service(health::live)
        .service(health::ready)
        .service(items::list_items)
        .service(items::create_item)
        .service(items::update_item)
        .service(items::delete_item)
        .service(users::list_users)
        .service(users::create_user)
        .service(users::update_user)
        .service(users::delete_user);
}
