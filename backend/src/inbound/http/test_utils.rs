//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};

use crate::Trace;
use crate::domain::ports::MockRecordRepository;
use crate::domain::{Item, User};
use crate::inbound::http::health::HealthState;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::{configure, error::json_config};

/// State backed by the given mocks.
///
/// A mock with no expectations panics when called, so pass
/// `MockRecordRepository::new()` for the kind a test should never touch.
pub fn mock_state(
    items: MockRecordRepository<Item>,
    users: MockRecordRepository<User>,
) -> HttpState {
    HttpState::new(Arc::new(items), Arc::new(users))
}

/// The production route table wrapped around `state`.
pub fn test_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .app_data(web::Data::new(HealthState::new()))
        .app_data(json_config())
        .wrap(Trace)
        .configure(configure)
}
