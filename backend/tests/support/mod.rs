//! Shared helpers for the HTTP integration suites.
//!
//! The app is assembled exactly as the binary assembles it, but over the
//! in-memory repositories from `crud_backend::test_support`.

use std::sync::Arc;

use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::{Method, StatusCode, header};
use actix_web::{App, test as actix_test, web};
use crud_backend::Trace;
use crud_backend::domain::{Item, TRACE_ID_HEADER, User};
use crud_backend::inbound::http::cors::cors;
use crud_backend::inbound::http::health::HealthState;
use crud_backend::inbound::http::{configure, json_config};
use crud_backend::test_support::{InMemoryRecordRepository, in_memory_state};
use serde_json::Value;

pub const ALLOWED_ORIGIN: &str = "http://localhost:3000";

/// What a test needs to know about one response.
#[derive(Debug)]
pub struct Reply {
    pub status: StatusCode,
    pub trace_id: Option<String>,
    pub allow_origin: Option<String>,
    pub body: Value,
}

/// The full app plus handles on its stores.
pub struct Harness<S> {
    pub app: S,
    pub items: Arc<InMemoryRecordRepository<Item>>,
    pub users: Arc<InMemoryRecordRepository<User>>,
}

pub async fn harness() -> Harness<
    impl Service<actix_http::Request, Response = ServiceResponse<impl actix_web::body::MessageBody>, Error = actix_web::Error>,
> {
    let (state, items, users) = in_memory_state();
    let health = web::Data::new(HealthState::new());
    health.mark_ready();
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .app_data(health)
            .app_data(json_config())
            .wrap(cors(ALLOWED_ORIGIN))
            .wrap(Trace)
            .configure(configure),
    )
    .await;
    Harness { app, items, users }
}

fn header_text(response: &ServiceResponse<impl actix_web::body::MessageBody>, name: &str) -> Option<String> {
    response
        .headers()
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
}

/// Send `method path` with an optional JSON body and collect the reply.
pub async fn send<S, B>(app: &S, method: Method, path: &str, body: Option<Value>) -> Reply
where
    S: Service<actix_http::Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: actix_web::body::MessageBody,
{
    let mut request = actix_test::TestRequest::default()
        .method(method)
        .uri(path)
        .insert_header((header::ORIGIN, ALLOWED_ORIGIN));
    if let Some(json) = body {
        request = request.set_json(json);
    }
    let response = actix_test::call_service(app, request.to_request()).await;
    let status = response.status();
    let trace_id = header_text(&response, TRACE_ID_HEADER);
    let allow_origin = header_text(&response, header::ACCESS_CONTROL_ALLOW_ORIGIN.as_str());
    let bytes = actix_test::read_body(response).await;
    let body = serde_json::from_slice(&bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));
    Reply {
        status,
        trace_id,
        allow_origin,
        body,
    }
}
