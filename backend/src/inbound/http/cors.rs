//! Cross-origin policy: one allowed origin, the CRUD verbs, JSON bodies.

use actix_cors::Cors;
use actix_web::http::header;

use crate::domain::TRACE_ID_HEADER;

/// Build the CORS middleware for `origin` (e.g. `http://localhost:3000`).
pub fn cors(origin: &str) -> Cors {
    Cors::default()
        .allowed_origin(origin)
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .expose_headers(vec![TRACE_ID_HEADER])
        .max_age(3600)
}
