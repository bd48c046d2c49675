//! HTTP adapter mapping for domain errors.
//!
//! This is the only place that decides the status code of a failed request.
//! Handlers propagate [`Error`] with `?`; body extraction failures are routed
//! here through [`json_error_handler`].

use actix_web::error::JsonPayloadError;
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode, web};
use tracing::{error, warn};

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            error!(
                code = ?self.code(),
                trace_id = self.trace_id(),
                message = self.message(),
                "request failed"
            );
        } else {
            warn!(
                code = ?self.code(),
                trace_id = self.trace_id(),
                message = self.message(),
                "request rejected"
            );
        }

        let mut builder = HttpResponse::build(status);
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        builder.json(self)
    }
}

/// Turn JSON extraction failures into `400 invalid_request` responses.
///
/// Install with [`json_config`].
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let message = match &err {
        JsonPayloadError::ContentType => "expected a JSON request body".to_owned(),
        other => format!("invalid JSON body: {other}"),
    };
    Error::invalid_request(message).into()
}

/// JSON extractor configuration shared by every route.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(json_error_handler)
}
