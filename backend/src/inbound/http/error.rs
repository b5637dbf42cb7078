//! HTTP mapping for structured errors.
//!
//! Action endpoints answer with an envelope and `200 OK` whatever happens
//! inside the domain. Requests that never reach the boundary (unparseable
//! bodies or path segments) are answered here with the error itself and its
//! status.

use actix_web::error::{JsonPayloadError, PathError};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError, web};
use tracing::warn;

use crate::domain::{Error, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

const REDACTED_MESSAGE: &str = "Internal server error";

fn redact_if_server_fault(error: &Error) -> Error {
    if !error.code().is_server_fault() {
        return error.clone();
    }
    let mut redacted = Error::new(error.code().clone(), REDACTED_MESSAGE).with_status(error.status());
    if let Some(id) = error.trace_id() {
        redacted = redacted.with_trace_id(id);
    }
    redacted
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        builder.json(redact_if_server_fault(self))
    }
}

/// JSON extractor configuration rejecting bad bodies with `INVALID_INPUT`.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: JsonPayloadError, _req: &HttpRequest| {
        warn!(error = %err, "rejected request body");
        Error::invalid_input(format!("Invalid request body: {err}")).into()
    })
}

/// Path extractor configuration rejecting bad segments with `INVALID_INPUT`.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err: PathError, _req: &HttpRequest| {
        warn!(error = %err, "rejected path parameters");
        Error::invalid_input(format!("Invalid path parameter: {err}")).into()
    })
}
