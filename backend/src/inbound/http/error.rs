//! HTTP adapter for the failure channel.
//!
//! Purpose: let Actix handlers return [`Failure`] and have the framework
//! boundary call [`normalize`] exactly once per failed request, producing the
//! JSON error envelope and a matching status code.

use actix_web::error::JsonPayloadError;
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError};
use mockable::DefaultClock;
use serde_json::json;

use crate::domain::{AppError, Failure, TRACE_ID_HEADER, normalize};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Failure>;

fn status_for(status: u16) -> StatusCode {
    StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

impl ResponseError for Failure {
    fn status_code(&self) -> StatusCode {
        status_for(self.status())
    }

    fn error_response(&self) -> HttpResponse {
        let normalized = normalize(self, &DefaultClock);
        let mut builder = HttpResponse::build(status_for(normalized.status));
        if let Some(id) = normalized.body.error.trace_id.as_deref() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        builder.json(normalized.body)
    }
}

impl From<actix_web::Error> for Failure {
    fn from(err: actix_web::Error) -> Self {
        Failure::untyped(&err)
    }
}

/// Turn JSON extraction failures into `INVALID_INPUT` envelopes.
///
/// Register through `web::JsonConfig::default().error_handler(...)` so a
/// malformed body gets the same envelope as every other failure.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let message = match &err {
        JsonPayloadError::ContentType => "request body must be JSON",
        JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
            "request body is too large"
        }
        _ => "request body is not valid JSON",
    };
    let failure = Failure::from(
        AppError::invalid_input(message).with_details(json!({ "reason": err.to_string() })),
    );
    failure.into()
}

#[cfg(test)]
mod tests;
