//! Inline form validation.
//!
//! ```text
//! POST /api/v1/validate/{schema}  Check a form body without submitting it
//! ```
//!
//! Returns the flat request envelope rather than the error envelope so form
//! screens can show field problems as the user types. Secret fields such as
//! passwords are left out of the cleaned data.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, post, web};
use serde_json::{Value, json};

use crate::domain::AppError;
use crate::domain::schemas::by_name;
use crate::domain::validation::validate_request;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorEnvelopeSchema, RequestEnvelopeSchema};

/// Validate a body against a named schema.
#[utoipa::path(
    post,
    path = "/api/v1/validate/{schema}",
    params(("schema" = String, Path, description = "One of `trip`, `sign_up`, `expense`")),
    request_body = serde_json::Value,
    responses(
        (status = 200, description = "Body is valid; cleaned data returned", body = RequestEnvelopeSchema),
        (status = 400, description = "Body is invalid; problems returned", body = RequestEnvelopeSchema),
        (status = 404, description = "Unknown schema", body = ErrorEnvelopeSchema)
    ),
    tags = ["validation"],
    operation_id = "validateForm"
)]
#[post("/validate/{schema}")]
pub async fn validate_form(
    path: web::Path<String>,
    payload: web::Json<Value>,
) -> ApiResult<HttpResponse> {
    let name = path.into_inner();
    let schema = by_name(&name).ok_or_else(|| {
        AppError::not_found(format!("no schema named {name}"))
            .with_details(json!({ "schema": name }))
    })?;
    let mut envelope = validate_request(schema, &payload);
    if let Some(data) = envelope.data.as_mut() {
        schema.redact(data);
    }
    let status = if envelope.success {
        StatusCode::OK
    } else {
        StatusCode::BAD_REQUEST
    };
    Ok(HttpResponse::build(status).json(envelope))
}
