//! Tests for HTTP error mapping.

use super::*;
use crate::domain::schemas::trip_schema;
use crate::domain::validation::validate;
use crate::domain::{ErrorCode, ErrorEnvelope, TraceId};
use actix_web::body::to_bytes;
use rstest::rstest;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

async fn envelope_of(response: HttpResponse) -> ErrorEnvelope {
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    serde_json::from_slice(&bytes).expect("error envelope deserialises")
}

#[rstest]
#[case(Failure::from(AppError::unauthorized("no auth")), StatusCode::UNAUTHORIZED)]
#[case(Failure::from(AppError::not_found("missing")), StatusCode::NOT_FOUND)]
#[case(
    Failure::from(AppError::duplicate("exists").with_status(409)),
    StatusCode::CONFLICT
)]
#[case(Failure::untyped(&std::io::Error::other("boom")), StatusCode::INTERNAL_SERVER_ERROR)]
#[case(Failure::opaque(), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_failure(#[case] failure: Failure, #[case] status: StatusCode) {
    assert_eq!(ResponseError::status_code(&failure), status);
}

#[rstest]
#[actix_web::test]
async fn app_error_envelope_is_written() {
    let failure = Failure::from(AppError::unauthorized("sign in first"));
    let response = ResponseError::error_response(&failure);
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(response.headers().get(TRACE_ID_HEADER).is_none());

    let envelope = envelope_of(response).await;
    assert_eq!(envelope.error.code, ErrorCode::Unauthorized);
    assert_eq!(envelope.error.message, "sign in first");
}

#[rstest]
#[actix_web::test]
async fn untyped_failure_message_is_reported() {
    let failure = Failure::untyped(&std::io::Error::other("boom"));
    let envelope = envelope_of(ResponseError::error_response(&failure)).await;
    assert_eq!(envelope.error.code, ErrorCode::InternalError);
    assert_eq!(envelope.error.message, "boom");
}

#[rstest]
#[actix_web::test]
async fn validation_failure_is_bad_request_with_problems() {
    let errors = validate(trip_schema(), &serde_json::json!({})).expect_err("invalid");
    let response = ResponseError::error_response(&Failure::from(errors));
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let envelope = envelope_of(response).await;
    assert_eq!(envelope.error.code, ErrorCode::ValidationError);
    let problems = envelope
        .error
        .details
        .and_then(|details| details.get("problems").cloned())
        .expect("problems present");
    assert_eq!(problems[0]["path"], "trip_number");
    assert_eq!(problems[0]["constraint"], "required");
}

#[rstest]
#[actix_web::test]
async fn trace_id_is_echoed_in_header_and_body() {
    let trace_id: TraceId = TRACE_ID.parse().expect("valid UUID");
    let response = TraceId::scope(trace_id, async {
        ResponseError::error_response(&Failure::opaque())
    })
    .await;

    let header = response
        .headers()
        .get(TRACE_ID_HEADER)
        .expect("trace header present")
        .to_str()
        .expect("header is ascii")
        .to_owned();
    assert_eq!(header, TRACE_ID);

    let envelope = envelope_of(response).await;
    assert_eq!(envelope.error.trace_id.as_deref(), Some(TRACE_ID));
}

#[rstest]
fn actix_errors_enter_as_untyped_failures() {
    let err = actix_web::error::ErrorBadGateway("upstream went away");
    let failure = Failure::from(err);
    assert!(matches!(
        failure,
        Failure::Unknown(crate::domain::UnknownFailure::Untyped { ref message })
            if message == "upstream went away"
    ));
}
