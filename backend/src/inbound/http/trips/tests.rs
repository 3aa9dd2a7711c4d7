//! Tests for the trip handlers.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use mockable::DefaultClock;
use rstest::rstest;
use serde_json::{Value, json};

use super::*;
use crate::domain::ports::{MockTripRepository, TripPersistenceError};
use crate::domain::{ErrorCode, ErrorEnvelope, TransportMode};
use crate::inbound::http::test_utils::{in_memory_state, test_app};
use crate::outbound::memory::{InMemoryAccountRepository, InMemoryExpenseRepository};

fn trip_body(trip_number: &str) -> Value {
    json!({
        "trip_number": trip_number,
        "origin": "Leeds",
        "destination": "York",
        "start_time": "2024-05-01T09:00:00+01:00",
        "transport_mode": "train",
        "distance_km": "38.5",
    })
}

fn state_with_trips(trips: MockTripRepository) -> HttpState {
    let clock = Arc::new(DefaultClock);
    HttpState::new(
        Arc::new(trips),
        Arc::new(InMemoryAccountRepository::new(clock.clone())),
        Arc::new(InMemoryExpenseRepository::new(clock)),
    )
}

#[actix_web::test]
async fn create_trip_returns_created_trip() {
    let app = actix_test::init_service(test_app(in_memory_state())).await;
    let request = actix_test::TestRequest::post()
        .uri("/api/v1/trips")
        .set_json(trip_body("T-1"))
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let trip: Trip = actix_test::read_body_json(response).await;
    assert_eq!(trip.trip_number, "T-1");
    assert_eq!(trip.transport_mode, TransportMode::Train);
    assert_eq!(trip.distance_km, Some(38.5));
}

#[actix_web::test]
async fn create_trip_rejects_invalid_body_with_problems() {
    let app = actix_test::init_service(test_app(in_memory_state())).await;
    let request = actix_test::TestRequest::post()
        .uri("/api/v1/trips")
        .set_json(json!({
            "origin": "Leeds",
            "destination": "York",
            "start_time": "2024-05-01T09:00:00Z",
        }))
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let envelope: ErrorEnvelope = actix_test::read_body_json(response).await;
    assert_eq!(envelope.error.code, ErrorCode::ValidationError);
    let details = envelope.error.details.expect("details");
    let paths: Vec<&str> = details["problems"]
        .as_array()
        .expect("problems array")
        .iter()
        .filter_map(|problem| problem["path"].as_str())
        .collect();
    assert_eq!(paths, ["trip_number", "transport_mode"]);
}

#[rstest]
#[case("9999-12-31T23:30:00-01:00")]
#[case("0000-01-01T00:30:00+01:00")]
#[actix_web::test]
async fn create_trip_rejects_start_time_outside_utc_year_range(#[case] start: &str) {
    let app = actix_test::init_service(test_app(in_memory_state())).await;
    let mut body = trip_body("T-Y");
    body["start_time"] = json!(start);
    let request = actix_test::TestRequest::post()
        .uri("/api/v1/trips")
        .set_json(body)
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let envelope: ErrorEnvelope = actix_test::read_body_json(response).await;
    let details = envelope.error.details.expect("details");
    assert_eq!(details["problems"][0]["path"], "start_time");
    assert_eq!(details["problems"][0]["constraint"], "timestamp");
}

#[actix_web::test]
async fn duplicate_trip_number_is_a_conflict() {
    let app = actix_test::init_service(test_app(in_memory_state())).await;
    for expected in [StatusCode::CREATED, StatusCode::CONFLICT] {
        let request = actix_test::TestRequest::post()
            .uri("/api/v1/trips")
            .set_json(trip_body("T-7"))
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), expected);
        if expected == StatusCode::CONFLICT {
            let envelope: ErrorEnvelope = actix_test::read_body_json(response).await;
            assert_eq!(envelope.error.code, ErrorCode::DuplicateRecord);
        }
    }
}

#[rstest]
#[case(
    TripPersistenceError::connection("refused"),
    StatusCode::SERVICE_UNAVAILABLE,
    ErrorCode::ServiceUnavailable
)]
#[case(
    TripPersistenceError::query("syntax error"),
    StatusCode::INTERNAL_SERVER_ERROR,
    ErrorCode::DatabaseError
)]
#[actix_web::test]
async fn storage_failures_are_wrapped(
    #[case] failure: TripPersistenceError,
    #[case] status: StatusCode,
    #[case] code: ErrorCode,
) {
    let mut trips = MockTripRepository::new();
    trips
        .expect_list()
        .times(1)
        .return_once(move || Err(failure));
    let app = actix_test::init_service(test_app(state_with_trips(trips))).await;

    let request = actix_test::TestRequest::get().uri("/api/v1/trips").to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), status);

    let envelope: ErrorEnvelope = actix_test::read_body_json(response).await;
    assert_eq!(envelope.error.code, code);
    assert!(
        !envelope.error.message.contains("refused") && !envelope.error.message.contains("syntax"),
        "adapter detail leaked: {}",
        envelope.error.message
    );
}

#[actix_web::test]
async fn get_trip_round_trips_through_store() {
    let app = actix_test::init_service(test_app(in_memory_state())).await;
    let created: Trip = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/v1/trips")
            .set_json(trip_body("T-2"))
            .to_request(),
    )
    .await;

    let fetched: Trip = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::get()
            .uri(&format!("/api/v1/trips/{}", created.id))
            .to_request(),
    )
    .await;
    assert_eq!(fetched, created);
}

#[rstest]
#[case("/api/v1/trips/not-a-uuid", StatusCode::BAD_REQUEST, ErrorCode::InvalidInput)]
#[case(
    "/api/v1/trips/3fa85f64-5717-4562-b3fc-2c963f66afa6",
    StatusCode::NOT_FOUND,
    ErrorCode::NotFound
)]
#[case(
    "/api/v1/trips/3fa85f64-5717-4562-b3fc-2c963f66afa6/expenses",
    StatusCode::NOT_FOUND,
    ErrorCode::NotFound
)]
#[actix_web::test]
async fn trip_lookup_failures_use_the_envelope(
    #[case] uri: &str,
    #[case] status: StatusCode,
    #[case] code: ErrorCode,
) {
    let app = actix_test::init_service(test_app(in_memory_state())).await;
    let request = actix_test::TestRequest::get().uri(uri).to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), status);
    assert!(response.headers().contains_key("trace-id"));

    let envelope: ErrorEnvelope = actix_test::read_body_json(response).await;
    assert_eq!(envelope.error.code, code);
    assert!(envelope.error.trace_id.is_some());
}

#[actix_web::test]
async fn trips_are_listed_most_recent_first() {
    let app = actix_test::init_service(test_app(in_memory_state())).await;
    for (number, start) in [("A", "2024-01-01T08:00:00Z"), ("B", "2024-03-01T08:00:00Z")] {
        let mut body = trip_body(number);
        body["start_time"] = json!(start);
        let request = actix_test::TestRequest::post()
            .uri("/api/v1/trips")
            .set_json(body)
            .to_request();
        assert_eq!(
            actix_test::call_service(&app, request).await.status(),
            StatusCode::CREATED
        );
    }

    let trips: Vec<Trip> = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::get().uri("/api/v1/trips").to_request(),
    )
    .await;
    let numbers: Vec<&str> = trips.iter().map(|trip| trip.trip_number.as_str()).collect();
    assert_eq!(numbers, ["B", "A"]);
}
