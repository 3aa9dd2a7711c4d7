//! Expense API handlers.
//!
//! ```text
//! POST /api/v1/expenses  Log a business expense against an existing trip
//! ```

use actix_web::{HttpResponse, post, web};
use serde_json::Value;
use tracing::info;

use crate::domain::schemas::expense_schema;
use crate::domain::{AppError, ExpenseDraft};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorEnvelopeSchema, ExpenseRequestSchema, ExpenseSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::trips::require_trip;
use crate::inbound::http::validation::validated;

/// Log an expense. The referenced trip must exist.
#[utoipa::path(
    post,
    path = "/api/v1/expenses",
    request_body = ExpenseRequestSchema,
    responses(
        (status = 201, description = "Expense logged", body = ExpenseSchema),
        (status = 400, description = "Validation failed", body = ErrorEnvelopeSchema),
        (status = 404, description = "Unknown trip", body = ErrorEnvelopeSchema),
        (status = 503, description = "Storage unavailable", body = ErrorEnvelopeSchema),
        (status = 500, description = "Internal server error", body = ErrorEnvelopeSchema)
    ),
    tags = ["expenses"],
    operation_id = "createExpense"
)]
#[post("/expenses")]
pub async fn create_expense(
    state: web::Data<HttpState>,
    payload: web::Json<Value>,
) -> ApiResult<HttpResponse> {
    let draft: ExpenseDraft = validated(expense_schema(), &payload)?;
    require_trip(&state, &draft.trip_id).await?;
    let expense = state
        .expenses
        .insert(draft)
        .await
        .map_err(AppError::from)?;
    info!(expense_id = %expense.id, trip_id = %expense.trip_id, "expense logged");
    Ok(HttpResponse::Created().json(expense))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::domain::ports::{ExpensePersistenceError, MockExpenseRepository};
    use crate::domain::{ErrorCode, ErrorEnvelope, Expense, ExpenseCategory, Trip};
    use crate::inbound::http::test_utils::{in_memory_state, test_app};
    use crate::outbound::memory::{InMemoryAccountRepository, InMemoryTripRepository};
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use mockable::DefaultClock;
    use serde_json::json;

    fn trip_body() -> Value {
        json!({
            "trip_number": "T-9",
            "origin": "Bristol",
            "destination": "Cardiff",
            "start_time": "2024-06-03T07:30:00Z",
            "transport_mode": "car",
        })
    }

    fn expense_body(trip_id: &str) -> Value {
        json!({
            "trip_id": trip_id,
            "amount": "42.10",
            "currency": "GBP",
            "category": "Fuel",
            "incurred_at": "2024-06-03T10:00:00+01:00",
        })
    }

    fn post(uri: &str, body: Value) -> actix_web::test::TestRequest {
        actix_test::TestRequest::post().uri(uri).set_json(body)
    }

    #[actix_web::test]
    async fn expense_is_logged_and_listed_under_trip() {
        let app = actix_test::init_service(test_app(in_memory_state())).await;
        let trip: Trip = actix_test::call_and_read_body_json(
            &app,
            post("/api/v1/trips", trip_body()).to_request(),
        )
        .await;

        let response = actix_test::call_service(
            &app,
            post("/api/v1/expenses", expense_body(&trip.id.to_string())).to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let expense: Expense = actix_test::read_body_json(response).await;
        assert_eq!(expense.category, ExpenseCategory::Fuel);
        assert!((expense.amount - 42.10).abs() < f64::EPSILON);

        let listed: Vec<Expense> = actix_test::call_and_read_body_json(
            &app,
            actix_test::TestRequest::get()
                .uri(&format!("/api/v1/trips/{}/expenses", trip.id))
                .to_request(),
        )
        .await;
        assert_eq!(listed, vec![expense]);
    }

    #[actix_web::test]
    async fn expense_for_unknown_trip_is_not_found() {
        let app = actix_test::init_service(test_app(in_memory_state())).await;
        let response = actix_test::call_service(
            &app,
            post(
                "/api/v1/expenses",
                expense_body("3fa85f64-5717-4562-b3fc-2c963f66afa6"),
            )
            .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let envelope: ErrorEnvelope = actix_test::read_body_json(response).await;
        assert_eq!(envelope.error.code, ErrorCode::NotFound);
    }

    #[actix_web::test]
    async fn malformed_expense_lists_every_problem() {
        let app = actix_test::init_service(test_app(in_memory_state())).await;
        let response = actix_test::call_service(
            &app,
            post(
                "/api/v1/expenses",
                json!({ "trip_id": "nope", "amount": -1, "currency": "gbp" }),
            )
            .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let envelope: ErrorEnvelope = actix_test::read_body_json(response).await;
        let paths: Vec<String> = envelope.error.details.expect("details")["problems"]
            .as_array()
            .expect("problems array")
            .iter()
            .filter_map(|problem| problem["path"].as_str().map(str::to_owned))
            .collect();
        assert_eq!(
            paths,
            ["trip_id", "amount", "currency", "category", "incurred_at"]
        );
    }

    #[actix_web::test]
    async fn expense_store_outage_is_service_unavailable() {
        let clock = Arc::new(DefaultClock);
        let trips = Arc::new(InMemoryTripRepository::new(clock.clone()));
        let mut expenses = MockExpenseRepository::new();
        expenses
            .expect_insert()
            .times(1)
            .return_once(|_| Err(ExpensePersistenceError::connection("timed out")));
        let state = HttpState::new(
            trips,
            Arc::new(InMemoryAccountRepository::new(clock)),
            Arc::new(expenses),
        );
        let app = actix_test::init_service(test_app(state)).await;
        let trip: Trip = actix_test::call_and_read_body_json(
            &app,
            post("/api/v1/trips", trip_body()).to_request(),
        )
        .await;

        let response = actix_test::call_service(
            &app,
            post("/api/v1/expenses", expense_body(&trip.id.to_string())).to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        let envelope: ErrorEnvelope = actix_test::read_body_json(response).await;
        assert_eq!(envelope.error.code, ErrorCode::ServiceUnavailable);
    }
}
