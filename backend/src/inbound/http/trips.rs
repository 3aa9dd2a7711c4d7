//! Trip API handlers.
//!
//! ```text
//! POST /api/v1/trips                 Record a trip
//! GET  /api/v1/trips                 List trips, most recent first
//! GET  /api/v1/trips/{id}            Fetch one trip
//! GET  /api/v1/trips/{id}/expenses   List expenses logged against a trip
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde_json::Value;
use tracing::info;
use uuid::Uuid;

use crate::domain::schemas::trip_schema;
use crate::domain::{AppError, Expense, Trip, TripDraft};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{
    ErrorEnvelopeSchema, ExpenseSchema, TripRequestSchema, TripSchema,
};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_uuid, validated};

const TRIP_ID: FieldName = FieldName::new("id");

/// Resolve a trip or fail with `NOT_FOUND`.
pub(crate) async fn require_trip(state: &HttpState, id: &Uuid) -> ApiResult<Trip> {
    let trip = state.trips.find_by_id(id).await.map_err(AppError::from)?;
    trip.ok_or_else(|| AppError::not_found(format!("trip {id} was not found")).into())
}

/// Record a trip.
#[utoipa::path(
    post,
    path = "/api/v1/trips",
    request_body = TripRequestSchema,
    responses(
        (status = 201, description = "Trip recorded", body = TripSchema),
        (status = 400, description = "Validation failed", body = ErrorEnvelopeSchema),
        (status = 409, description = "Trip number already used", body = ErrorEnvelopeSchema),
        (status = 503, description = "Storage unavailable", body = ErrorEnvelopeSchema),
        (status = 500, description = "Internal server error", body = ErrorEnvelopeSchema)
    ),
    tags = ["trips"],
    operation_id = "createTrip"
)]
#[post("/trips")]
pub async fn create_trip(
    state: web::Data<HttpState>,
    payload: web::Json<Value>,
) -> ApiResult<HttpResponse> {
    let draft: TripDraft = validated(trip_schema(), &payload)?;
    let trip = state.trips.insert(draft).await.map_err(AppError::from)?;
    info!(trip_id = %trip.id, trip_number = %trip.trip_number, "trip recorded");
    Ok(HttpResponse::Created().json(trip))
}

/// List trips, most recent start time first.
#[utoipa::path(
    get,
    path = "/api/v1/trips",
    responses(
        (status = 200, description = "Trips", body = [TripSchema]),
        (status = 503, description = "Storage unavailable", body = ErrorEnvelopeSchema),
        (status = 500, description = "Internal server error", body = ErrorEnvelopeSchema)
    ),
    tags = ["trips"],
    operation_id = "listTrips"
)]
#[get("/trips")]
pub async fn list_trips(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Trip>>> {
    let trips = state.trips.list().await.map_err(AppError::from)?;
    Ok(web::Json(trips))
}

/// Fetch one trip by identifier.
#[utoipa::path(
    get,
    path = "/api/v1/trips/{id}",
    params(("id" = String, Path, description = "Trip identifier (UUID)")),
    responses(
        (status = 200, description = "Trip", body = TripSchema),
        (status = 400, description = "Malformed identifier", body = ErrorEnvelopeSchema),
        (status = 404, description = "Unknown trip", body = ErrorEnvelopeSchema),
        (status = 500, description = "Internal server error", body = ErrorEnvelopeSchema)
    ),
    tags = ["trips"],
    operation_id = "getTrip"
)]
#[get("/trips/{id}")]
pub async fn get_trip(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Trip>> {
    let id = parse_uuid(&path, TRIP_ID)?;
    let trip = require_trip(&state, &id).await?;
    Ok(web::Json(trip))
}

/// List the expenses logged against a trip, oldest first.
#[utoipa::path(
    get,
    path = "/api/v1/trips/{id}/expenses",
    params(("id" = String, Path, description = "Trip identifier (UUID)")),
    responses(
        (status = 200, description = "Expenses", body = [ExpenseSchema]),
        (status = 400, description = "Malformed identifier", body = ErrorEnvelopeSchema),
        (status = 404, description = "Unknown trip", body = ErrorEnvelopeSchema),
        (status = 500, description = "Internal server error", body = ErrorEnvelopeSchema)
    ),
    tags = ["trips"],
    operation_id = "listTripExpenses"
)]
#[get("/trips/{id}/expenses")]
pub async fn list_trip_expenses(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Vec<Expense>>> {
    let id = parse_uuid(&path, TRIP_ID)?;
    require_trip(&state, &id).await?;
    let expenses = state
        .expenses
        .list_for_trip(&id)
        .await
        .map_err(AppError::from)?;
    Ok(web::Json(expenses))
}

#[cfg(test)]
mod tests;
