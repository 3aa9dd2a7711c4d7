//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every REST handler and the wrapper schemas from
//! [`crate::inbound::http::schemas`], which describe domain types without
//! coupling them to utoipa. The document backs Swagger UI in debug builds and
//! is exported via `cargo run --bin openapi-dump`.

use utoipa::OpenApi;

use crate::inbound::http::schemas::{
    AccountSchema, ErrorBodySchema, ErrorCodeSchema, ErrorEnvelopeSchema, ExpenseRequestSchema,
    ExpenseSchema, ProblemSchema, RequestEnvelopeSchema, SignUpRequestSchema, TripRequestSchema,
    TripSchema,
};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Tripline API",
        description = "Trip logging, sign-up and expense endpoints with schema validation and a uniform error envelope."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::accounts::sign_up,
        crate::inbound::http::trips::create_trip,
        crate::inbound::http::trips::list_trips,
        crate::inbound::http::trips::get_trip,
        crate::inbound::http::trips::list_trip_expenses,
        crate::inbound::http::expenses::create_expense,
        crate::inbound::http::forms::validate_form,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorCodeSchema,
        ErrorBodySchema,
        ErrorEnvelopeSchema,
        ProblemSchema,
        RequestEnvelopeSchema,
        TripRequestSchema,
        TripSchema,
        SignUpRequestSchema,
        AccountSchema,
        ExpenseRequestSchema,
        ExpenseSchema,
    )),
    tags(
        (name = "auth", description = "Account sign-up"),
        (name = "trips", description = "Trip logging"),
        (name = "expenses", description = "Business expenses logged against trips"),
        (name = "validation", description = "Inline form validation"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
