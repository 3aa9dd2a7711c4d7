//! Account API handlers.
//!
//! ```text
//! POST /api/v1/auth/signup {"email":"ada@example.com","password":"Sup3rSecret",...}
//! ```

use actix_web::{HttpResponse, post, web};
use serde_json::Value;
use tracing::info;

use crate::domain::schemas::sign_up_schema;
use crate::domain::{AppError, SignUp};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{AccountSchema, ErrorEnvelopeSchema, SignUpRequestSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::validated;

/// Create an account.
///
/// The body must pass the sign-up schema, including the password strength
/// rules and the confirmation match, before the account store is called.
#[utoipa::path(
    post,
    path = "/api/v1/auth/signup",
    request_body = SignUpRequestSchema,
    responses(
        (status = 201, description = "Account created", body = AccountSchema),
        (status = 400, description = "Validation failed", body = ErrorEnvelopeSchema),
        (status = 409, description = "Email already registered", body = ErrorEnvelopeSchema),
        (status = 503, description = "Storage unavailable", body = ErrorEnvelopeSchema),
        (status = 500, description = "Internal server error", body = ErrorEnvelopeSchema)
    ),
    tags = ["auth"],
    operation_id = "signUp"
)]
#[post("/auth/signup")]
pub async fn sign_up(
    state: web::Data<HttpState>,
    payload: web::Json<Value>,
) -> ApiResult<HttpResponse> {
    let sign_up: SignUp = validated(sign_up_schema(), &payload)?;
    let account = state
        .accounts
        .create(&sign_up)
        .await
        .map_err(AppError::from)?;
    info!(account_id = %account.id, "account created");
    Ok(HttpResponse::Created().json(account))
}
