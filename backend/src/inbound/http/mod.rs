//! HTTP inbound adapter exposing REST endpoints.
//!
//! Handlers validate bodies against the fixed schema set, call domain ports,
//! and return [`ApiResult`]. Every failure leaves through the single
//! `ResponseError` implementation in [`error`].

pub mod accounts;
pub mod error;
pub mod expenses;
pub mod forms;
pub mod health;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub(crate) mod test_utils;
pub mod trips;
pub mod validation;

use actix_web::{HttpRequest, HttpResponse, Scope, web};

use crate::domain::AppError;

pub use error::{ApiResult, json_error_handler};

/// Versioned API scope with every REST handler registered.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use tripline::inbound::http::{api_scope, json_config};
///
/// let _app = App::new().app_data(json_config()).service(api_scope());
/// ```
pub fn api_scope() -> Scope {
    web::scope("/api/v1")
        .service(accounts::sign_up)
        .service(trips::create_trip)
        .service(trips::list_trips)
        .service(trips::list_trip_expenses)
        .service(trips::get_trip)
        .service(expenses::create_expense)
        .service(forms::validate_form)
}

/// JSON extractor configuration routing body errors into the error envelope.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(json_error_handler)
}

/// Fallback for unmatched routes so they share the error envelope.
pub async fn route_not_found(req: HttpRequest) -> ApiResult<HttpResponse> {
    Err(AppError::not_found(format!("no route for {} {}", req.method(), req.path())).into())
}
