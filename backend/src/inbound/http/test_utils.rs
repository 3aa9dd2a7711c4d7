//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::middleware::from_fn;
use actix_web::{App, web};
use mockable::DefaultClock;

use super::state::HttpState;
use super::{api_scope, json_config, route_not_found};
use crate::trace_requests;

/// State backed by fresh in-memory adapters.
pub(crate) fn in_memory_state() -> HttpState {
    HttpState::in_memory(Arc::new(DefaultClock))
}

/// Build the API application the way the server does, minus health probes.
pub(crate) fn test_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .app_data(json_config())
        .wrap(from_fn(trace_requests))
        .service(api_scope())
        .default_service(web::to(route_not_found))
}
