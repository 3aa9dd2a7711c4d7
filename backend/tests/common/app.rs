//! Shared HTTP harness for integration tests.

use std::sync::Arc;

use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::middleware::from_fn;
use actix_web::{App, test, web};
use mockable::DefaultClock;
use tripline::trace_requests;
use tripline::inbound::http::state::HttpState;
use tripline::inbound::http::{api_scope, json_config, route_not_found};

/// Initialise the API with fresh in-memory stores.
pub async fn init_app()
-> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error> {
    test::init_service(
        App::new()
            .app_data(web::Data::new(HttpState::in_memory(Arc::new(DefaultClock))))
            .app_data(json_config())
            .wrap(from_fn(trace_requests))
            .service(api_scope())
            .default_service(web::to(route_not_found)),
    )
    .await
}
