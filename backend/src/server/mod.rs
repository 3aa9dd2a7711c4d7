//! Server construction and middleware wiring.

mod config;

pub use config::{ServerConfig, ServerSettings};

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::middleware::from_fn;
use actix_web::{App, HttpServer, web};
use mockable::DefaultClock;
use tracing::info;

use tripline::trace_requests;
#[cfg(debug_assertions)]
use tripline::doc::ApiDoc;
use tripline::inbound::http::health::{Readiness, live, ready};
use tripline::inbound::http::state::HttpState;
use tripline::inbound::http::{api_scope, json_config, route_not_found};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[derive(Clone)]
struct AppDependencies {
    readiness: web::Data<Readiness>,
    http_state: web::Data<HttpState>,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        readiness,
        http_state,
    } = deps;

    let app = App::new()
        .app_data(readiness)
        .app_data(http_state)
        .app_data(json_config())
        .wrap(from_fn(trace_requests))
        .service(api_scope())
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app.default_service(web::to(route_not_found))
}

/// Construct an Actix HTTP server; `readiness` flips once the socket is bound.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    readiness: web::Data<Readiness>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_readiness = readiness.clone();
    let http_state = web::Data::new(HttpState::in_memory(Arc::new(DefaultClock)));

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            readiness: server_readiness.clone(),
            http_state: http_state.clone(),
        })
    })
    .bind(config.bind_addr())?
    .run();

    let (host, port) = config.bind_addr();
    info!(%host, port, "server listening");
    readiness.mark_listening();
    Ok(server)
}
