//! Backend entry-point: loads settings, initialises tracing and runs the
//! HTTP server.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerConfig, ServerSettings, create_server};
use tripline::inbound::http::health::Readiness;

fn init_tracing(pretty: bool) {
    let builder = fmt().with_env_filter(EnvFilter::from_default_env());
    let result = if pretty {
        builder.pretty().try_init()
    } else {
        builder.json().try_init()
    };
    if let Err(e) = result {
        warn!(error = %e, "tracing init failed");
    }
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let settings = ServerSettings::load_from_iter(std::env::args_os())
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    init_tracing(settings.pretty_logs);

    let readiness = web::Data::new(Readiness::new());
    let server = create_server(readiness, ServerConfig::from(&settings))?;
    server.await
}
