//! Login gateway entry-point: loads settings, wires the login controller to
//! its fixture capabilities, and serves the HTTP API.

mod server;

use std::sync::Arc;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use login_gateway::domain::LoginController;
use login_gateway::domain::ports::FixtureEmailValidator;
use login_gateway::inbound::http::health::HealthState;
use login_gateway::settings::GatewaySettings;

use server::{ServerConfig, create_server};

fn init_tracing(pretty: bool) {
    let builder = fmt().with_env_filter(EnvFilter::from_default_env());
    let outcome = if pretty {
        builder.pretty().try_init()
    } else {
        builder.json().try_init()
    };
    if let Err(e) = outcome {
        warn!(error = %e, "tracing init failed");
    }
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let settings = GatewaySettings::load_from_iter(std::env::args_os())
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    init_tracing(settings.pretty_logs);

    let controller = LoginController::new(
        Arc::new(FixtureEmailValidator),
        Arc::new(settings.fixture_authentication()),
    );
    let bind_addr = settings.bind_addr();
    let health_state = web::Data::new(HealthState::new());
    let server = create_server(
        health_state.clone(),
        ServerConfig::new(bind_addr, Arc::new(controller)),
    )?;

    let listening = health_state.listening().unwrap_or(bind_addr);
    info!(%listening, "login gateway listening");
    server.await
}
