//! Backend entry-point: wires the dashboard REST endpoints and OpenAPI docs.

use actix_web::web;
use mockable::DefaultEnv;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use plantao_backend::inbound::http::health::HealthState;
use plantao_backend::outbound::directory::{BuildMode, directory_config_from_env};
use plantao_backend::server::{ServerConfig, bind_addr_from_env, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let env = DefaultEnv::new();
    let directory = directory_config_from_env(&env, BuildMode::from_debug_assertions())
        .map_err(std::io::Error::other)?;
    let bind_addr = bind_addr_from_env(&env).map_err(std::io::Error::other)?;

    let mut config = ServerConfig::new(bind_addr);
    if let Some(directory) = directory {
        config = config.with_directory(directory);
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    health_state.mark_ready();
    server.await
}
