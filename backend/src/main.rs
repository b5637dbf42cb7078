//! Backend entry-point: reads settings, initialises logging, serves HTTP.

use actix_web::web;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use roster::inbound::http::health::HealthState;
use roster::server::{ServerSettings, create_server, run_until_shutdown};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load_from_args(std::env::args_os())?;
    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), &settings)?;
    run_until_shutdown(server, health_state).await
}
