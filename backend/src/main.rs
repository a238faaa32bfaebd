//! Trivia API entry-point: loads settings, wires adapters and serves HTTP.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerConfig, create_server};
use trivia_api::domain::EmptyCategoryPolicy;
use trivia_api::inbound::http::health::HealthState;
use trivia_api::outbound::persistence::{DbPool, PoolConfig};
use trivia_api::settings::TriviaSettings;

fn config_error(err: impl std::fmt::Display) -> std::io::Error {
    std::io::Error::other(format!("invalid configuration: {err}"))
}

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

    let settings = TriviaSettings::load_from_iter(std::env::args_os()).map_err(config_error)?;
    let bind_addr = settings.bind_addr().map_err(config_error)?;

    let mut config = ServerConfig::new(bind_addr)
        .with_page_size(settings.page_size().map_err(config_error)?)
        .with_empty_category_policy(EmptyCategoryPolicy::from_legacy_flag(
            settings.legacy_category_status,
        ));

    if let Some(url) = settings.database_url() {
        let max_size = settings.pool_max_size().map_err(config_error)?;
        let pool_config = PoolConfig::new(url).with_max_size(max_size);
        let pool = DbPool::new(pool_config)
            .await
            .map_err(|err| std::io::Error::other(format!("database pool: {err}")))?;
        config = config.with_db_pool(pool);
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config)?;
    info!(%bind_addr, "trivia API listening");
    server.await
}
