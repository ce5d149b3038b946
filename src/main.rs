mod app;
mod config;
mod routes;
mod services;
mod types;
mod utils;

use std::sync::Arc;

use config::AppConfig;
use services::{cta_client::cta_service::CtaService, poller::spawn_poller};
use tracing::{error, info, warn};
use types::{app_state::AppState, arrival_board::ArrivalBoard};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();
    info!("Starting app...");

    let config = AppConfig::from_env().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    let cta_service = CtaService::new(config.cta.clone());
    let board = ArrivalBoard::default();

    if config.fetch.stops.is_empty() {
        warn!("No stops configured, poller not started");
    } else {
        info!(
            stops = config.fetch.stops.len(),
            interval = ?config.update_interval,
            "Starting poller"
        );
        spawn_poller(
            Arc::new(cta_service.clone()),
            config.fetch.clone(),
            config.update_interval,
            board.clone(),
        );
    }

    let app = app::gen_app(AppState { cta_service, board });

    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    info!("Listening on {}", config.listen_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
