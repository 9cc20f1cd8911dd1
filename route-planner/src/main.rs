use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use route_planner::catalog::load_catalog;
use route_planner::config::ServerConfig;
use route_planner::web::{AppState, create_router};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    // Reference data is required; refuse to start without it
    let catalog = match load_catalog(&config.data_dir, &config.files) {
        Ok(catalog) => catalog,
        Err(e) => {
            error!(data_dir = %config.data_dir.display(), "Failed to load route data: {e}");
            return ExitCode::FAILURE;
        }
    };
    info!(
        routes = catalog.len(),
        cities = catalog.cities().count(),
        "Route catalog ready"
    );

    let state = AppState::new(catalog, &config.sessions);
    let sessions = state.sessions.clone();
    let app = create_router(state);

    let listener = match tokio::net::TcpListener::bind(config.addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(addr = %config.addr, "Failed to bind: {e}");
            return ExitCode::FAILURE;
        }
    };
    info!(addr = %config.addr, "Route planner listening");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("Server error: {e}");
        return ExitCode::FAILURE;
    }

    info!(live_sessions = sessions.entry_count(), "Route planner stopped");
    ExitCode::SUCCESS
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}
