use std::net::SocketAddr;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use departure_board::board::DepartureResolver;
use departure_board::config::DEFAULT_OPTIONS_PATH;
use departure_board::ldb::{LdbClient, LdbConfig};
use departure_board::stations::StationDirectory;
use departure_board::web::{AppState, create_router};

/// Default listen address.
const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8124";

/// Default station directory file.
const DEFAULT_STATIONS_PATH: &str = "stations.json";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "departure_board=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let options_path =
        std::env::var("BOARD_OPTIONS_PATH").unwrap_or_else(|_| DEFAULT_OPTIONS_PATH.to_string());
    let stations_path =
        std::env::var("BOARD_STATIONS_PATH").unwrap_or_else(|_| DEFAULT_STATIONS_PATH.to_string());
    let addr: SocketAddr = std::env::var("BOARD_LISTEN_ADDR")
        .unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string())
        .parse()?;

    let client = LdbClient::new(LdbConfig::default())?;
    let stations = StationDirectory::load_or_empty(&stations_path);

    let state = AppState::new(DepartureResolver::new(client), stations, &options_path);
    let app = create_router(state);

    info!(%addr, options = %options_path, "departure board listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
