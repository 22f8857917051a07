//! RoMo HTTP Server Binary
//!
//! This is the main entry point for the RoMo REST API server. It loads the
//! configuration, sets up the repository and the HTTP router, and starts
//! serving requests.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin romo-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0, overrides romo.toml)
//! - `PORT`: Server port (default: 8080, overrides romo.toml)
//! - `RUST_LOG`: Log filter (default: info)

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use romo_rust::config::AppConfig;
use romo_rust::db::LocalRepository;
use romo_rust::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(true)
        .init();

    info!("Starting RoMo HTTP Server");

    let config = AppConfig::from_default_location()?.with_env_overrides();

    // In-memory repository; data is (re)ingested per year via /v1/charts/init
    let repository = Arc::new(LocalRepository::new());
    info!("Repository initialized successfully");

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;

    let state = AppState::new(repository, config);
    let app = create_router(state);

    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
