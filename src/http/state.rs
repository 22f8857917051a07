//! Application state for the HTTP server.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::db::FullRepository;
use crate::ingest::{LaunchClient, MoonDataClient};

/// Shared application state passed to all handlers.
///
/// Dependencies are injected here and threaded into every service call;
/// nothing is resolved from ambient/global context.
#[derive(Clone)]
pub struct AppState {
    /// Repository instance for storage operations
    pub repository: Arc<dyn FullRepository>,
    /// Launch Library 2 client
    pub launch_client: LaunchClient,
    /// USNO moon-phase client
    pub moon_client: MoonDataClient,
    /// Application configuration (month labels, default year)
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Create a new application state with the given repository and
    /// configuration, using default API clients.
    pub fn new(repository: Arc<dyn FullRepository>, config: AppConfig) -> Self {
        Self {
            repository,
            launch_client: LaunchClient::new(),
            moon_client: MoonDataClient::new(),
            config: Arc::new(config),
        }
    }

    /// Replace the ingest clients, e.g. to point at a test server.
    pub fn with_clients(mut self, launch_client: LaunchClient, moon_client: MoonDataClient) -> Self {
        self.launch_client = launch_client;
        self.moon_client = moon_client;
        self
    }
}
