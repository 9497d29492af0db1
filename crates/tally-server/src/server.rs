use tokio::net::TcpListener;

use crate::api::AppState;
use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::router::build_router;

/// Tally HTTP server.
pub struct TallyServer {
    config: ServerConfig,
    state: AppState,
}

impl TallyServer {
    /// Build a server whose stores are seeded according to `config`.
    pub fn new(config: ServerConfig) -> Self {
        let state = if config.seed_sample_data {
            AppState::seeded()
        } else {
            AppState::empty()
        };
        Self::with_state(config, state)
    }

    pub fn with_state(config: ServerConfig, state: AppState) -> Self {
        Self { config, state }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(self.state.clone())
    }

    /// Start serving requests.
    pub async fn serve(self) -> ServerResult<()> {
        let app = self.router();
        let listener = TcpListener::bind(self.config.bind_addr).await?;
        let commerce = self.state.commerce.counts();
        let social = self.state.social.counts();
        tracing::info!(
            addr = %self.config.bind_addr,
            products = commerce.products,
            users = social.users,
            "tally server listening"
        );
        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))
    }
}
