//! HTTP server bootstrap

use crate::api;
use crate::core::{Config, ServerState};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// The booking service HTTP server
pub struct Server {
    config: Config,
    state: ServerState,
}

impl Server {
    /// Create a server from an already-initialized state
    pub fn with_state(config: Config, state: ServerState) -> Self {
        Self { config, state }
    }

    /// Bind and serve until the process is stopped
    pub async fn run(self) -> Result<(), BoxError> {
        let app = api::create_router(self.state);

        let addr = format!("0.0.0.0:{}", self.config.http_port);
        let listener = tokio::net::TcpListener::bind(&addr).await?;
        tracing::info!("tavola-server HTTP listening on {addr}");

        axum::serve(listener, app).await?;
        Ok(())
    }
}
