//! Server Implementation
//!
//! HTTP server startup and lifecycle.

use shared::AppError;

use crate::api;
use crate::core::{Config, ServerState};

/// HTTP Server
pub struct Server {
    config: Config,
    state: ServerState,
}

impl Server {
    /// Create a server with already initialized state
    pub fn with_state(config: Config, state: ServerState) -> Self {
        Self { config, state }
    }

    /// Bind the listen address and serve until the process is stopped
    pub async fn run(&self) -> Result<(), AppError> {
        let app = api::build_app(self.state.clone());

        let listener = tokio::net::TcpListener::bind(&self.config.run_address)
            .await
            .map_err(|e| {
                AppError::internal(format!(
                    "Failed to bind {}: {}",
                    self.config.run_address, e
                ))
            })?;

        let addr = listener
            .local_addr()
            .map_err(|e| AppError::internal(format!("Failed to read local address: {}", e)))?;
        tracing::info!(environment = %self.config.environment, "Bonus Mart server listening on {}", addr);

        axum::serve(listener, app)
            .await
            .map_err(|e| AppError::internal(format!("Server error: {}", e)))
    }
}
