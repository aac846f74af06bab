//! Server Implementation
//!
//! HTTP server startup and shutdown.

use std::time::Duration;

use crate::api;
use crate::core::{Config, ServerState};
use crate::dialogue::SESSION_IDLE_TIMEOUT;

const EVICTION_SWEEP_INTERVAL: Duration = Duration::from_secs(300);

/// HTTP Server
pub struct Server {
    config: Config,
    state: Option<ServerState>,
}

impl Server {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            state: None,
        }
    }

    /// Create server with existing state (for sharing with tests)
    pub fn with_state(config: Config, state: ServerState) -> Self {
        Self {
            config,
            state: Some(state),
        }
    }

    pub async fn run(&self) -> anyhow::Result<()> {
        let state = match &self.state {
            Some(s) => s.clone(),
            None => ServerState::initialize(&self.config),
        };

        // Sweep abandoned conversations in the background.
        let conversations = state.conversations.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(EVICTION_SWEEP_INTERVAL);
            loop {
                interval.tick().await;
                let evicted = conversations.evict_idle(SESSION_IDLE_TIMEOUT);
                if evicted > 0 {
                    tracing::info!(evicted, "Removed abandoned conversations");
                }
            }
        });

        let app = api::build_app(state);

        let addr = std::net::SocketAddr::from(([0, 0, 0, 0], self.config.http_port));
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("Booking server listening on http://{}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = tokio::signal::ctrl_c().await;
                tracing::info!("Shutting down...");
            })
            .await?;

        Ok(())
    }
}
