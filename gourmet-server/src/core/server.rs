//! Server Implementation
//!
//! HTTP server startup, background tasks and graceful shutdown.

use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::core::{Config, ServerState};
use crate::services::{OrderSimulator, RandomOrderFeed};

/// HTTP Server
pub struct Server {
    config: Config,
    state: ServerState,
}

impl Server {
    pub fn new(config: Config, state: ServerState) -> Self {
        Self { config, state }
    }

    pub async fn run(&self) -> anyhow::Result<()> {
        let shutdown = CancellationToken::new();

        // Background order simulator
        let simulator = OrderSimulator::new(
            self.state.store.clone(),
            self.state.orders.clone(),
            Arc::new(RandomOrderFeed::new(self.config.simulator_probability)),
            Duration::from_secs(self.config.simulator_interval_secs),
        );
        let simulator_task = simulator.spawn(shutdown.clone());

        let app = crate::api::router(self.state.clone());

        let addr = std::net::SocketAddr::from(([0, 0, 0, 0], self.config.http_port));
        tracing::info!("GourmetGo server listening on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = tokio::signal::ctrl_c().await;
                tracing::info!("Shutting down...");
            })
            .await?;

        shutdown.cancel();
        let _ = simulator_task.await;

        Ok(())
    }
}
