//! HTTP server setup and lifecycle.
//!
//! Configures the axum server with:
//! - Flight, airline, health check and API description routes
//! - Graceful shutdown support

use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::watch;

use crate::config::Config;
use crate::random::IdGenerator;
use crate::service::create_router;

/// State shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub ids: IdGenerator,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            ids: IdGenerator::default(),
        }
    }
}

/// Run the flights HTTP server.
///
/// Returns once `shutdown_rx` fires and in-flight requests have completed.
pub async fn run_server(
    config: Config,
    mut shutdown_rx: watch::Receiver<bool>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let addr: SocketAddr = config.bind_address().parse()?;
    let debug_mode = config.debug;

    let app = create_router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(address = %addr, debug_mode, "Starting flights HTTP server");

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = shutdown_rx.changed().await;
            tracing::info!("Shutdown signal received, stopping server");
        })
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}
