//! Flights: a mock flight search and booking service.
//!
//! # Usage
//!
//! ```bash
//! flights --port 5001 --otel-endpoint http://localhost:4318
//! ```
//!
//! Environment variables can also be used:
//! - `FLIGHTS_PORT`: Port to listen on
//! - `OTEL_EXPORTER_OTLP_ENDPOINT`: Collector base address (OTLP over HTTP)
//! - `RUST_LOG`: Log filter (trace, debug, info, warn, error)

use anyhow::Context;
use flights::config::Config;
use flights::observability::init_telemetry;
use flights::observability::metrics::init_metrics_with_endpoint;
use flights::run_server;
use tokio::sync::watch;

/// Print startup banner with version and configuration.
fn print_banner(config: &Config) {
    let version = env!("CARGO_PKG_VERSION");
    eprintln!(
        r#"
  Flights v{} - mock flight search and booking

  Configuration:
    Address:    {}
    Debug:      {}
    Log Filter: {}
    Collector:  {}
    Service:    {}

  Press Ctrl+C to shutdown gracefully.
"#,
        version,
        config.bind_address(),
        config.debug,
        config.log_filter(),
        config.otel_endpoint,
        config.service_name,
    );
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse_args();

    // Logging sink: installed once, flushed at exit
    let telemetry = init_telemetry(&config).context("failed to initialize telemetry")?;

    if config.export_metrics {
        init_metrics_with_endpoint(Some(config.otel_endpoint.as_str()));
    } else {
        init_metrics_with_endpoint(None);
    }

    print_banner(&config);

    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    tokio::spawn(async move {
        let ctrl_c = tokio::signal::ctrl_c();

        #[cfg(unix)]
        {
            use tokio::signal::unix::{signal, SignalKind};
            match signal(SignalKind::terminate()) {
                Ok(mut sigterm) => {
                    tokio::select! {
                        _ = ctrl_c => {
                            tracing::info!("Received SIGINT (Ctrl+C), initiating shutdown...");
                        }
                        _ = sigterm.recv() => {
                            tracing::info!("Received SIGTERM, initiating shutdown...");
                        }
                    }
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to install SIGTERM handler");
                    let _ = ctrl_c.await;
                    tracing::info!("Received SIGINT (Ctrl+C), initiating shutdown...");
                }
            }
        }

        #[cfg(not(unix))]
        {
            let _ = ctrl_c.await;
            tracing::info!("Received Ctrl+C, initiating shutdown...");
        }

        let _ = shutdown_tx.send(true);
    });

    let result = run_server(config, shutdown_rx).await;
    if let Err(e) = &result {
        tracing::error!(error = %e, "Server error");
    }

    tracing::info!("Flights shutdown complete");

    // Provider shutdown blocks on the batch tasks; keep it off the async workers
    tokio::task::spawn_blocking(move || telemetry.shutdown())
        .await
        .context("telemetry shutdown task panicked")?;

    result.map_err(|e| anyhow::anyhow!(e))
}
