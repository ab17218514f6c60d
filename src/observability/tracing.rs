//! OpenTelemetry logging and tracing setup.
//!
//! Configures structured logging with:
//! - Console output (text or JSON)
//! - OTLP/HTTP log export through a batching logger provider
//! - Optional OTLP/HTTP span export

use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_appender_tracing::layer::OpenTelemetryTracingBridge;
use opentelemetry_otlp::{Protocol, WithExportConfig};
use opentelemetry_sdk::logs::LoggerProvider;
use opentelemetry_sdk::trace::TracerProvider;
use opentelemetry_sdk::{runtime, Resource};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::filter::Targets;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use super::signal_endpoint;
use crate::config::{Config, LogFormat};

/// Errors raised while building the telemetry pipeline.
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    #[error("failed to build OTLP log exporter: {0}")]
    Logs(#[from] opentelemetry::logs::LogError),

    #[error("failed to build OTLP span exporter: {0}")]
    Traces(#[from] opentelemetry::trace::TraceError),

    #[error("invalid log filter: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),

    #[error("tracing subscriber already installed: {0}")]
    Subscriber(#[from] tracing_subscriber::util::TryInitError),
}

/// Owns the exporter providers for the lifetime of the process.
///
/// Dropping the handle without calling [`TelemetryHandle::shutdown`] may lose
/// records still sitting in the batch queues.
pub struct TelemetryHandle {
    logger_provider: LoggerProvider,
    tracer_provider: Option<TracerProvider>,
}

impl TelemetryHandle {
    /// Flush pending batches and stop the exporters.
    ///
    /// Export failures are reported on the console only; the collector being
    /// unreachable is not an error for the service.
    pub fn shutdown(self) {
        if let Some(provider) = self.tracer_provider {
            if let Err(e) = provider.shutdown() {
                tracing::warn!(error = %e, "Failed to flush span exporter");
            }
        }
        if let Err(e) = self.logger_provider.shutdown() {
            tracing::warn!(error = %e, "Failed to flush log exporter");
        }
    }
}

fn resource(service_name: &str) -> Resource {
    Resource::new(vec![
        KeyValue::new("service.name", service_name.to_string()),
        KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ])
}

/// Keep the exporter's own HTTP client chatter out of the exported logs.
fn export_filter() -> Targets {
    Targets::new()
        .with_default(LevelFilter::TRACE)
        .with_target("hyper", LevelFilter::OFF)
        .with_target("hyper_util", LevelFilter::OFF)
        .with_target("h2", LevelFilter::OFF)
        .with_target("reqwest", LevelFilter::OFF)
        .with_target("tower", LevelFilter::OFF)
        .with_target("opentelemetry", LevelFilter::OFF)
        .with_target("opentelemetry_sdk", LevelFilter::OFF)
        .with_target("opentelemetry_otlp", LevelFilter::OFF)
}

fn build_logger_provider(config: &Config) -> Result<LoggerProvider, TelemetryError> {
    let exporter = opentelemetry_otlp::new_exporter()
        .http()
        .with_endpoint(signal_endpoint(&config.otel_endpoint, "logs"))
        .with_protocol(Protocol::HttpBinary);

    let provider = opentelemetry_otlp::new_pipeline()
        .logging()
        .with_resource(resource(&config.service_name))
        .with_exporter(exporter)
        .install_batch(runtime::Tokio)?;

    Ok(provider)
}

fn build_tracer_provider(config: &Config) -> Result<TracerProvider, TelemetryError> {
    let exporter = opentelemetry_otlp::new_exporter()
        .http()
        .with_endpoint(signal_endpoint(&config.otel_endpoint, "traces"))
        .with_protocol(Protocol::HttpBinary);

    let provider = opentelemetry_otlp::new_pipeline()
        .tracing()
        .with_exporter(exporter)
        .with_trace_config(
            opentelemetry_sdk::trace::Config::default().with_resource(resource(&config.service_name)),
        )
        .install_batch(runtime::Tokio)?;

    Ok(provider)
}

/// Initialize the process-wide logging sink.
///
/// This sets up:
/// - Console logging in the configured format
/// - Filter from `--log-level` / `RUST_LOG`, or the debug-mode default
/// - OTLP log export to `<otel_endpoint>/v1/logs`
/// - OTLP span export to `<otel_endpoint>/v1/traces` when enabled
///
/// Must be called once, from inside the Tokio runtime. A second call fails
/// with [`TelemetryError::Subscriber`].
pub fn init_telemetry(config: &Config) -> Result<TelemetryHandle, TelemetryError> {
    let filter = EnvFilter::try_new(config.log_filter())?;

    let fmt_layer = match config.log_format {
        LogFormat::Text => tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .boxed(),
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .with_current_span(true)
            .boxed(),
    };

    let logger_provider = build_logger_provider(config)?;
    let log_layer = OpenTelemetryTracingBridge::new(&logger_provider).with_filter(export_filter());

    let tracer_provider = if config.export_traces {
        Some(build_tracer_provider(config)?)
    } else {
        None
    };
    let trace_layer = tracer_provider.as_ref().map(|provider| {
        tracing_opentelemetry::layer()
            .with_tracer(provider.tracer(config.service_name.clone()))
            .with_filter(export_filter())
    });

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(filter)
        .with(log_layer)
        .with(trace_layer)
        .try_init()?;

    tracing::info!(
        service = %config.service_name,
        endpoint = %config.otel_endpoint,
        traces = config.export_traces,
        "Telemetry initialized"
    );

    Ok(TelemetryHandle {
        logger_provider,
        tracer_provider,
    })
}

/// Initialize tracing for tests (only logs errors).
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("error")
        .with_test_writer()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::Level;

    #[test]
    fn test_export_filter_drops_exporter_targets() {
        let targets = export_filter();
        assert!(!targets.would_enable("hyper::proto::h1", &Level::DEBUG));
        assert!(!targets.would_enable("reqwest::connect", &Level::ERROR));
        assert!(!targets.would_enable("opentelemetry_sdk", &Level::WARN));
    }

    #[test]
    fn test_export_filter_keeps_service_targets() {
        let targets = export_filter();
        assert!(targets.would_enable("flights::service::flights", &Level::INFO));
        assert!(targets.would_enable("flights::service::flights", &Level::ERROR));
    }

    #[test]
    fn test_init_test_tracing_is_idempotent() {
        init_test_tracing();
        init_test_tracing();
    }
}
