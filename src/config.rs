//! Configuration parsing for the flights service.
//!
//! Supports:
//! - CLI arguments via clap
//! - Environment variable overrides
//! - Defaults that match the demo collector stack

use clap::{ArgAction, Parser, ValueEnum};

/// Default OTLP/HTTP collector base address.
pub const DEFAULT_OTEL_ENDPOINT: &str = "http://alloy:4318";

/// Default service name attached to exported telemetry.
pub const DEFAULT_SERVICE_NAME: &str = "flights";

/// Filter used when neither `--log-level` nor `RUST_LOG` is set and debug mode is on.
pub const DEBUG_LOG_FILTER: &str = "debug,hyper=info,h2=info,reqwest=info";

/// Filter used when neither `--log-level` nor `RUST_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Console log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

/// Flights: a mock flight search and booking service.
#[derive(Parser, Debug, Clone)]
#[command(name = "flights")]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Host address to bind to
    #[arg(long, env = "FLIGHTS_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "FLIGHTS_PORT", default_value_t = 5001)]
    pub port: u16,

    /// Log filter directive (trace, debug, info, warn, error, or a full EnvFilter string)
    #[arg(long, env = "RUST_LOG")]
    pub log_level: Option<String>,

    /// Console log format
    #[arg(long, env = "FLIGHTS_LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    /// Development mode (verbose logging)
    #[arg(long, env = "FLIGHTS_DEBUG", default_value_t = true, action = ArgAction::Set)]
    pub debug: bool,

    /// OpenTelemetry collector base endpoint (OTLP over HTTP)
    #[arg(long, env = "OTEL_EXPORTER_OTLP_ENDPOINT", default_value = DEFAULT_OTEL_ENDPOINT)]
    pub otel_endpoint: String,

    /// Service name reported to the collector
    #[arg(long, env = "OTEL_SERVICE_NAME", default_value = DEFAULT_SERVICE_NAME)]
    pub service_name: String,

    /// Export spans alongside logs
    #[arg(long, env = "FLIGHTS_EXPORT_TRACES", default_value_t = true, action = ArgAction::Set)]
    pub export_traces: bool,

    /// Export request counters to the collector
    #[arg(long, env = "FLIGHTS_EXPORT_METRICS", default_value_t = true, action = ArgAction::Set)]
    pub export_metrics: bool,
}

impl Config {
    /// Parse configuration from CLI arguments and environment.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Effective log filter: explicit setting first, then the mode default.
    pub fn log_filter(&self) -> &str {
        match &self.log_level {
            Some(level) => level,
            None if self.debug => DEBUG_LOG_FILTER,
            None => DEFAULT_LOG_FILTER,
        }
    }

    /// Address string the HTTP listener binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 5001,
            log_level: None,
            log_format: LogFormat::Text,
            debug: true,
            otel_endpoint: DEFAULT_OTEL_ENDPOINT.into(),
            service_name: DEFAULT_SERVICE_NAME.into(),
            export_traces: true,
            export_metrics: true,
        }
    }
}
