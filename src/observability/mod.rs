//! OpenTelemetry observability infrastructure.
//!
//! Provides:
//! - Structured logging exported to an OTLP collector
//! - Optional span export for request tracing
//! - OTLP metrics for the flight operations

pub mod metrics;
pub mod tracing;

pub use self::tracing::{init_telemetry, init_test_tracing, TelemetryError, TelemetryHandle};

/// Append the OTLP/HTTP signal path (`v1/logs`, `v1/traces`, `v1/metrics`) to a
/// collector base address.
pub fn signal_endpoint(base: &str, signal: &str) -> String {
    format!("{}/v1/{}", base.trim_end_matches('/'), signal)
}
