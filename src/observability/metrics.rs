//! OTLP metrics for the flight operations.
//!
//! Key metrics:
//! - flights_lookup_total: Counter for flight lookups, by airline
//! - flights_booking_total: Counter for bookings, by flight number
//! - flights_injected_failure_total: Counter for deliberately raised failures, by route

use opentelemetry::metrics::{Counter, Meter};
use opentelemetry::{global, KeyValue};
use opentelemetry_sdk::metrics::{ManualReader, SdkMeterProvider};
use std::sync::OnceLock;

use super::signal_endpoint;

/// Global metrics instance.
static METRICS: OnceLock<Metrics> = OnceLock::new();

/// Flights metrics registry.
#[derive(Debug)]
pub struct Metrics {
    /// Total number of successful flight lookups.
    pub lookup_total: Counter<u64>,
    /// Total number of successful bookings.
    pub booking_total: Counter<u64>,
    /// Total number of failures raised on request.
    pub injected_failure_total: Counter<u64>,
}

impl Metrics {
    fn new(meter: &Meter) -> Self {
        Self {
            lookup_total: meter
                .u64_counter("flights_lookup_total")
                .with_description("Total number of flight lookups served")
                .with_unit("1")
                .init(),
            booking_total: meter
                .u64_counter("flights_booking_total")
                .with_description("Total number of flight bookings confirmed")
                .with_unit("1")
                .init(),
            injected_failure_total: meter
                .u64_counter("flights_injected_failure_total")
                .with_description("Failures raised through the raise query parameter")
                .with_unit("1")
                .init(),
        }
    }
}

fn manual_provider() -> SdkMeterProvider {
    let reader = ManualReader::builder().build();
    SdkMeterProvider::builder().with_reader(reader).build()
}

/// Initialize the metrics system.
///
/// This should be called once at startup. Subsequent calls are ignored.
/// With an endpoint, metrics are pushed every ten seconds to
/// `<otel_endpoint>/v1/metrics`; the periodic reader needs a Tokio runtime.
pub fn init_metrics_with_endpoint(otel_endpoint: Option<&str>) {
    METRICS.get_or_init(|| {
        if let Some(endpoint) = otel_endpoint {
            use opentelemetry_otlp::{Protocol, WithExportConfig};

            let exporter = opentelemetry_otlp::new_exporter()
                .http()
                .with_endpoint(signal_endpoint(endpoint, "metrics"))
                .with_protocol(Protocol::HttpBinary);

            match opentelemetry_otlp::new_pipeline()
                .metrics(opentelemetry_sdk::runtime::Tokio)
                .with_exporter(exporter)
                .with_period(std::time::Duration::from_secs(10))
                .build()
            {
                Ok(provider) => {
                    global::set_meter_provider(provider);
                    tracing::info!(endpoint, "OTLP metrics exporter configured");
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to create OTLP metrics exporter, recording locally");
                    global::set_meter_provider(manual_provider());
                }
            }
        } else {
            global::set_meter_provider(manual_provider());
        }

        let meter = global::meter("flights");
        Metrics::new(&meter)
    });
}

/// Initialize the metrics system without OTLP export.
pub fn init_metrics() {
    init_metrics_with_endpoint(None);
}

/// Attribute value for a caller-supplied string: the value itself when it is
/// one of `known`, otherwise `"other"`, so label cardinality stays fixed.
pub fn bounded_label(value: &str, known: &[&'static str]) -> &'static str {
    known
        .iter()
        .copied()
        .find(|candidate| *candidate == value)
        .unwrap_or(OTHER_LABEL)
}

pub const OTHER_LABEL: &str = "other";

impl Metrics {
    fn record_lookup(&self, airline: &'static str) {
        self.lookup_total.add(1, &[KeyValue::new("airline", airline)]);
    }

    fn record_booking(&self, flight_num: &'static str) {
        self.booking_total
            .add(1, &[KeyValue::new("flight_num", flight_num)]);
    }

    fn record_injected_failure(&self, route: &'static str) {
        self.injected_failure_total
            .add(1, &[KeyValue::new("route", route)]);
    }
}

/// Record a served flight lookup. `airline` should come from [`bounded_label`].
pub fn record_lookup(airline: &'static str) {
    if let Some(m) = METRICS.get() {
        m.record_lookup(airline);
    }
}

/// Record a confirmed booking. `flight_num` should come from [`bounded_label`].
pub fn record_booking(flight_num: &'static str) {
    if let Some(m) = METRICS.get() {
        m.record_booking(flight_num);
    }
}

/// Record a failure raised on request.
pub fn record_injected_failure(route: &'static str) {
    if let Some(m) = METRICS.get() {
        m.record_injected_failure(route);
    }
}
