//! Prometheus metrics for request counting and health-check latency.

use std::time::Instant;

use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use tracing::debug;

/// HTTP requests counter metric name.
pub const METRIC_HTTP_REQUESTS: &str = "http_requests_total";
/// Health check latency metric name.
pub const METRIC_HEALTH_CHECK_LATENCY: &str = "health_check_latency_ms";

/// Install the Prometheus recorder and register metric descriptions.
/// Call this once at startup; the returned handle renders the exposition
/// text for the `/metrics` endpoint.
pub fn init_metrics() -> Result<PrometheusHandle, BuildError> {
    let handle = PrometheusBuilder::new().install_recorder()?;

    describe_counter!(METRIC_HTTP_REQUESTS, "Total number of HTTP requests served");
    describe_histogram!(
        METRIC_HEALTH_CHECK_LATENCY,
        "Health report computation latency in milliseconds"
    );

    debug!("Metrics initialized");
    Ok(handle)
}

/// Increment the request counter for an endpoint.
pub fn inc_http_requests(endpoint: &str) {
    counter!(METRIC_HTTP_REQUESTS, "endpoint" => endpoint.to_string()).increment(1);
}

/// Record health report computation latency.
pub fn record_health_check_latency(start: Instant) {
    let latency_ms = start.elapsed().as_secs_f64() * 1000.0;
    histogram!(METRIC_HEALTH_CHECK_LATENCY).record(latency_ms);
}
