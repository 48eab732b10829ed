//! HTTP API handlers.

use std::sync::Arc;
use std::time::Instant;

use axum::{extract::State, Json};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Serialize;
use utoipa::ToSchema;

use crate::health::{HealthMonitor, HealthReport, OperatingMode};
use crate::metrics;
use crate::server::ServiceMetadata;

/// Application state shared with handlers.
///
/// Metadata and the health monitor are built once at bootstrap and are
/// read-only afterwards; future route groups receive this state explicitly
/// at registration time.
#[derive(Clone)]
pub struct AppState {
    /// Immutable service metadata.
    pub metadata: Arc<ServiceMetadata>,
    /// Subsystem health monitor.
    pub monitor: Arc<HealthMonitor>,
    /// Prometheus exposition handle.
    pub metrics: PrometheusHandle,
}

impl AppState {
    /// Create new app state.
    pub fn new(metadata: ServiceMetadata, monitor: HealthMonitor, metrics: PrometheusHandle) -> Self {
        Self {
            metadata: Arc::new(metadata),
            monitor: Arc::new(monitor),
            metrics,
        }
    }
}

/// Root liveness response.
#[derive(Debug, Serialize, ToSchema)]
pub struct RootStatus {
    /// Service display name.
    pub service: &'static str,
    /// Always "healthy": the process answering is alive.
    pub status: &'static str,
    /// Current operating mode.
    pub mode: OperatingMode,
    /// Service version.
    pub version: &'static str,
}

/// Root endpoint - service liveness summary.
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Service liveness summary", body = RootStatus))
)]
pub async fn root(State(state): State<AppState>) -> Json<RootStatus> {
    metrics::inc_http_requests("/");

    Json(RootStatus {
        service: state.metadata.name,
        status: "healthy",
        mode: state.monitor.mode(),
        version: state.metadata.version,
    })
}

/// Detailed health check - probes each subsystem under a time bound.
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Per-subsystem readiness report", body = HealthReport))
)]
pub async fn health(State(state): State<AppState>) -> Json<HealthReport> {
    metrics::inc_http_requests("/health");

    let start = Instant::now();
    let report = state.monitor.report().await;
    metrics::record_health_check_latency(start);

    Json(report)
}

/// Prometheus exposition endpoint.
pub async fn metrics_export(State(state): State<AppState>) -> String {
    state.metrics.render()
}
