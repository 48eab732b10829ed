//! Health report types and status aggregation.

use serde::{Deserialize, Serialize};
use strum::Display;
use utoipa::ToSchema;

/// Whether the service fronts synthetic or live subsystems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, ToSchema)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OperatingMode {
    /// Synthetic subsystem behavior (no live inference backend).
    Simulation,
    /// Live production inference.
    Production,
}

/// Readiness of a single named subsystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, ToSchema)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ComponentState {
    /// Subsystem answered its self-check.
    Ready,
    /// Subsystem is still starting up.
    Initializing,
    /// Self-check failed or timed out.
    Error,
}

/// Overall service status derived from the component states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, ToSchema)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum HealthStatus {
    /// Every subsystem is ready.
    Healthy,
    /// At least one subsystem is not ready, none has failed.
    Degraded,
    /// At least one subsystem has failed.
    Unhealthy,
}

/// Per-subsystem readiness. The key set is fixed and exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct ComponentReport {
    /// Anomaly-detection inference engine.
    pub ml_engine: ComponentState,
    /// Synthetic fabric image generator.
    pub fabric_generator: ComponentState,
    /// Streaming channel for live detection results.
    pub websocket: ComponentState,
}

impl ComponentReport {
    /// The component states in registration order.
    pub fn states(&self) -> [ComponentState; 3] {
        [self.ml_engine, self.fabric_generator, self.websocket]
    }

    /// Aggregate overall status per the health invariant.
    pub fn overall(&self) -> HealthStatus {
        aggregate(&self.states())
    }
}

/// Detailed health report returned by `GET /health`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct HealthReport {
    /// Overall status: healthy iff every component is ready.
    pub status: HealthStatus,
    /// Current operating mode.
    pub mode: OperatingMode,
    /// Per-subsystem states.
    pub components: ComponentReport,
}

/// Healthy iff every component is ready; unhealthy if any component is in
/// error; degraded otherwise.
pub fn aggregate(states: &[ComponentState]) -> HealthStatus {
    if states.iter().any(|s| *s == ComponentState::Error) {
        HealthStatus::Unhealthy
    } else if states.iter().all(|s| *s == ComponentState::Ready) {
        HealthStatus::Healthy
    } else {
        HealthStatus::Degraded
    }
}
