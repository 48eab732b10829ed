//! Health monitor: runs the subsystem probes and aggregates the report.

use std::time::Duration;

use tracing::warn;

use super::probe::{StaticProbe, SubsystemProbe};
use super::report::{ComponentReport, ComponentState, HealthReport, OperatingMode};

/// Name of the inference engine subsystem.
pub const ML_ENGINE: &str = "ml_engine";
/// Name of the synthetic fabric generator subsystem.
pub const FABRIC_GENERATOR: &str = "fabric_generator";
/// Name of the streaming channel subsystem.
pub const WEBSOCKET: &str = "websocket";

/// Answers liveness/readiness queries without side effects.
///
/// Each subsystem is checked through its probe under a shared time bound;
/// a probe failure or timeout marks that subsystem `error` and never fails
/// the report as a whole.
pub struct HealthMonitor {
    mode: OperatingMode,
    timeout: Duration,
    ml_engine: Box<dyn SubsystemProbe>,
    fabric_generator: Box<dyn SubsystemProbe>,
    websocket: Box<dyn SubsystemProbe>,
}

impl HealthMonitor {
    /// Monitor with caller-supplied probes.
    pub fn new(
        mode: OperatingMode,
        timeout: Duration,
        ml_engine: Box<dyn SubsystemProbe>,
        fabric_generator: Box<dyn SubsystemProbe>,
        websocket: Box<dyn SubsystemProbe>,
    ) -> Self {
        Self {
            mode,
            timeout,
            ml_engine,
            fabric_generator,
            websocket,
        }
    }

    /// Monitor with always-ready placeholder probes for the three subsystems.
    pub fn with_static_probes(mode: OperatingMode, timeout: Duration) -> Self {
        Self::new(
            mode,
            timeout,
            Box::new(StaticProbe::ready(ML_ENGINE)),
            Box::new(StaticProbe::ready(FABRIC_GENERATOR)),
            Box::new(StaticProbe::ready(WEBSOCKET)),
        )
    }

    /// The operating mode this monitor reports.
    pub fn mode(&self) -> OperatingMode {
        self.mode
    }

    /// Run all three probes concurrently and aggregate.
    pub async fn report(&self) -> HealthReport {
        let (ml_engine, fabric_generator, websocket) = tokio::join!(
            self.probe(self.ml_engine.as_ref()),
            self.probe(self.fabric_generator.as_ref()),
            self.probe(self.websocket.as_ref()),
        );

        let components = ComponentReport {
            ml_engine,
            fabric_generator,
            websocket,
        };

        HealthReport {
            status: components.overall(),
            mode: self.mode,
            components,
        }
    }

    async fn probe(&self, probe: &dyn SubsystemProbe) -> ComponentState {
        match tokio::time::timeout(self.timeout, probe.check()).await {
            Ok(Ok(state)) => state,
            Ok(Err(e)) => {
                warn!(subsystem = probe.name(), error = %e, "subsystem self-check failed");
                ComponentState::Error
            }
            Err(_) => {
                warn!(
                    subsystem = probe.name(),
                    timeout_ms = self.timeout.as_millis() as u64,
                    "subsystem self-check timed out"
                );
                ComponentState::Error
            }
        }
    }
}
