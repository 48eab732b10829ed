//! Subsystem readiness probes and health aggregation.

pub mod monitor;
pub mod probe;
pub mod report;

pub use monitor::HealthMonitor;
pub use probe::{ProbeError, StaticProbe, SubsystemProbe};
pub use report::{ComponentReport, ComponentState, HealthReport, HealthStatus, OperatingMode};
