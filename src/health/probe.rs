//! Subsystem self-check probes.

use futures::future::BoxFuture;
use thiserror::Error;

use super::report::ComponentState;

/// Failure of a single subsystem self-check.
#[derive(Error, Debug)]
pub enum ProbeError {
    /// The subsystem answered but reported a failure.
    #[error("subsystem reported failure: {0}")]
    Failed(String),
}

/// A bounded-time readiness check for one named subsystem.
///
/// A probe answers with its current [`ComponentState`] or an error. The
/// [`HealthMonitor`](super::HealthMonitor) enforces the time bound; a probe
/// that does not answer in time is classified as [`ComponentState::Error`]
/// without affecting the other subsystems.
pub trait SubsystemProbe: Send + Sync {
    /// Fixed subsystem name, used for logging.
    fn name(&self) -> &'static str;

    /// Run the self-check.
    fn check(&self) -> BoxFuture<'_, Result<ComponentState, ProbeError>>;
}

/// Probe that always answers with a fixed state.
///
/// Stands in for the inference engine, fabric generator, and streaming
/// channel until those subsystems exist and carry real self-checks.
#[derive(Debug, Clone, Copy)]
pub struct StaticProbe {
    name: &'static str,
    state: ComponentState,
}

impl StaticProbe {
    /// A probe pinned to the given state.
    pub fn new(name: &'static str, state: ComponentState) -> Self {
        Self { name, state }
    }

    /// A probe that always reports ready.
    pub fn ready(name: &'static str) -> Self {
        Self::new(name, ComponentState::Ready)
    }
}

impl SubsystemProbe for StaticProbe {
    fn name(&self) -> &'static str {
        self.name
    }

    fn check(&self) -> BoxFuture<'_, Result<ComponentState, ProbeError>> {
        let state = self.state;
        Box::pin(async move { Ok(state) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn static_probe_answers_its_pinned_state() {
        let probe = StaticProbe::ready("ml_engine");
        assert_eq!(probe.name(), "ml_engine");
        assert_eq!(probe.check().await.unwrap(), ComponentState::Ready);

        let probe = StaticProbe::new("websocket", ComponentState::Initializing);
        assert_eq!(probe.check().await.unwrap(), ComponentState::Initializing);
    }
}
