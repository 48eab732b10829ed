//! Service bootstrap and listener lifecycle.

use std::io::ErrorKind;

use tokio::net::TcpListener;
use tracing::info;

use crate::api::{create_router, AppState};
use crate::config::Config;
use crate::cors::cors_layer;
use crate::error::{Result, ServiceError};
use crate::health::HealthMonitor;
use crate::metrics;
use crate::utils::shutdown_signal;

/// Service display name, as reported by `GET /`.
pub const SERVICE_NAME: &str = "AnomalyYunsa API";

/// Immutable service metadata, built once at bootstrap and shared read-only
/// by all handlers.
#[derive(Debug, Clone)]
pub struct ServiceMetadata {
    /// Service display name.
    pub name: &'static str,
    /// Service version.
    pub version: &'static str,
    /// One-line service description.
    pub description: &'static str,
}

impl ServiceMetadata {
    /// Metadata derived from the crate manifest.
    pub fn from_crate() -> Self {
        Self {
            name: SERVICE_NAME,
            version: env!("CARGO_PKG_VERSION"),
            description: env!("CARGO_PKG_DESCRIPTION"),
        }
    }
}

/// Build the application state. Performs no I/O apart from installing the
/// process-wide metrics recorder.
pub fn initialize(config: &Config) -> Result<AppState> {
    let metadata = ServiceMetadata::from_crate();
    let monitor = HealthMonitor::with_static_probes(config.mode, config.probe_timeout());
    let handle = metrics::init_metrics()?;
    Ok(AppState::new(metadata, monitor, handle))
}

/// Bind the listener and serve until a termination signal arrives.
///
/// A bind failure on an occupied port surfaces as [`ServiceError::AddrInUse`]
/// so the process exits non-zero before serving any request.
pub async fn run(config: Config) -> Result<()> {
    let state = initialize(&config)?;
    let cors = cors_layer(&config)?;
    let router = create_router(state, cors);

    let addr = config
        .socket_addr()
        .map_err(|_| ServiceError::InvalidAddress {
            host: config.host.clone(),
            port: config.port,
        })?;

    let listener = TcpListener::bind(addr).await.map_err(|e| {
        if e.kind() == ErrorKind::AddrInUse {
            ServiceError::AddrInUse { addr }
        } else {
            ServiceError::Io(e)
        }
    })?;

    info!("HTTP server listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metadata_matches_crate_manifest() {
        let metadata = ServiceMetadata::from_crate();
        assert_eq!(metadata.name, "AnomalyYunsa API");
        assert_eq!(metadata.version, "0.1.0");
        assert!(!metadata.description.is_empty());
    }

    #[tokio::test]
    async fn run_fails_when_port_is_taken() {
        let occupied = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = occupied.local_addr().unwrap();

        let config = Config {
            host: addr.ip().to_string(),
            port: addr.port(),
            ..Config::default()
        };

        match run(config).await {
            Err(ServiceError::AddrInUse { addr: reported }) => assert_eq!(reported, addr),
            other => panic!("expected AddrInUse, got {other:?}"),
        }
    }
}
