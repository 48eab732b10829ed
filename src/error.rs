//! Unified error types for the service.

use std::net::SocketAddr;

use thiserror::Error;

/// Unified error type for the AnomalyYunsa service.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// The listen address is already bound by another process.
    #[error("address {addr} is already in use")]
    AddrInUse {
        /// The address that could not be bound.
        addr: SocketAddr,
    },

    /// The configured host/port pair does not form a valid socket address.
    #[error("invalid listen address {host}:{port}")]
    InvalidAddress {
        /// Configured host.
        host: String,
        /// Configured port.
        port: u16,
    },

    /// An allowed origin is not a valid HTTP header value.
    #[error("invalid CORS origin: {0}")]
    InvalidOrigin(String),

    /// The Prometheus recorder could not be installed.
    #[error("metrics recorder error: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, ServiceError>;
