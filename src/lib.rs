//! HTTP entry point for the AnomalyYunsa fabric quality inspection platform.
//!
//! The service reports its own liveness at `GET /` and the readiness of the
//! subsystems it will front (the inference engine, the synthetic fabric
//! generator, and the streaming channel) at `GET /health`. The inspection
//! pipeline itself is not part of this crate yet; future route groups for
//! fabric data, detection, and learning mount under their own URL prefixes.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`cors`]: Cross-origin policy for the browser frontend
//! - [`health`]: Subsystem probes and health aggregation
//! - [`api`]: HTTP routes and handlers
//! - [`server`]: Service bootstrap and listener lifecycle
//! - [`metrics`]: Prometheus metrics
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod cors;
pub mod error;
pub mod health;
pub mod metrics;
pub mod server;
pub mod utils;

pub use config::Config;
pub use error::{Result, ServiceError};
