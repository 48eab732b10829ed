//! Application configuration loaded from environment variables.

use std::net::{AddrParseError, IpAddr, SocketAddr};
use std::time::Duration;

use serde::Deserialize;

use crate::health::OperatingMode;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Server Configuration ===
    /// Listen address for the HTTP server.
    #[serde(default = "default_host")]
    pub host: String,

    /// HTTP server port.
    #[serde(default = "default_port")]
    pub port: u16,

    // === Operation Modes ===
    /// Operating mode: simulation (synthetic subsystems) or production.
    #[serde(default = "default_mode")]
    pub mode: OperatingMode,

    // === CORS Policy ===
    /// Browser origins allowed to read responses (comma-separated).
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,

    /// Whether credentialed cross-origin requests are allowed.
    #[serde(default = "default_true")]
    pub allow_credentials: bool,

    // === Health Probing ===
    /// Upper bound on a single subsystem self-check, in milliseconds.
    #[serde(default = "default_probe_timeout_ms")]
    pub probe_timeout_ms: u64,

    // === Logging ===
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub rust_log: String,

    /// Enable verbose logging.
    #[serde(default)]
    pub verbose: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_mode() -> OperatingMode {
    OperatingMode::Simulation
}

fn default_allowed_origins() -> Vec<String> {
    vec![
        "http://localhost:3000".to_string(),
        "http://localhost:5173".to_string(), // Vite default port
    ]
}

fn default_true() -> bool {
    true
}

fn default_probe_timeout_ms() -> u64 {
    250
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<(), String> {
        if self.host.parse::<IpAddr>().is_err() {
            return Err(format!("HOST is not a valid IP address: {}", self.host));
        }

        if self.allowed_origins.is_empty() {
            return Err("ALLOWED_ORIGINS must not be empty".to_string());
        }

        for origin in &self.allowed_origins {
            if !origin.starts_with("http://") && !origin.starts_with("https://") {
                return Err(format!("allowed origin must be an http(s) origin: {origin}"));
            }
        }

        if self.probe_timeout_ms == 0 {
            return Err("PROBE_TIMEOUT_MS must be greater than zero".to_string());
        }

        Ok(())
    }

    /// The socket address to bind.
    pub fn socket_addr(&self) -> Result<SocketAddr, AddrParseError> {
        Ok(SocketAddr::new(self.host.parse()?, self.port))
    }

    /// The subsystem self-check timeout as a [`Duration`].
    pub fn probe_timeout(&self) -> Duration {
        Duration::from_millis(self.probe_timeout_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            mode: default_mode(),
            allowed_origins: default_allowed_origins(),
            allow_credentials: default_true(),
            probe_timeout_ms: default_probe_timeout_ms(),
            rust_log: default_log_level(),
            verbose: false,
        }
    }
}
