//! AnomalyYunsa API service entry point.

use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use anomaly_yunsa::config::Config;
use anomaly_yunsa::server;

/// HTTP entry point for the AnomalyYunsa fabric inspection platform.
#[derive(Parser, Debug)]
#[command(name = "anomaly-yunsa")]
#[command(about = "Health and status service for the AnomalyYunsa fabric inspection platform")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,

    /// Listen address for the HTTP server.
    #[arg(long)]
    host: Option<String>,

    /// HTTP server port.
    #[arg(short, long)]
    port: Option<u16>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP service (default).
    Serve {
        /// Listen address for the HTTP server.
        #[arg(long)]
        host: Option<String>,

        /// HTTP server port.
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Check configuration validity.
    CheckConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    match args.command {
        Some(Command::CheckConfig) => cmd_check_config().await,
        Some(Command::Serve { host, port }) => cmd_serve(host, port, args.verbose).await,
        None => cmd_serve(args.host, args.port, args.verbose).await,
    }
}

/// The subscriber filter: `RUST_LOG` wins, the configured level is the
/// fallback, and verbose mode widens the crate's own level.
fn log_filter(config: &Config) -> EnvFilter {
    if config.verbose {
        EnvFilter::new("anomaly_yunsa=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback_filter(config))
    }
}

fn fallback_filter(config: &Config) -> EnvFilter {
    EnvFilter::new(&config.rust_log)
}

/// Run the HTTP service.
async fn cmd_serve(host: Option<String>, port: Option<u16>, verbose: bool) -> anyhow::Result<()> {
    let mut config = Config::load()?;

    // Override with CLI args if provided
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }
    if verbose {
        config.verbose = true;
    }

    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(log_filter(&config))
        .init();

    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        return Err(anyhow::anyhow!("Configuration validation failed: {}", e));
    }

    info!("Configuration loaded successfully");
    info!("Mode: {}", config.mode);
    info!("Allowed origins: {}", config.allowed_origins.join(", "));
    info!("Probe timeout: {}ms", config.probe_timeout_ms);

    if let Err(e) = server::run(config).await {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}

/// Check configuration validity.
async fn cmd_check_config() -> anyhow::Result<()> {
    println!("======================================================================");
    println!("ANOMALYYUNSA API - CONFIGURATION CHECK");
    println!("======================================================================");

    // Load configuration
    print!("Loading configuration... ");
    let config = match Config::load() {
        Ok(c) => {
            println!("OK");
            c
        }
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration load failed"));
        }
    };

    // Validate configuration
    print!("Validating configuration... ");
    match config.validate() {
        Ok(()) => println!("OK"),
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration validation failed"));
        }
    }

    // Show configuration summary
    println!("----------------------------------------------------------------------");
    println!("Configuration Summary:");
    println!("  Listen Address: {}:{}", config.host, config.port);
    println!("  Mode: {}", config.mode);
    println!("  Allowed Origins:");
    for origin in &config.allowed_origins {
        println!("    - {}", origin);
    }
    println!("  Allow Credentials: {}", config.allow_credentials);
    println!("  Probe Timeout: {}ms", config.probe_timeout_ms);
    println!("  Log Level: {}", config.rust_log);
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}
