//! Reverse Analytics server
//!
//! ```sh
//! # Run with default config (~/.config/reverse-analytics/config.toml)
//! reverse-analytics
//!
//! # Custom config path and port
//! reverse-analytics --config /etc/reverse-analytics/config.toml --port 8081
//!
//! # Print the resolved configuration without starting
//! reverse-analytics --check
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};

use reverse_analytics::config::{default_config_path, AppConfig};
use reverse_analytics::server::{init_tracing, ServerHandle, ServerOptions};

/// Inventory and sales REST API.
#[derive(Parser, Debug)]
#[command(
    name = "reverse-analytics",
    version,
    about = "Inventory and sales REST API with paginated list endpoints",
    long_about = "REST API for categories, products, customers, suppliers, supplies, \
                  sales and sale debts.\n\n\
                  Default config: ~/.config/reverse-analytics/config.toml"
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "REVERSE_ANALYTICS_CONFIG")]
    config: Option<PathBuf>,

    /// Override the listen port.
    #[arg(short, long)]
    port: Option<u16>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Validate the configuration, print it and exit without starting.
    #[arg(long)]
    check: bool,

    /// Skip database migrations on startup.
    #[arg(long)]
    no_migrate: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config_path = cli.config.unwrap_or_else(default_config_path);

    let (mut config, load_error) = match AppConfig::load(&config_path) {
        Ok(cfg) => (cfg, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    if cli.check {
        if let Some(e) = load_error {
            eprintln!("Configuration is invalid: {}", e);
            std::process::exit(1);
        }
        println!("# {}", config_path.display());
        println!("{}", config.to_toml()?);
        return Ok(());
    }

    init_tracing(&config);
    match load_error {
        None => info!("Configuration loaded from {}", config_path.display()),
        Some(e) => {
            error!("Failed to load config from {}: {}", config_path.display(), e);
            error!("Using default configuration.");
        }
    }

    let handle = ServerHandle::start(ServerOptions {
        config,
        auto_migrate: !cli.no_migrate,
    })
    .await?;

    handle.install_signal_handler();
    info!("Press Ctrl+C to shutdown gracefully.");

    handle.shutdown_signal().wait().await;
    handle.wait().await;

    Ok(())
}
