//! Lead intelligence web front-end.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ──────────────▶ request id ─▶ trace ─▶ timeout/limits ─▶ headers
//!                                                                │
//!                                                                ▼
//!                                        excluded path? ──yes──▶ API / assets
//!                                                │
//!                                                no
//!                                                ▼
//!                                          access gate ──redirect──▶ 307 Location
//!                                                │
//!                                              allow
//!                                                ▼
//!                                           page shell
//! ```

use std::path::PathBuf;

use clap::Parser;

use lead_intel_web::config::{load_config, WebConfig};
use lead_intel_web::lifecycle::startup;
use lead_intel_web::observability::logging;

#[derive(Parser)]
#[command(name = "lead-intel-web")]
#[command(about = "Web front-end server for the lead intelligence product", long_about = None)]
struct Cli {
    /// TOML configuration file. Built-in defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Reload gate rules when the configuration file changes.
    #[arg(short, long, requires = "config")]
    watch: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => WebConfig::default(),
    };

    logging::init(&config.observability);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        bind_address = %config.listener.bind_address,
        tls = config.listener.tls.is_some(),
        public_routes = ?config.gate.public_routes,
        login_path = %config.gate.login_path,
        landing_path = %config.gate.landing_path,
        "Configuration loaded"
    );

    let watch = if cli.watch { cli.config.clone() } else { None };
    startup::run(config, watch).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
