//! Startup orchestration.
//!
//! # Responsibilities
//! - Start background tasks (metrics, config watcher, signals)
//! - Bind the listener and begin accepting traffic
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Listeners start last (traffic only when ready)

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::mpsc;

use crate::config::watcher::ConfigWatcher;
use crate::config::WebConfig;
use crate::http::{HttpServer, ServerError};
use crate::lifecycle::{signals, Shutdown};
use crate::net::tls::load_tls_config;
use crate::observability::metrics;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid bind address {0:?}")]
    BindAddress(String),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },

    #[error("failed to load TLS configuration: {0}")]
    Tls(std::io::Error),

    #[error("failed to watch config file: {0}")]
    Watch(#[from] notify::Error),

    #[error(transparent)]
    Server(#[from] ServerError),
}

/// Start every subsystem and serve until a shutdown signal arrives.
///
/// `watch` enables hot reload of the gate section from that file.
pub async fn run(config: WebConfig, watch: Option<PathBuf>) -> Result<(), StartupError> {
    let addr: SocketAddr = config
        .listener
        .bind_address
        .parse()
        .map_err(|_| StartupError::BindAddress(config.listener.bind_address.clone()))?;

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(metrics_addr) => metrics::init_metrics(metrics_addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    // The watcher stops when dropped, so it lives for the whole run.
    let (_watcher, config_updates) = match watch {
        Some(path) => start_watcher(&path)?,
        None => (None, mpsc::unbounded_channel().1),
    };

    let shutdown = Shutdown::new();
    signals::spawn_signal_listener(&shutdown);

    let tls = config.listener.tls.clone();
    let server = HttpServer::new(config);

    match tls {
        Some(tls) => {
            let rustls = load_tls_config(Path::new(&tls.cert_path), Path::new(&tls.key_path))
                .await
                .map_err(StartupError::Tls)?;
            server
                .run_tls(addr, rustls, config_updates, shutdown.subscribe())
                .await?;
        }
        None => {
            let listener = TcpListener::bind(addr)
                .await
                .map_err(|source| StartupError::Bind { addr, source })?;
            server
                .run(listener, config_updates, shutdown.subscribe())
                .await?;
        }
    }

    Ok(())
}

fn start_watcher(
    path: &Path,
) -> Result<(Option<notify::RecommendedWatcher>, mpsc::UnboundedReceiver<WebConfig>), StartupError> {
    let (watcher, updates) = ConfigWatcher::new(path);
    let handle = watcher.run()?;
    Ok((Some(handle), updates))
}
