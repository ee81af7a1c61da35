//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (tracing, request ID, timeout, limits, gate)
//! - Bind server to listener (plain or TLS)
//! - Apply reloaded gate configuration without restarting

use axum::{
    body::Body,
    http::Request,
    middleware::{self, Next},
    response::Response,
    routing::get,
    Json, Router,
};
use axum_server::tls_rustls::RustlsConfig;
use serde::Serialize;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::{broadcast, mpsc};
use tower_http::{
    limit::RequestBodyLimitLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::WebConfig;
use crate::http::request::{request_id, MakeRequestUuidV4};
use crate::http::{images, pages};
use crate::observability::metrics;
use crate::security::{access_gate_middleware, headers, GateHandle, GatePolicy};

/// Error type for running the server.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("server IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub gate: GateHandle,
    pub image_dir: Arc<PathBuf>,
}

/// HTTP server for the web front-end.
pub struct HttpServer {
    router: Router,
    config: WebConfig,
    gate: GateHandle,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: WebConfig) -> Self {
        let gate = GateHandle::from_config(&config.gate);
        let state = AppState {
            gate: gate.clone(),
            image_dir: Arc::new(PathBuf::from(&config.assets.image_dir)),
        };

        let router = Self::build_router(&config, state);
        Self {
            router,
            config,
            gate,
        }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &WebConfig, state: AppState) -> Router {
        let gate = state.gate.clone();

        let router = Router::new()
            .route("/", get(pages::root))
            .route(pages::DASHBOARD.path, get(pages::dashboard))
            .route(pages::SEARCH.path, get(pages::search))
            .route(pages::SAVED_SEARCHES.path, get(pages::saved_searches))
            .route(pages::RECENT_SEARCHES.path, get(pages::recent_searches))
            .route(pages::LOGIN.path, get(pages::login))
            .route(pages::REGISTER.path, get(pages::register))
            .route("/api/health", get(health))
            .route("/api/images/{name}", get(images::serve_image))
            .route("/api/placeholder/{width}/{height}", get(images::serve_placeholder))
            .fallback(pages::not_found)
            .with_state(state)
            .layer(middleware::from_fn_with_state(gate, access_gate_middleware));

        let router = if config.security.enable_headers {
            headers::apply(router)
        } else {
            router
        };

        // Outermost layer last.
        router
            .layer(RequestBodyLimitLayer::new(config.security.max_body_size))
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(middleware::from_fn(track_request))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http().make_span_with(|req: &Request<Body>| {
                tracing::info_span!(
                    "request",
                    request_id = %request_id(req.headers()),
                    method = %req.method(),
                    path = %req.uri().path(),
                )
            }))
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV4))
    }

    /// The fully layered router, for in-process use.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Handle to the live gate policy.
    pub fn gate(&self) -> GateHandle {
        self.gate.clone()
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(
        self,
        listener: TcpListener,
        config_updates: mpsc::UnboundedReceiver<WebConfig>,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), ServerError> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        spawn_config_applier(self.gate.clone(), config_updates);

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Run the server over TLS on the given address.
    pub async fn run_tls(
        self,
        addr: SocketAddr,
        tls: RustlsConfig,
        config_updates: mpsc::UnboundedReceiver<WebConfig>,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), ServerError> {
        tracing::info!(address = %addr, "HTTPS server starting");

        spawn_config_applier(self.gate.clone(), config_updates);

        let handle = axum_server::Handle::new();
        let grace = Duration::from_secs(self.config.timeouts.shutdown_secs);
        let shutdown_handle = handle.clone();
        tokio::spawn(async move {
            let _ = shutdown.recv().await;
            tracing::info!(grace_secs = grace.as_secs(), "Shutdown signal received");
            shutdown_handle.graceful_shutdown(Some(grace));
        });

        axum_server::bind_rustls(addr, tls)
            .handle(handle)
            .serve(self.router.into_make_service())
            .await?;

        tracing::info!("HTTPS server stopped");
        Ok(())
    }
}

/// Swap in the gate section of every reloaded config.
fn spawn_config_applier(gate: GateHandle, mut updates: mpsc::UnboundedReceiver<WebConfig>) {
    tokio::spawn(async move {
        while let Some(config) = updates.recv().await {
            gate.replace(GatePolicy::from_config(&config.gate));
            tracing::info!(
                public_routes = config.gate.public_routes.len(),
                login_path = %config.gate.login_path,
                landing_path = %config.gate.landing_path,
                "Gate configuration reloaded"
            );
        }
    });
}

async fn track_request(req: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let response = next.run(req).await;
    metrics::record_request(response.status().as_u16(), start);
    response
}

#[derive(Serialize)]
struct HealthStatus {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
