//! Access Control Middleware.
//! Gates page navigation on the presence of the auth cookie.

use std::sync::Arc;

use arc_swap::ArcSwap;
use axum::{
    body::Body,
    extract::State,
    http::{header::LOCATION, HeaderValue, Request},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::config::GateConfig;
use crate::observability::metrics;
use crate::security::auth_signal::has_auth_cookie;
use crate::security::gate::{Decision, GatePolicy};

/// Shared, hot-swappable gate policy.
#[derive(Clone, Default)]
pub struct GateHandle {
    policy: Arc<ArcSwap<GatePolicy>>,
}

impl GateHandle {
    pub fn new(policy: GatePolicy) -> Self {
        Self {
            policy: Arc::new(ArcSwap::from_pointee(policy)),
        }
    }

    pub fn from_config(config: &GateConfig) -> Self {
        Self::new(GatePolicy::from_config(config))
    }

    /// Snapshot of the current policy.
    pub fn load(&self) -> Arc<GatePolicy> {
        self.policy.load_full()
    }

    /// Atomically replace the policy. In-flight requests keep their snapshot.
    pub fn replace(&self, policy: GatePolicy) {
        self.policy.store(Arc::new(policy));
    }
}

pub async fn access_gate_middleware(
    State(gate): State<GateHandle>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let policy = gate.load();
    let path = req.uri().path();

    // 1. Excluded paths are handled by their own routes.
    if policy.is_excluded(path) {
        return next.run(req).await;
    }

    // 2. Evaluate on the auth signal
    let authenticated = has_auth_cookie(req.headers(), policy.auth_cookie());
    let decision = policy.evaluate(path, authenticated);

    tracing::debug!(
        path = %path,
        authenticated,
        outcome = decision.outcome(),
        "Gate decision"
    );
    metrics::record_gate_decision(decision.outcome());

    match decision {
        Decision::Allow => next.run(req).await,
        Decision::RedirectTo(location) => redirect_response(&policy, &location),
    }
}

fn redirect_response(policy: &GatePolicy, location: &str) -> Response {
    match HeaderValue::from_str(location) {
        Ok(value) => (policy.redirect_status(), [(LOCATION, value)]).into_response(),
        Err(_) => {
            // Validated config paths are always header-safe; fall back to login.
            tracing::error!(location = %location, "Redirect target is not a valid header value");
            let fallback = HeaderValue::from_str(policy.login_path())
                .unwrap_or_else(|_| HeaderValue::from_static("/"));
            (policy.redirect_status(), [(LOCATION, fallback)]).into_response()
        }
    }
}
