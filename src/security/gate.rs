//! Access gate decision core.
//!
//! The decision is a pure function of the request path and whether an
//! authentication signal is present:
//!
//! | path      | authenticated | outcome                |
//! |-----------|---------------|------------------------|
//! | public    | no            | allow                  |
//! | public    | yes           | redirect to landing    |
//! | protected | no            | redirect to login      |
//! | protected | yes           | allow                  |

use std::collections::HashSet;

use axum::http::StatusCode;
use serde::Serialize;

use crate::config::GateConfig;
use crate::routing::ExclusionFilter;

/// Outcome of evaluating one navigation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", content = "location", rename_all = "snake_case")]
pub enum Decision {
    /// Forward the request unmodified.
    Allow,
    /// Answer with a redirect to the given path.
    RedirectTo(String),
}

impl Decision {
    /// Label used for logs and metrics.
    pub fn outcome(&self) -> &'static str {
        match self {
            Decision::Allow => "allow",
            Decision::RedirectTo(_) => "redirect",
        }
    }
}

/// Compiled gate rules.
#[derive(Debug)]
pub struct GatePolicy {
    public_routes: HashSet<String>,
    login_path: String,
    landing_path: String,
    auth_cookie: String,
    redirect_status: StatusCode,
    exclusions: ExclusionFilter,
}

impl GatePolicy {
    /// Compile a policy from configuration.
    ///
    /// An unusable `redirect_status` falls back to 307; validation rejects
    /// such configs before they get here.
    pub fn from_config(config: &GateConfig) -> Self {
        let redirect_status = StatusCode::from_u16(config.redirect_status)
            .ok()
            .filter(StatusCode::is_redirection)
            .unwrap_or(StatusCode::TEMPORARY_REDIRECT);

        Self {
            public_routes: config.public_routes.iter().cloned().collect(),
            login_path: config.login_path.clone(),
            landing_path: config.landing_path.clone(),
            auth_cookie: config.auth_cookie.clone(),
            redirect_status,
            exclusions: ExclusionFilter::from_prefixes(&config.excluded_prefixes),
        }
    }

    /// Decide what happens to a navigation request.
    pub fn evaluate(&self, path: &str, authenticated: bool) -> Decision {
        match (authenticated, self.is_public(path)) {
            (false, false) => Decision::RedirectTo(self.login_path.clone()),
            (true, true) => Decision::RedirectTo(self.landing_path.clone()),
            _ => Decision::Allow,
        }
    }

    /// Exact-match membership in the public route set.
    pub fn is_public(&self, path: &str) -> bool {
        self.public_routes.contains(path)
    }

    /// Returns true if the path bypasses the gate entirely.
    pub fn is_excluded(&self, path: &str) -> bool {
        self.exclusions.is_excluded(path)
    }

    pub fn auth_cookie(&self) -> &str {
        &self.auth_cookie
    }

    pub fn redirect_status(&self) -> StatusCode {
        self.redirect_status
    }

    pub fn login_path(&self) -> &str {
        &self.login_path
    }

    pub fn landing_path(&self) -> &str {
        &self.landing_path
    }
}

impl Default for GatePolicy {
    fn default() -> Self {
        Self::from_config(&GateConfig::default())
    }
}
