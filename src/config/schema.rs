//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the web front-end.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the web front-end.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct WebConfig {
    /// Listener configuration (bind address, TLS).
    pub listener: ListenerConfig,

    /// Access gate rules applied to page navigation.
    pub gate: GateConfig,

    /// Static asset locations served by the image API.
    pub assets: AssetsConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    #[serde(default)]
    pub security: SecurityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:3000").
    pub bind_address: String,

    /// Optional TLS configuration.
    pub tls: Option<TlsConfig>,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:3000".to_string(),
            tls: None,
        }
    }
}

/// TLS configuration for the listener.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TlsConfig {
    /// Path to certificate file (PEM).
    pub cert_path: String,

    /// Path to private key file (PEM).
    pub key_path: String,
}

/// Access gate configuration.
///
/// Public routes are matched by exact string equality against the request path.
/// Excluded prefixes are matched as raw string prefixes and bypass the gate.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GateConfig {
    /// Paths reachable without an auth cookie.
    pub public_routes: Vec<String>,

    /// Where unauthenticated visitors of protected pages are sent.
    pub login_path: String,

    /// Where authenticated visitors of public pages are sent.
    pub landing_path: String,

    /// Name of the cookie whose presence marks a request as authenticated.
    pub auth_cookie: String,

    /// Path prefixes that never reach the gate (API, assets, favicon).
    pub excluded_prefixes: Vec<String>,

    /// HTTP status used for gate redirects.
    pub redirect_status: u16,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            public_routes: vec!["/auth/login".to_string(), "/auth/register".to_string()],
            login_path: "/auth/login".to_string(),
            landing_path: "/dashboard".to_string(),
            auth_cookie: "auth-token".to_string(),
            excluded_prefixes: vec![
                "/api".to_string(),
                "/_next/static".to_string(),
                "/_next/image".to_string(),
                "/favicon.ico".to_string(),
            ],
            redirect_status: 307,
        }
    }
}

/// Asset configuration for the image routes.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AssetsConfig {
    /// Directory holding images served under `/api/images/{name}`.
    pub image_dir: String,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            image_dir: "public/images".to_string(),
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,

    /// Grace period for in-flight requests on shutdown, in seconds.
    pub shutdown_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            request_secs: 30,
            shutdown_secs: 10,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

/// Security hardening configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SecurityConfig {
    /// Enable security headers.
    pub enable_headers: bool,
    /// Maximum body size in bytes.
    pub max_body_size: usize,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            enable_headers: true,
            max_body_size: 64 * 1024,
        }
    }
}
