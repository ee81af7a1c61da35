//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Reject gate rules that would redirect in a loop
//! - Validate value ranges (timeouts > 0, addresses parse)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: WebConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;
use thiserror::Error;

use crate::config::schema::{GateConfig, WebConfig};

/// Redirect statuses the gate may emit.
pub const REDIRECT_STATUSES: [u16; 5] = [301, 302, 303, 307, 308];

/// A single semantic problem with a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("gate.{field}: path {path:?} must start with '/'")]
    RelativePath { field: &'static str, path: String },

    #[error("gate.login_path {0:?} is not a public route; unauthenticated visitors would loop")]
    LoginNotPublic(String),

    #[error("gate.landing_path {0:?} is a public route; authenticated visitors would loop")]
    LandingIsPublic(String),

    #[error("gate.{field} {path:?} falls under an excluded prefix and bypasses the gate")]
    TargetExcluded { field: &'static str, path: String },

    #[error("gate.auth_cookie {0:?} is not a valid cookie name")]
    InvalidCookieName(String),

    #[error("gate.redirect_status {0} is not a redirect status")]
    InvalidRedirectStatus(u16),

    #[error("listener.bind_address {0:?} is not a socket address")]
    InvalidBindAddress(String),

    #[error("observability.metrics_address {0:?} is not a socket address")]
    InvalidMetricsAddress(String),

    #[error("timeouts.{0} must be greater than zero")]
    ZeroTimeout(&'static str),

    #[error("security.max_body_size must be greater than zero")]
    ZeroBodyLimit,

    #[error("listener.tls.{0} must not be empty")]
    MissingTlsPath(&'static str),
}

/// Validate a configuration, collecting every problem found.
pub fn validate_config(config: &WebConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = validate_gate(&config.gate);

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if let Some(tls) = &config.listener.tls {
        if tls.cert_path.trim().is_empty() {
            errors.push(ValidationError::MissingTlsPath("cert_path"));
        }
        if tls.key_path.trim().is_empty() {
            errors.push(ValidationError::MissingTlsPath("key_path"));
        }
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::InvalidMetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("request_secs"));
    }
    if config.timeouts.shutdown_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("shutdown_secs"));
    }
    if config.security.max_body_size == 0 {
        errors.push(ValidationError::ZeroBodyLimit);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate only the gate section.
///
/// Used on hot reload as well as at startup.
pub fn validate_gate(gate: &GateConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let mut check_absolute = |field: &'static str, path: &str| {
        if !path.starts_with('/') {
            errors.push(ValidationError::RelativePath {
                field,
                path: path.to_string(),
            });
        }
    };
    check_absolute("login_path", &gate.login_path);
    check_absolute("landing_path", &gate.landing_path);
    for route in &gate.public_routes {
        check_absolute("public_routes", route);
    }
    for prefix in &gate.excluded_prefixes {
        check_absolute("excluded_prefixes", prefix);
    }

    if !gate.public_routes.contains(&gate.login_path) {
        errors.push(ValidationError::LoginNotPublic(gate.login_path.clone()));
    }
    if gate.public_routes.contains(&gate.landing_path) {
        errors.push(ValidationError::LandingIsPublic(gate.landing_path.clone()));
    }

    for (field, target) in [("login_path", &gate.login_path), ("landing_path", &gate.landing_path)] {
        if gate.excluded_prefixes.iter().any(|p| target.starts_with(p.as_str())) {
            errors.push(ValidationError::TargetExcluded {
                field,
                path: target.clone(),
            });
        }
    }

    if !is_cookie_name(&gate.auth_cookie) {
        errors.push(ValidationError::InvalidCookieName(gate.auth_cookie.clone()));
    }

    if !REDIRECT_STATUSES.contains(&gate.redirect_status) {
        errors.push(ValidationError::InvalidRedirectStatus(gate.redirect_status));
    }

    errors
}

// RFC 6265 token: visible ASCII minus separators.
fn is_cookie_name(name: &str) -> bool {
    !name.is_empty()
        && name.bytes().all(|b| {
            b.is_ascii_graphic() && !b"()<>@,;:\\\"/[]?={}".contains(&b)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::TlsConfig;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(validate_config(&WebConfig::default()), Ok(()));
    }

    #[test]
    fn test_login_must_be_public() {
        let mut config = WebConfig::default();
        config.gate.public_routes = vec!["/auth/register".into()];

        let errors = validate_config(&config).unwrap_err();
        assert!(errors.contains(&ValidationError::LoginNotPublic("/auth/login".into())));
    }

    #[test]
    fn test_landing_must_not_be_public() {
        let mut config = WebConfig::default();
        config.gate.landing_path = "/auth/register".into();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::LandingIsPublic("/auth/register".into())]
        );
    }

    #[test]
    fn test_redirect_target_under_excluded_prefix() {
        let mut config = WebConfig::default();
        config.gate.landing_path = "/api/home".into();

        let errors = validate_config(&config).unwrap_err();
        assert!(errors.contains(&ValidationError::TargetExcluded {
            field: "landing_path",
            path: "/api/home".into(),
        }));
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = WebConfig::default();
        config.gate.auth_cookie = "bad cookie".into();
        config.gate.redirect_status = 200;
        config.listener.bind_address = "not-an-address".into();
        config.timeouts.request_secs = 0;
        config.listener.tls = Some(TlsConfig {
            cert_path: "".into(),
            key_path: "key.pem".into(),
        });

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 5);
        assert!(errors.contains(&ValidationError::InvalidRedirectStatus(200)));
        assert!(errors.contains(&ValidationError::MissingTlsPath("cert_path")));
    }

    #[test]
    fn test_relative_paths_rejected() {
        let mut gate = GateConfig::default();
        gate.public_routes.push("dashboard".into());

        let errors = validate_gate(&gate);
        assert_eq!(
            errors,
            vec![ValidationError::RelativePath {
                field: "public_routes",
                path: "dashboard".into(),
            }]
        );
    }

    #[test]
    fn test_cookie_names() {
        assert!(is_cookie_name("auth-token"));
        assert!(is_cookie_name("__Host-session"));
        assert!(!is_cookie_name(""));
        assert!(!is_cookie_name("a=b"));
        assert!(!is_cookie_name("a;b"));
    }
}
