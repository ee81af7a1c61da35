//! Authentication signal extraction.
//!
//! A request counts as authenticated when it carries the configured auth
//! cookie with a non-empty, printable value. Headers are scanned as raw
//! bytes so an unrelated non-ASCII cookie cannot hide the auth cookie; an
//! unreadable auth cookie value counts as absent.

use axum::http::{header::COOKIE, HeaderMap};

/// Returns true if the named cookie is present with a readable value.
pub fn has_auth_cookie(headers: &HeaderMap, cookie_name: &str) -> bool {
    let name = cookie_name.as_bytes();

    headers
        .get_all(COOKIE)
        .iter()
        .flat_map(|value| value.as_bytes().split(|&b| b == b';'))
        .filter_map(split_pair)
        .any(|(pair_name, value)| pair_name == name && is_readable(value))
}

fn split_pair(pair: &[u8]) -> Option<(&[u8], &[u8])> {
    let eq = pair.iter().position(|&b| b == b'=')?;
    Some((pair[..eq].trim_ascii(), pair[eq + 1..].trim_ascii()))
}

fn is_readable(value: &[u8]) -> bool {
    !value.is_empty() && value.iter().all(u8::is_ascii_graphic)
}
