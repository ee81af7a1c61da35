//! Network layer.
//!
//! Plain TCP listeners come straight from Tokio; this module only adds TLS.

pub mod tls;
