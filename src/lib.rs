//! Web front-end server for the lead intelligence product.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod net;
pub mod observability;
pub mod routing;
pub mod security;

pub use config::schema::WebConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use security::{Decision, GatePolicy};
