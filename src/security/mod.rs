//! Security subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request:
//!     → access_control.rs (skip excluded paths)
//!     → auth_signal.rs (is the auth cookie present?)
//!     → gate.rs (allow or redirect)
//!     → Pass to page handler
//!
//! Outgoing response:
//!     → headers.rs (hardening headers)
//! ```
//!
//! # Design Decisions
//! - Fail closed: an unreadable auth signal counts as unauthenticated
//! - The decision itself is pure; logging and metrics live in the middleware

pub mod access_control;
pub mod auth_signal;
pub mod gate;
pub mod headers;

pub use access_control::{access_gate_middleware, GateHandle};
pub use gate::{Decision, GatePolicy};
