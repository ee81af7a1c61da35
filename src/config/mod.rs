//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → WebConfig (validated, immutable)
//!
//! On file change (--watch):
//!     watcher.rs detects change
//!     → loader.rs loads new config
//!     → validation.rs validates
//!     → server swaps in a new gate policy
//! ```
//!
//! # Design Decisions
//! - All fields have defaults to allow minimal configs
//! - Only the gate section is applied live; listener changes need a restart

pub mod loader;
pub mod schema;
pub mod validation;
pub mod watcher;

pub use loader::{load_config, ConfigError};
pub use schema::{
    AssetsConfig, GateConfig, ListenerConfig, ObservabilityConfig, SecurityConfig,
    TimeoutConfig, TlsConfig, WebConfig,
};
