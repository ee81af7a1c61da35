//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (path)
//!     → exclusion.rs (does this path bypass the gate?)
//!     → matcher.rs (evaluate prefix conditions)
//!     → Return: excluded or navigational
//!
//! Compilation (at startup and on reload):
//!     GateConfig.excluded_prefixes
//!     → PathPrefixMatcher per prefix
//!     → Freeze as immutable ExclusionFilter
//! ```
//!
//! # Design Decisions
//! - Compiled once, immutable at runtime
//! - No regex in hot path (prefix matching only)
//! - Deterministic: same input always gives the same answer

pub mod exclusion;
pub mod matcher;

pub use exclusion::ExclusionFilter;
