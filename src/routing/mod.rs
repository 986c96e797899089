//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Route Compilation (at startup):
//!     RouteConfig[] (ordered)
//!     → template.rs (tokenize into literal / placeholder parts)
//!     → matcher.rs (compile anchored patterns)
//!     → Freeze as immutable RouteRegistry
//!
//! Outgoing request:
//!     template + params → registry.rs (render, prepend prefix) → URL
//!
//! Request post-processing:
//!     URL → registry.rs (strip prefix, normalize)
//!         → matcher.rs (first match in registration order)
//!         → template / custom type, or None
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - Building and matching share one token list
//! - First match wins; shadowed templates are rejected at construction

pub mod error;
pub mod matcher;
pub mod registry;
pub mod template;

pub use error::{RouteError, RouteResult};
pub use registry::{Route, RouteRegistry};
pub use template::{normalize, Params, Template};
