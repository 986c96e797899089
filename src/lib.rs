//! Route template registry for REST API clients.
//!
//! Builds concrete URLs from `/segment/:param` templates and recovers the
//! template (and its backend custom type) from a concrete URL.

pub mod config;
pub mod http;
pub mod observability;
pub mod routing;

pub use config::schema::RegistryConfig;
pub use routing::{normalize, Params, RouteError, RouteRegistry};
