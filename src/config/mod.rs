//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks, shadowed templates)
//!     → RegistryConfig (validated, immutable)
//!     → compiled into a RouteRegistry
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All sections have defaults; the default route table is the shop API
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{ApiConfig, LogFormat, ObservabilityConfig, RegistryConfig, RouteConfig};
pub use validation::{validate_config, ValidationError};
