//! Shared fixtures for registry integration tests.

use route_registry::config::{RegistryConfig, RouteConfig};
use route_registry::RouteRegistry;

/// Registry over the built-in shop route table (prefix "/api/v1").
#[allow(dead_code)]
pub fn shop_registry() -> RouteRegistry {
    RouteRegistry::from_config(&RegistryConfig::default()).unwrap()
}

/// Registry over the given routes with default API settings.
#[allow(dead_code)]
pub fn registry_with(routes: Vec<RouteConfig>) -> RouteRegistry {
    RouteRegistry::from_config(&RegistryConfig::with_routes(routes)).unwrap()
}

/// Sample config shipped with the crate.
#[allow(dead_code)]
pub fn sample_config_path() -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("config/routes.toml")
}
