//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the registry.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the route registry.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// API location (base URL, version, origin for relative URLs).
    pub api: ApiConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Route definitions, in match order.
    pub routes: Vec<RouteConfig>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            observability: ObservabilityConfig::default(),
            routes: default_routes(),
        }
    }
}

impl RegistryConfig {
    /// Default API settings with the given route table.
    pub fn with_routes(routes: Vec<RouteConfig>) -> Self {
        Self {
            routes,
            ..Self::default()
        }
    }

    /// Path prefix prepended to every generated URL (e.g. "/api/v1").
    pub fn prefix(&self) -> String {
        format!("{}/api/v{}", self.api.base_url, self.api.version)
    }
}

/// API location settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Backend base URL without trailing slash. Empty for same-origin.
    pub base_url: String,

    /// REST API version, rendered as `/api/v<version>`.
    pub version: String,

    /// Origin used to resolve relative URLs.
    pub origin: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            version: "1".to_string(),
            origin: "http://localhost".to_string(),
        }
    }
}

/// A single endpoint template.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct RouteConfig {
    /// Endpoint group (e.g. "users").
    pub group: String,

    /// Endpoint name within the group (e.g. "one").
    pub name: String,

    /// Path template (e.g. "/users/:id").
    pub template: String,

    /// Backend type hint added to request bodies.
    #[serde(default)]
    pub custom_type: Option<String>,
}

impl RouteConfig {
    pub fn new(group: impl Into<String>, name: impl Into<String>, template: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            name: name.into(),
            template: template.into(),
            custom_type: None,
        }
    }

    pub fn tagged(mut self, custom_type: impl Into<String>) -> Self {
        self.custom_type = Some(custom_type.into());
        self
    }

    /// Route identifier, `group.name`.
    pub fn id(&self) -> String {
        format!("{}.{}", self.group, self.name)
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Log line format.
    pub format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            format: LogFormat::Full,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Full,
    Compact,
}

/// Endpoint table of the shop frontend. Literal routes precede parametric ones.
pub fn default_routes() -> Vec<RouteConfig> {
    vec![
        RouteConfig::new("auth", "login", "/auth/authenticate").tagged("authentication"),
        RouteConfig::new("auth", "logout", "/auth/logout"),
        RouteConfig::new("auth", "register", "/auth/register").tagged("registration"),
        RouteConfig::new("users", "one", "/users/:id"),
        RouteConfig::new("users", "all", "/users"),
        RouteConfig::new("users", "get_by_username", "/user/username/:username"),
        RouteConfig::new("users", "update", "/user/update/:username").tagged("update_user"),
        RouteConfig::new("users", "update_password", "/user/update-password/:username")
            .tagged("update_password"),
    ]
}
