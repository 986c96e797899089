//! Routing error definitions.

use thiserror::Error;

use crate::config::validation::ValidationError;

/// Errors that can occur while building or querying the registry.
#[derive(Debug, Error)]
pub enum RouteError {
    /// Input could not be parsed as a URL.
    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// No route registered under this id.
    #[error("Unknown route: {0}")]
    UnknownRoute(String),

    /// Configuration failed semantic validation.
    #[error("Invalid route configuration: {}", join_errors(.0))]
    InvalidConfig(Vec<ValidationError>),

    /// Template could not be compiled into a pattern.
    #[error("Failed to compile template '{template}': {source}")]
    Pattern {
        template: String,
        #[source]
        source: regex::Error,
    },
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type for routing operations.
pub type RouteResult<T> = Result<T, RouteError>;
