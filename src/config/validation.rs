//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check API settings (version, base URL, origin)
//! - Check template shape and placeholder names
//! - Detect templates shadowed by an earlier, more general one
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RegistryConfig → Result<(), Vec<ValidationError>>
//! - Runs before a registry is built from the config

use std::collections::HashSet;

use thiserror::Error;
use url::Url;

use crate::config::schema::{ApiConfig, RegistryConfig, RouteConfig};
use crate::routing::template::{Part, Template};

/// A single semantic configuration problem.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("API version must be non-empty and contain no '/': '{0}'")]
    InvalidVersion(String),

    #[error("API base URL must not end with '/': '{0}'")]
    BaseUrlTrailingSlash(String),

    #[error("Invalid origin '{origin}': {reason}")]
    InvalidOrigin { origin: String, reason: String },

    #[error("Route #{index} has an empty {field}")]
    EmptyRouteField { index: usize, field: &'static str },

    #[error("Duplicate route id '{0}'")]
    DuplicateRouteId(String),

    #[error("Route '{route}' template '{template}' {reason}")]
    InvalidTemplate {
        route: String,
        template: String,
        reason: &'static str,
    },

    #[error("Route '{route}' uses placeholder ':{param}' more than once")]
    DuplicateParam { route: String, param: String },

    #[error("Route '{0}' has an empty custom type")]
    EmptyCustomType(String),

    #[error("Route '{route}' ({template}) is shadowed by earlier route '{by}' ({by_template})")]
    Shadowed {
        route: String,
        template: String,
        by: String,
        by_template: String,
    },
}

/// Validate a configuration.
pub fn validate_config(config: &RegistryConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    validate_api(&config.api, &mut errors);
    validate_routes(&config.routes, &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_api(api: &ApiConfig, errors: &mut Vec<ValidationError>) {
    if api.version.is_empty() || api.version.contains('/') {
        errors.push(ValidationError::InvalidVersion(api.version.clone()));
    }

    if api.base_url.ends_with('/') {
        errors.push(ValidationError::BaseUrlTrailingSlash(api.base_url.clone()));
    }

    match Url::parse(&api.origin) {
        Ok(url) if url.cannot_be_a_base() => errors.push(ValidationError::InvalidOrigin {
            origin: api.origin.clone(),
            reason: "cannot be used as a base URL".to_string(),
        }),
        Ok(_) => {}
        Err(e) => errors.push(ValidationError::InvalidOrigin {
            origin: api.origin.clone(),
            reason: e.to_string(),
        }),
    }
}

fn validate_routes(routes: &[RouteConfig], errors: &mut Vec<ValidationError>) {
    let mut ids = HashSet::new();

    for (index, route) in routes.iter().enumerate() {
        if route.group.is_empty() {
            errors.push(ValidationError::EmptyRouteField { index, field: "group" });
        }
        if route.name.is_empty() {
            errors.push(ValidationError::EmptyRouteField { index, field: "name" });
        }
        if !ids.insert(route.id()) {
            errors.push(ValidationError::DuplicateRouteId(route.id()));
        }
        if route.custom_type.as_deref() == Some("") {
            errors.push(ValidationError::EmptyCustomType(route.id()));
        }
        validate_template(route, errors);
    }

    let templates: Vec<Template> = routes.iter().map(|r| Template::parse(&r.template)).collect();
    for (later, template) in templates.iter().enumerate() {
        if let Some(earlier) = templates[..later].iter().position(|t| t.shadows(template)) {
            errors.push(ValidationError::Shadowed {
                route: routes[later].id(),
                template: routes[later].template.clone(),
                by: routes[earlier].id(),
                by_template: routes[earlier].template.clone(),
            });
        }
    }
}

fn validate_template(route: &RouteConfig, errors: &mut Vec<ValidationError>) {
    let raw = route.template.as_str();
    let invalid = |reason| ValidationError::InvalidTemplate {
        route: route.id(),
        template: raw.to_string(),
        reason,
    };

    if !raw.starts_with('/') || raw.starts_with("//") {
        errors.push(invalid("must start with exactly one '/'"));
        return;
    }
    if raw == "/" {
        return;
    }
    if raw.ends_with('/') {
        errors.push(invalid("must not end with '/'"));
        return;
    }
    if raw[1..].split('/').any(str::is_empty) {
        errors.push(invalid("must not contain empty segments"));
        return;
    }

    let template = Template::parse(raw);
    let bare_colon = template
        .segments()
        .iter()
        .flat_map(|s| s.parts())
        .any(|p| matches!(p, Part::Literal(text) if text.contains(':')));
    if bare_colon {
        errors.push(invalid("has a ':' without a placeholder name"));
    }

    let mut seen = HashSet::new();
    for param in template.params() {
        if !seen.insert(param) {
            errors.push(ValidationError::DuplicateParam {
                route: route.id(),
                param: param.to_string(),
            });
        }
    }
}
