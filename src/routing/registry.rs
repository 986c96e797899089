//! Route lookup and URL building.
//!
//! # Responsibilities
//! - Store compiled routes in registration order
//! - Build concrete URLs from templates or route ids
//! - Recover the template (and custom type) from a concrete URL
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - O(1) id and template lookup via HashMap
//! - O(n) matcher scan, first match wins
//! - Explicit `None` for no match rather than a silent default

use std::collections::HashMap;

use url::Url;

use crate::config::schema::RegistryConfig;
use crate::config::validation::validate_config;
use crate::routing::error::{RouteError, RouteResult};
use crate::routing::matcher::{Matcher, PathPrefix};
use crate::routing::template::{normalize, Params, Template};

/// A compiled route.
#[derive(Debug, Clone)]
pub struct Route {
    id: String,
    template: Template,
    matcher: Matcher,
    custom_type: Option<String>,
}

impl Route {
    /// Route identifier, `group.name`.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn template(&self) -> &Template {
        &self.template
    }

    pub fn custom_type(&self) -> Option<&str> {
        self.custom_type.as_deref()
    }
}

/// Immutable set of compiled route templates.
#[derive(Debug, Clone)]
pub struct RouteRegistry {
    prefix: PathPrefix,
    origin: Url,
    routes: Vec<Route>,
    by_id: HashMap<String, usize>,
    by_template: HashMap<String, usize>,
}

impl RouteRegistry {
    /// Validate the configuration and compile every template.
    pub fn from_config(config: &RegistryConfig) -> RouteResult<Self> {
        validate_config(config).map_err(RouteError::InvalidConfig)?;

        let origin = Url::parse(&config.api.origin).map_err(|source| RouteError::InvalidUrl {
            url: config.api.origin.clone(),
            source,
        })?;
        let full_prefix = config.prefix();
        let prefix = PathPrefix::new(full_prefix.as_str(), &origin)
            .map_err(|source| RouteError::InvalidUrl { url: full_prefix, source })?;

        let mut routes = Vec::with_capacity(config.routes.len());
        let mut by_id = HashMap::new();
        let mut by_template = HashMap::new();

        for (index, route_config) in config.routes.iter().enumerate() {
            let template = Template::parse(&route_config.template);
            let matcher = Matcher::compile(&template).map_err(|source| RouteError::Pattern {
                template: route_config.template.clone(),
                source,
            })?;

            tracing::trace!(
                route = %route_config.id(),
                pattern = %matcher.as_str(),
                "Compiled route template"
            );

            by_id.insert(route_config.id(), index);
            by_template.insert(route_config.template.clone(), index);
            routes.push(Route {
                id: route_config.id(),
                template,
                matcher,
                custom_type: route_config.custom_type.clone(),
            });
        }

        tracing::info!(
            routes = routes.len(),
            prefix = %prefix.as_str(),
            "Route registry compiled"
        );

        Ok(Self {
            prefix,
            origin,
            routes,
            by_id,
            by_template,
        })
    }

    /// The path prefix prepended to every generated URL.
    pub fn prefix(&self) -> &str {
        self.prefix.as_str()
    }

    /// Routes in registration (match) order.
    pub fn routes(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Look up a route by id (e.g. "users.one").
    pub fn get(&self, id: &str) -> Option<&Route> {
        self.by_id.get(id).map(|&i| &self.routes[i])
    }

    /// Prepend the prefix to a literal path (e.g. "/users" → "/api/v1/users").
    pub fn with_prefix(&self, path: &str) -> String {
        self.prefix.apply(path)
    }

    /// Build a URL from a template and parameter values.
    ///
    /// Registered templates reuse their cached tokens; any other string is
    /// tokenized on the fly. A missing parameter renders as "undefined".
    pub fn build_url(&self, template: &str, params: &Params) -> String {
        let path = match self.by_template.get(template) {
            Some(&i) => self.routes[i].template.render(params),
            None => Template::parse(template).render(params),
        };
        self.with_prefix(&path)
    }

    /// Build a URL for the route registered under `id`.
    pub fn url_for(&self, id: &str, params: &Params) -> RouteResult<String> {
        let route = self
            .get(id)
            .ok_or_else(|| RouteError::UnknownRoute(id.to_string()))?;
        Ok(self.with_prefix(&route.template.render(params)))
    }

    /// Find the template that produced a concrete URL.
    ///
    /// Relative URLs are resolved against the configured origin. Query and
    /// fragment are ignored. Returns `Ok(None)` when no template matches.
    pub fn template_from_url(&self, url: &str) -> RouteResult<Option<&str>> {
        Ok(self.route_for_url(url)?.map(|route| route.template.as_str()))
    }

    /// Custom type of the template matching a concrete URL.
    pub fn custom_type_from_url(&self, url: &str) -> RouteResult<Option<&str>> {
        Ok(self.route_for_url(url)?.and_then(Route::custom_type))
    }

    /// Custom type registered for a template.
    pub fn custom_type(&self, template: &str) -> Option<&str> {
        self.by_template
            .get(template)
            .and_then(|&i| self.routes[i].custom_type())
    }

    /// First route whose matcher accepts the URL's path.
    pub fn route_for_url(&self, url: &str) -> RouteResult<Option<&Route>> {
        let resolved = self.origin.join(url).map_err(|source| RouteError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;
        let path = normalize(self.prefix.strip(resolved.path()));

        let found = self.routes.iter().find(|route| route.matcher.matches(&path));
        match found {
            Some(route) => tracing::debug!(url, path = %path, route = %route.id, "Route matched"),
            None => tracing::debug!(url, path = %path, "No route matched"),
        }
        Ok(found)
    }
}
