//! Compiled path matchers.
//!
//! # Responsibilities
//! - Compile a template into an anchored, case-insensitive pattern
//! - Strip the API path prefix from incoming paths
//!
//! # Design Decisions
//! - Patterns are built once at registry construction, never on lookup
//! - Literal text is escaped; placeholders become `[^/]+`
//! - A single trailing slash on the input is tolerated
//! - Prefix stripping is case-sensitive and respects segment boundaries

use regex::{Regex, RegexBuilder};
use url::Url;

use crate::routing::template::Template;

/// Anchored matcher for one template.
#[derive(Debug, Clone)]
pub struct Matcher {
    pattern: Regex,
}

impl Matcher {
    /// Compile a template.
    pub fn compile(template: &Template) -> Result<Self, regex::Error> {
        let mut pattern = String::from("^");

        for segment in template.segments() {
            pattern.push('/');
            pattern.push_str(&segment.pattern());
        }
        pattern.push_str("/?$");

        let pattern = RegexBuilder::new(&pattern).case_insensitive(true).build()?;
        Ok(Self { pattern })
    }

    /// Returns true if the normalized path matches this template.
    pub fn matches(&self, path: &str) -> bool {
        self.pattern.is_match(path)
    }

    pub fn as_str(&self) -> &str {
        self.pattern.as_str()
    }
}

/// The path prefix prepended to generated URLs (e.g. "/api/v1").
#[derive(Debug, Clone)]
pub struct PathPrefix {
    full: String,
    path: String,
}

impl PathPrefix {
    /// Create a prefix. Only the path portion of `full` is used for stripping;
    /// a relative prefix is resolved against `origin`.
    pub fn new(full: impl Into<String>, origin: &Url) -> Result<Self, url::ParseError> {
        let full = full.into();
        let path = origin.join(&full)?.path().trim_end_matches('/').to_string();
        Ok(Self { full, path })
    }

    /// The prefix as prepended to generated URLs.
    pub fn as_str(&self) -> &str {
        &self.full
    }

    /// The path portion of the prefix.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Prepend the prefix to a path starting with "/".
    pub fn apply(&self, path: &str) -> String {
        format!("{}{}", self.full, path)
    }

    /// Returns true if `path` starts with the prefix at a segment boundary.
    pub fn matches(&self, path: &str) -> bool {
        match path.strip_prefix(self.path.as_str()) {
            Some(rest) => !self.path.is_empty() && (rest.is_empty() || rest.starts_with('/')),
            None => false,
        }
    }

    /// Remove the prefix from `path`, or return `path` unchanged when absent.
    pub fn strip<'a>(&self, path: &'a str) -> &'a str {
        if !self.matches(path) {
            return path;
        }
        match &path[self.path.len()..] {
            "" => "/",
            rest => rest,
        }
    }
}
