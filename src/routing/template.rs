//! Path template tokenizer.
//!
//! A template such as `/user/update/:username` is split into segments, each a
//! list of literal and placeholder parts. URL building and matcher compilation
//! both walk the same token list.

use std::collections::BTreeMap;
use std::fmt;

use regex::RegexBuilder;

/// Text substituted for a placeholder with no value.
pub const MISSING_PARAM: &str = "undefined";

/// Collapse to exactly one leading slash and strip trailing slashes.
/// The root (and empty input) normalizes to "/".
pub fn normalize(path: &str) -> String {
    let trimmed = path.trim_start_matches('/').trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{trimmed}")
    }
}

fn is_param_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// One token of a template segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Part {
    /// Literal text, matched case-insensitively.
    Literal(String),
    /// Named placeholder, matches one or more non-slash characters.
    Param(String),
}

/// A single path segment (text between two slashes).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    parts: Vec<Part>,
}

impl Segment {
    fn parse(raw: &str) -> Self {
        let mut parts = Vec::new();
        let mut literal = String::new();
        let mut chars = raw.chars().peekable();

        while let Some(c) = chars.next() {
            if c != ':' {
                literal.push(c);
                continue;
            }

            let mut name = String::new();
            while let Some(&next) = chars.peek() {
                if !is_param_char(next) {
                    break;
                }
                name.push(next);
                chars.next();
            }

            // A colon without a name stays literal text.
            if name.is_empty() {
                literal.push(':');
                continue;
            }
            if !literal.is_empty() {
                parts.push(Part::Literal(std::mem::take(&mut literal)));
            }
            parts.push(Part::Param(name));
        }

        if !literal.is_empty() {
            parts.push(Part::Literal(literal));
        }
        Self { parts }
    }

    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// True when the whole segment is a single placeholder (`:id`).
    pub fn is_wildcard(&self) -> bool {
        matches!(self.parts.as_slice(), [Part::Param(_)])
    }

    fn same_shape(&self, other: &Segment) -> bool {
        self.parts.len() == other.parts.len()
            && self
                .parts
                .iter()
                .zip(&other.parts)
                .all(|(a, b)| match (a, b) {
                    (Part::Literal(x), Part::Literal(y)) => x.to_lowercase() == y.to_lowercase(),
                    (Part::Param(_), Part::Param(_)) => true,
                    _ => false,
                })
    }

    /// Unanchored pattern for this segment: escaped literals, `[^/]+` per placeholder.
    pub fn pattern(&self) -> String {
        self.parts
            .iter()
            .map(|part| match part {
                Part::Literal(text) => regex::escape(text),
                Part::Param(_) => "[^/]+".to_string(),
            })
            .collect()
    }

    /// Concatenated text when the segment has no placeholders.
    fn literal_text(&self) -> Option<String> {
        self.parts
            .iter()
            .map(|part| match part {
                Part::Literal(text) => Some(text.as_str()),
                Part::Param(_) => None,
            })
            .collect()
    }

    /// Returns true if every value accepted by `other` is accepted by `self`.
    pub fn covers(&self, other: &Segment) -> bool {
        if self.is_wildcard() || self.same_shape(other) {
            return true;
        }
        // A literal segment is covered when the mixed pattern accepts its text.
        match other.literal_text() {
            Some(text) => RegexBuilder::new(&format!("^{}$", self.pattern()))
                .case_insensitive(true)
                .build()
                .map(|re| re.is_match(&text))
                .unwrap_or(false),
            None => false,
        }
    }
}

/// A parsed path template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
    segments: Vec<Segment>,
}

impl Template {
    /// Tokenize a template. Never fails; shape rules are checked by config validation.
    pub fn parse(source: &str) -> Self {
        let normalized = normalize(source);
        let segments = match normalized.strip_prefix('/') {
            Some("") | None => Vec::new(),
            Some(rest) => rest.split('/').map(Segment::parse).collect(),
        };

        Self {
            source: source.to_string(),
            segments,
        }
    }

    /// The template exactly as registered.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Placeholder names in order of appearance.
    pub fn params(&self) -> impl Iterator<Item = &str> {
        self.segments
            .iter()
            .flat_map(|s| s.parts.iter())
            .filter_map(|p| match p {
                Part::Param(name) => Some(name.as_str()),
                Part::Literal(_) => None,
            })
    }

    /// Substitute URL-encoded parameter values. Missing values render as
    /// [`MISSING_PARAM`]; callers are expected to pass complete parameters.
    ///
    /// `.` and `..` are left as-is by percent-encoding and become dot segments,
    /// which URL resolution removes. Such URLs do not match back to this template.
    pub fn render(&self, params: &Params) -> String {
        let mut out = String::new();

        for segment in &self.segments {
            out.push('/');
            for part in &segment.parts {
                match part {
                    Part::Literal(text) => out.push_str(text),
                    Part::Param(name) => match params.get(name) {
                        Some(value) => {
                            if value == "." || value == ".." {
                                tracing::warn!(
                                    template = %self.source,
                                    param = %name,
                                    value,
                                    "Dot-segment template parameter"
                                );
                            }
                            out.push_str(&urlencoding::encode(value));
                        }
                        None => {
                            tracing::warn!(
                                template = %self.source,
                                param = %name,
                                "Missing template parameter"
                            );
                            out.push_str(MISSING_PARAM);
                        }
                    },
                }
            }
        }

        if out.is_empty() {
            out.push('/');
        }
        out
    }

    /// Returns true if `self`, registered before `later`, would match every
    /// path `later` matches.
    pub fn shadows(&self, later: &Template) -> bool {
        self.segments.len() == later.segments.len()
            && self
                .segments
                .iter()
                .zip(&later.segments)
                .all(|(a, b)| a.covers(b))
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.source)
    }
}

/// Placeholder values for URL building.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(BTreeMap<String, String>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl fmt::Display) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl fmt::Display) {
        self.0.insert(name.into(), value.to_string());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: fmt::Display> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (name, value) in iter {
            params.insert(name, value);
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize(""), "/");
        assert_eq!(normalize("/"), "/");
        assert_eq!(normalize("///"), "/");
        assert_eq!(normalize("users"), "/users");
        assert_eq!(normalize("//users/42//"), "/users/42");
        assert_eq!(normalize("/a//b/"), "/a//b");
    }

    #[test]
    fn test_normalize_idempotent() {
        for p in ["", "/", "x", "//x//", "/a/b/", "a//b", "/:id/"] {
            let once = normalize(p);
            assert_eq!(normalize(&once), once, "input {p:?}");
        }
    }

    #[test]
    fn test_parse_segments() {
        let tpl = Template::parse("/user/username/:username");
        assert_eq!(tpl.segments().len(), 3);
        assert_eq!(tpl.segments()[0].parts(), &[Part::Literal("user".into())]);
        assert!(tpl.segments()[2].is_wildcard());
        assert_eq!(tpl.params().collect::<Vec<_>>(), vec!["username"]);
    }

    #[test]
    fn test_parse_inline_param() {
        let tpl = Template::parse("/files/:name.json");
        assert_eq!(
            tpl.segments()[1].parts(),
            &[Part::Param("name".into()), Part::Literal(".json".into())]
        );
        assert!(!tpl.segments()[1].is_wildcard());
    }

    #[test]
    fn test_bare_colon_is_literal() {
        let tpl = Template::parse("/time/12:-00/::id");
        assert_eq!(tpl.segments()[1].parts(), &[Part::Literal("12:-00".into())]);
        assert_eq!(
            tpl.segments()[2].parts(),
            &[Part::Literal(":".into()), Part::Param("id".into())]
        );
    }

    #[test]
    fn test_root_template() {
        let tpl = Template::parse("/");
        assert!(tpl.segments().is_empty());
        assert_eq!(tpl.render(&Params::new()), "/");
    }

    #[test]
    fn test_render_encodes_values() {
        let tpl = Template::parse("/user/username/:username");
        let params = Params::new().with("username", "m rossi/x");
        assert_eq!(tpl.render(&params), "/user/username/m%20rossi%2Fx");
    }

    #[test]
    fn test_render_numbers() {
        let tpl = Template::parse("/users/:id");
        assert_eq!(tpl.render(&Params::new().with("id", 42)), "/users/42");
    }

    #[test]
    fn test_render_missing_param() {
        let tpl = Template::parse("/users/:id");
        assert_eq!(tpl.render(&Params::new()), "/users/undefined");
    }

    #[test]
    fn test_shadows() {
        let general = Template::parse("/users/:id");
        let literal = Template::parse("/users/me");
        let other = Template::parse("/users");

        assert!(general.shadows(&literal));
        assert!(!literal.shadows(&general));
        assert!(!general.shadows(&other));
        assert!(!other.shadows(&general));
        assert!(Template::parse("/Users/:x").shadows(&general));
    }

    #[test]
    fn test_mixed_segment_shadows_literal() {
        let mixed = Template::parse("/files/:name.json");
        assert!(mixed.shadows(&Template::parse("/files/index.json")));
        assert!(mixed.shadows(&Template::parse("/files/INDEX.JSON")));
        assert!(!mixed.shadows(&Template::parse("/files/index.xml")));
        assert!(!mixed.shadows(&Template::parse("/files/.json")));
        assert!(!mixed.shadows(&Template::parse("/files/:name.xml")));
        assert!(!Template::parse("/files/index.json").shadows(&mixed));
    }

    #[test]
    fn test_segment_pattern() {
        let tpl = Template::parse("/files/:name.json");
        assert_eq!(tpl.segments()[1].pattern(), "[^/]+\\.json");
    }

    #[test]
    fn test_render_dot_values_pass_through() {
        let tpl = Template::parse("/users/:id");
        assert_eq!(tpl.render(&Params::new().with("id", ".")), "/users/.");
        assert_eq!(tpl.render(&Params::new().with("id", "..")), "/users/..");
    }

    #[test]
    fn test_params_from_iter() {
        let params: Params = [("id", 7)].into_iter().collect();
        assert_eq!(params.get("id"), Some("7"));
        assert!(params.get("name").is_none());
    }
}
