//! Custom-type request body annotation.
//!
//! The backend picks the DTO to deserialize from a `CustomType` field in the
//! request body. The field value is the tag registered for the template that
//! the request URL matches.

use ::http::Method;
use serde_json::Value;

use crate::routing::{RouteRegistry, RouteResult};

/// Body field carrying the custom type tag.
pub const CUSTOM_TYPE_FIELD: &str = "CustomType";

/// Methods whose bodies are annotated.
pub fn accepts_custom_type(method: &Method) -> bool {
    *method == Method::POST || *method == Method::PUT
}

/// Add the custom type tag to a JSON object body.
///
/// The body is returned unchanged for other methods, non-object bodies, and
/// URLs whose template has no tag.
pub fn annotate_body(
    registry: &RouteRegistry,
    method: &Method,
    url: &str,
    body: Value,
) -> RouteResult<Value> {
    if !accepts_custom_type(method) {
        return Ok(body);
    }
    let Value::Object(mut fields) = body else {
        return Ok(body);
    };

    if let Some(tag) = registry.custom_type_from_url(url)? {
        tracing::debug!(url, custom_type = tag, "Annotating request body");
        fields.insert(CUSTOM_TYPE_FIELD.to_string(), Value::String(tag.to_string()));
    }
    Ok(Value::Object(fields))
}
