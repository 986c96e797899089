//! HTTP request decoration.
//!
//! # Data Flow
//! ```text
//! Outgoing request (method, URL, JSON body)
//!     → custom_type.rs (look up template tag via the registry)
//!     → body with "CustomType" field, or unchanged
//!     → handed to the HTTP client (external)
//! ```

pub mod custom_type;

pub use custom_type::{annotate_body, CUSTOM_TYPE_FIELD};
