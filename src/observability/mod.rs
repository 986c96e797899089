//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! config / registry / CLI
//!     → tracing macros (structured fields)
//!     → logging.rs subscriber (env filter + fmt layer)
//!     → stderr
//! ```
//!
//! # Design Decisions
//! - `RUST_LOG` overrides the configured level
//! - Logs go to stderr so command output stays clean

pub mod logging;

pub use logging::init_logging;
