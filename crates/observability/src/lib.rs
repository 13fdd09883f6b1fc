//! Process-wide logging setup shared by the binaries.

/// Tracing subscriber configuration.
pub mod tracing;

pub use self::tracing::{DEFAULT_FILTER, LogFormat, init};
