//! Tracing/logging setup shared by the gateway binaries.

/// Tracing configuration (filters, layers, sinks).
pub mod tracing;

pub use crate::tracing::{init, LogConfig, LogGuard, LOG_FILE_PREFIX};
