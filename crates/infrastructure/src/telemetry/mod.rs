//! Log output setup
//!
//! Installs a `tracing` subscriber writing to stderr, so that stdout stays
//! free for search results.

mod subscriber;

pub use subscriber::{TelemetryConfig, TelemetryError, build_filter, init_telemetry};
