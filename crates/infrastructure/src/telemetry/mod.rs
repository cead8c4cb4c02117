//! Logging infrastructure
//!
//! Installs the global `tracing` subscriber. Log output goes to stderr so
//! that stdout stays reserved for user-facing results.

mod subscriber;

pub use subscriber::{TelemetryConfig, TelemetryError, init_telemetry};
