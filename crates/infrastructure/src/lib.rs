//! Infrastructure layer - Adapters and wiring
//!
//! Implements the application ports on top of the HTTP integration crates,
//! loads layered configuration and installs the tracing subscriber.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::{EmissionsAdapter, TrafficAdapter, build_eco_route_service};
pub use config::{AppConfig, EmissionsAppConfig, RouteDefaults, TrafficAppConfig};
pub use telemetry::{TelemetryConfig, TelemetryError, init_telemetry};
