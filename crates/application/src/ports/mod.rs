//! Port definitions (interfaces for external adapters)
//!
//! Ports define the boundaries between the application layer and
//! the services it calls out to.

mod emissions_port;
mod traffic_port;

pub use emissions_port::EmissionsPort;
#[cfg(test)]
pub use emissions_port::MockEmissionsPort;
pub use traffic_port::TrafficPort;
#[cfg(test)]
pub use traffic_port::MockTrafficPort;
