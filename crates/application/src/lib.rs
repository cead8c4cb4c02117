//! Application layer - Use cases and orchestration
//!
//! Defines the ports through which the traffic and emissions services are
//! reached, and the eco-route selection that runs on top of them.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
