//! Traffic service integration for EcoRoute
//!
//! Queries a traffic/routing endpoint for the candidate routes between an
//! origin and a destination.
//!
//! # Architecture
//!
//! [`TrafficClient`] defines the interface, implemented over HTTP by
//! [`HttpTrafficClient`]. Route candidates are returned as opaque
//! [`domain::RouteCandidate`] values.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_traffic::{HttpTrafficClient, TrafficClient, TrafficConfig};
//!
//! let config = TrafficConfig::default();
//! let client = HttpTrafficClient::new(&config)?;
//!
//! let routes = client
//!     .fetch_routes("12.9715987,77.594566", "28.6139391,77.2090212")
//!     .await?;
//! ```

mod client;
mod config;
mod error;
mod models;

pub use client::{HttpTrafficClient, TrafficClient};
pub use config::TrafficConfig;
pub use error::TrafficError;
