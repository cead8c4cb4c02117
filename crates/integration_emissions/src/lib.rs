//! Emissions-estimation service integration for EcoRoute
//!
//! Asks an emissions endpoint for the estimated emissions of one route
//! candidate at a time. Responses are parsed into [`domain::EmissionsReport`],
//! which records a missing `emissions` field explicitly.

mod client;
mod config;
mod error;

pub use client::{EmissionsClient, HttpEmissionsClient};
pub use config::EmissionsConfig;
pub use error::EmissionsError;
