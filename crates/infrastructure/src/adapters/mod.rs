//! Adapters implementing application ports

mod emissions_adapter;
mod traffic_adapter;

use std::sync::Arc;

use application::{ApplicationError, EcoRouteService};

pub use emissions_adapter::EmissionsAdapter;
pub use traffic_adapter::TrafficAdapter;

use crate::config::AppConfig;

/// Wire the HTTP adapters from configuration into an [`EcoRouteService`]
///
/// # Errors
///
/// Returns an error if either HTTP client cannot be constructed.
pub fn build_eco_route_service(config: &AppConfig) -> Result<EcoRouteService, ApplicationError> {
    let traffic = TrafficAdapter::with_config(&config.traffic_config())?;
    let emissions = EmissionsAdapter::with_config(&config.emissions_config())?;
    Ok(EcoRouteService::new(Arc::new(traffic), Arc::new(emissions)))
}
