//! Application services

mod eco_route_service;
mod route_selector;

pub use eco_route_service::{EcoRouteOutcome, EcoRouteService};
pub use route_selector::RouteSelector;
