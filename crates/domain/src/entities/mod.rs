//! Domain entities
//!
//! Values that flow through a single eco-route calculation.

mod eco_route;
mod emissions;
mod route_candidate;

pub use eco_route::EcoRoute;
pub use emissions::{EmissionsEstimate, EmissionsReport};
pub use route_candidate::RouteCandidate;
