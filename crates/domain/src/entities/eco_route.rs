//! Selected eco-route

use serde::{Deserialize, Serialize};

use super::RouteCandidate;

/// The candidate with the lowest reported emissions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EcoRoute {
    /// The winning candidate, unmodified
    pub route: RouteCandidate,
    /// The emissions figure that won the selection
    pub emissions: f64,
}

impl EcoRoute {
    /// Create a new eco-route
    #[must_use]
    pub const fn new(route: RouteCandidate, emissions: f64) -> Self {
        Self { route, emissions }
    }
}
