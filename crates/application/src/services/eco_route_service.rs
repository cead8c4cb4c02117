//! Eco-route calculation
//!
//! One traffic lookup followed by the lowest-emissions selection. Every
//! service failure is logged and folded into the outcome; nothing is
//! propagated to the caller as an error.

use std::fmt;
use std::sync::Arc;

use domain::EcoRoute;
use serde::Serialize;
use tracing::{info, instrument, warn};

use super::RouteSelector;
use crate::ports::{EmissionsPort, TrafficPort};

/// Result of an eco-route calculation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum EcoRouteOutcome {
    /// A candidate with a reported emissions figure was selected
    Found(EcoRoute),
    /// Traffic data arrived but no candidate qualified
    NoRoute {
        /// How many candidates the traffic service offered
        candidates: usize,
    },
    /// The traffic lookup failed; no emissions lookups were made
    TrafficUnavailable {
        /// Why the lookup failed
        reason: String,
    },
}

impl EcoRouteOutcome {
    /// Collapse to the selected route, if any
    #[must_use]
    pub fn into_route(self) -> Option<EcoRoute> {
        match self {
            Self::Found(route) => Some(route),
            Self::NoRoute { .. } | Self::TrafficUnavailable { .. } => None,
        }
    }

    /// Whether a route was selected
    #[must_use]
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

/// Calculates the eco-route between two coordinate pairs
pub struct EcoRouteService {
    traffic: Arc<dyn TrafficPort>,
    selector: RouteSelector,
}

impl fmt::Debug for EcoRouteService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EcoRouteService")
            .field("traffic", &"<dyn TrafficPort>")
            .field("selector", &self.selector)
            .finish()
    }
}

impl EcoRouteService {
    /// Create a new service from its two ports
    pub fn new(traffic: Arc<dyn TrafficPort>, emissions: Arc<dyn EmissionsPort>) -> Self {
        Self {
            traffic,
            selector: RouteSelector::new(emissions),
        }
    }

    /// Calculate the eco-route from `origin` to `destination`
    ///
    /// Both arguments are `"lat,lon"` strings forwarded to the traffic
    /// service as given.
    #[instrument(skip(self))]
    pub async fn calculate(&self, origin: &str, destination: &str) -> EcoRouteOutcome {
        let candidates = match self.traffic.fetch_routes(origin, destination).await {
            Ok(candidates) => candidates,
            Err(e) => {
                warn!(error = %e, retryable = e.is_retryable(), "Error fetching traffic data");
                return EcoRouteOutcome::TrafficUnavailable {
                    reason: e.to_string(),
                };
            },
        };

        let count = candidates.len();
        info!(candidates = count, "Evaluating route candidates");

        self.selector
            .select(candidates)
            .await
            .map_or(EcoRouteOutcome::NoRoute { candidates: count }, EcoRouteOutcome::Found)
    }
}
