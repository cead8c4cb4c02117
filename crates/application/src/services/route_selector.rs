//! Lowest-emissions route selection
//!
//! Walks the candidates in order, asks the emissions port about each one and
//! keeps the candidate with the strictly smallest figure. Lookups are awaited
//! one after another; a failed lookup skips that candidate.

use std::fmt;
use std::sync::Arc;

use domain::{EcoRoute, RouteCandidate};
use tracing::{debug, info, instrument, warn};

use crate::ports::EmissionsPort;

/// Picks the candidate with the lowest reported emissions
pub struct RouteSelector {
    emissions: Arc<dyn EmissionsPort>,
}

impl fmt::Debug for RouteSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteSelector")
            .field("emissions", &"<dyn EmissionsPort>")
            .finish()
    }
}

impl RouteSelector {
    /// Create a selector backed by the given emissions port
    pub fn new(emissions: Arc<dyn EmissionsPort>) -> Self {
        Self { emissions }
    }

    /// Select the lowest-emissions candidate
    ///
    /// Returns `None` when the list is empty, every lookup fails, or no
    /// candidate reports a figure below `+inf`. Ties keep the earliest
    /// candidate.
    #[instrument(skip_all, fields(candidates = candidates.len()))]
    pub async fn select(&self, candidates: Vec<RouteCandidate>) -> Option<EcoRoute> {
        let mut best: Option<EcoRoute> = None;
        let mut lowest = f64::INFINITY;

        for (index, candidate) in candidates.into_iter().enumerate() {
            let report = match self.emissions.estimate(&candidate).await {
                Ok(report) => report,
                Err(e) => {
                    warn!(
                        index,
                        error = %e,
                        retryable = e.is_retryable(),
                        "Error fetching emissions data, skipping candidate"
                    );
                    continue;
                },
            };

            if !report.estimate.is_reported() {
                debug!(index, "No emissions figure in response");
            }

            let value = report.estimate.value();
            if value < lowest {
                debug!(index, emissions = value, "New lowest-emissions candidate");
                lowest = value;
                best = Some(EcoRoute::new(candidate, value));
            }
        }

        match &best {
            Some(route) => info!(emissions = route.emissions, "Eco-route selected"),
            None => info!("No candidate qualified as eco-route"),
        }

        best
    }
}
