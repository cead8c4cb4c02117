//! Emissions service port

use async_trait::async_trait;
use domain::{EmissionsReport, RouteCandidate};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for estimating the emissions of a route candidate
#[cfg_attr(test, automock)]
#[async_trait]
pub trait EmissionsPort: Send + Sync {
    /// Estimate emissions for one candidate
    async fn estimate(&self, route: &RouteCandidate) -> Result<EmissionsReport, ApplicationError>;
}
