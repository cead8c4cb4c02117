//! Traffic service port
//!
//! Adapters in the infrastructure layer implement this port using a traffic API.

use async_trait::async_trait;
use domain::RouteCandidate;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for retrieving candidate routes
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TrafficPort: Send + Sync {
    /// Fetch candidate routes between two `"lat,lon"` coordinate strings
    ///
    /// An empty vector means the service answered but offered no routes.
    async fn fetch_routes(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<Vec<RouteCandidate>, ApplicationError>;
}
