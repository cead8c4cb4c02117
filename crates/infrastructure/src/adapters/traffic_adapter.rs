//! Traffic adapter - Implements TrafficPort using integration_traffic

use application::error::ApplicationError;
use application::ports::TrafficPort;
use async_trait::async_trait;
use domain::RouteCandidate;
use integration_traffic::{HttpTrafficClient, TrafficClient, TrafficConfig, TrafficError};
use tracing::{debug, instrument};

/// Adapter for the traffic service
#[derive(Debug)]
pub struct TrafficAdapter {
    client: HttpTrafficClient,
}

impl TrafficAdapter {
    /// Create an adapter around an existing client
    pub const fn new(client: HttpTrafficClient) -> Self {
        Self { client }
    }

    /// Create an adapter from client configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: &TrafficConfig) -> Result<Self, ApplicationError> {
        let client = HttpTrafficClient::new(config).map_err(Self::map_error)?;
        Ok(Self::new(client))
    }

    /// Convert a traffic error into an application error
    fn map_error(err: TrafficError) -> ApplicationError {
        debug!(error = %err, retryable = err.is_retryable(), "Traffic client error");
        match err {
            TrafficError::RateLimitExceeded { .. } => ApplicationError::RateLimited,
            TrafficError::ConfigurationError(msg) => {
                ApplicationError::Configuration(format!("traffic: {msg}"))
            },
            other => ApplicationError::ExternalService(format!("Traffic lookup failed: {other}")),
        }
    }
}

#[async_trait]
impl TrafficPort for TrafficAdapter {
    #[instrument(skip(self))]
    async fn fetch_routes(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<Vec<RouteCandidate>, ApplicationError> {
        let routes = self
            .client
            .fetch_routes(origin, destination)
            .await
            .map_err(Self::map_error)?;

        debug!(count = routes.len(), "Traffic adapter returned routes");
        Ok(routes)
    }
}
