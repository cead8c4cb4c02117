//! Emissions adapter - Implements EmissionsPort using integration_emissions

use application::error::ApplicationError;
use application::ports::EmissionsPort;
use async_trait::async_trait;
use domain::{EmissionsReport, RouteCandidate};
use integration_emissions::{
    EmissionsClient, EmissionsConfig, EmissionsError, HttpEmissionsClient,
};
use tracing::{debug, instrument};

/// Adapter for the emissions service
#[derive(Debug)]
pub struct EmissionsAdapter {
    client: HttpEmissionsClient,
}

impl EmissionsAdapter {
    /// Create an adapter around an existing client
    pub const fn new(client: HttpEmissionsClient) -> Self {
        Self { client }
    }

    /// Create an adapter from client configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: &EmissionsConfig) -> Result<Self, ApplicationError> {
        let client = HttpEmissionsClient::new(config).map_err(Self::map_error)?;
        Ok(Self::new(client))
    }

    fn map_error(err: EmissionsError) -> ApplicationError {
        debug!(error = %err, retryable = err.is_retryable(), "Emissions client error");
        match err {
            EmissionsError::RateLimitExceeded { .. } => ApplicationError::RateLimited,
            EmissionsError::ConfigurationError(msg) => {
                ApplicationError::Configuration(format!("emissions: {msg}"))
            },
            other => {
                ApplicationError::ExternalService(format!("Emissions lookup failed: {other}"))
            },
        }
    }
}

#[async_trait]
impl EmissionsPort for EmissionsAdapter {
    #[instrument(skip_all)]
    async fn estimate(&self, route: &RouteCandidate) -> Result<EmissionsReport, ApplicationError> {
        self.client.estimate(route).await.map_err(Self::map_error)
    }
}
