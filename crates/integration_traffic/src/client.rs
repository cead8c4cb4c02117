//! HTTP traffic client
//!
//! Issues one GET per lookup against the configured traffic endpoint and
//! decodes the `routes` array of the response.

use std::time::Duration;

use async_trait::async_trait;
use domain::RouteCandidate;
use reqwest::Client;
use tracing::{debug, instrument, warn};

use crate::config::TrafficConfig;
use crate::error::TrafficError;
use crate::models::RawTrafficResponse;

/// Trait for traffic service clients
#[async_trait]
pub trait TrafficClient: Send + Sync {
    /// Fetch candidate routes between two `"lat,lon"` coordinate strings
    async fn fetch_routes(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<Vec<RouteCandidate>, TrafficError>;
}

/// Traffic client talking to a JSON-over-HTTP endpoint
#[derive(Debug)]
pub struct HttpTrafficClient {
    client: Client,
    config: TrafficConfig,
}

impl HttpTrafficClient {
    /// Create a new traffic client
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be initialized.
    pub fn new(config: &TrafficConfig) -> Result<Self, TrafficError> {
        config
            .validate()
            .map_err(TrafficError::ConfigurationError)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("EcoRoute/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| TrafficError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Parse the raw traffic response body into route candidates
    fn parse_routes_response(body: &str) -> Result<Vec<RouteCandidate>, TrafficError> {
        let raw: RawTrafficResponse =
            serde_json::from_str(body).map_err(|e| TrafficError::ParseError(e.to_string()))?;

        Ok(raw
            .routes
            .unwrap_or_default()
            .into_iter()
            .map(RouteCandidate::new)
            .collect())
    }

    /// Map a transport error; the URL is stripped since its query carries the key
    fn map_send_error(&self, e: reqwest::Error) -> TrafficError {
        if e.is_timeout() {
            TrafficError::Timeout {
                timeout_secs: self.config.timeout_secs,
            }
        } else {
            TrafficError::ConnectionFailed(e.without_url().to_string())
        }
    }
}

#[async_trait]
impl TrafficClient for HttpTrafficClient {
    #[instrument(skip(self))]
    async fn fetch_routes(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<Vec<RouteCandidate>, TrafficError> {
        let params = [
            ("origin", origin),
            ("destination", destination),
            ("key", self.config.api_key.as_str()),
        ];

        debug!(url = %self.config.base_url, "Fetching traffic data");

        let response = self
            .client
            .get(&self.config.base_url)
            .query(&params)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(TrafficError::RateLimitExceeded {
                retry_after_secs: response
                    .headers()
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse().ok()),
            });
        }

        if !status.is_success() {
            return Err(TrafficError::RequestFailed(format!("HTTP {status}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| TrafficError::ParseError(e.without_url().to_string()))?;

        let routes = Self::parse_routes_response(&body)?;

        if routes.is_empty() {
            warn!("Traffic service returned no routes");
        }

        debug!(count = routes.len(), "Routes received");
        Ok(routes)
    }
}
