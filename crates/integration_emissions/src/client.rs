//! HTTP emissions client

use std::time::Duration;

use async_trait::async_trait;
use domain::{EmissionsReport, RouteCandidate};
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::config::EmissionsConfig;
use crate::error::EmissionsError;

/// Trait for emissions service clients
#[async_trait]
pub trait EmissionsClient: Send + Sync {
    /// Estimate emissions for a single route candidate
    async fn estimate(&self, route: &RouteCandidate) -> Result<EmissionsReport, EmissionsError>;
}

/// Emissions client talking to a JSON-over-HTTP endpoint
#[derive(Debug)]
pub struct HttpEmissionsClient {
    client: Client,
    config: EmissionsConfig,
}

impl HttpEmissionsClient {
    /// Create a new emissions client
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be initialized.
    pub fn new(config: &EmissionsConfig) -> Result<Self, EmissionsError> {
        config
            .validate()
            .map_err(EmissionsError::ConfigurationError)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("EcoRoute/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| EmissionsError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    fn parse_emissions_response(body: &str) -> Result<EmissionsReport, EmissionsError> {
        let raw: Value =
            serde_json::from_str(body).map_err(|e| EmissionsError::ParseError(e.to_string()))?;
        Ok(EmissionsReport::from_json(raw))
    }

    /// Map a transport error without the request URL, whose query holds the key
    fn map_send_error(&self, e: reqwest::Error) -> EmissionsError {
        if e.is_timeout() {
            EmissionsError::Timeout {
                timeout_secs: self.config.timeout_secs,
            }
        } else {
            EmissionsError::ConnectionFailed(e.without_url().to_string())
        }
    }
}

#[async_trait]
impl EmissionsClient for HttpEmissionsClient {
    #[instrument(skip(self, route), fields(route = %route))]
    async fn estimate(&self, route: &RouteCandidate) -> Result<EmissionsReport, EmissionsError> {
        let route_param = route.to_query_value();
        let params = [
            ("route", route_param.as_str()),
            ("key", self.config.api_key.as_str()),
        ];

        debug!(url = %self.config.base_url, "Fetching emissions estimate");

        let response = self
            .client
            .get(&self.config.base_url)
            .query(&params)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(EmissionsError::RateLimitExceeded {
                retry_after_secs: response
                    .headers()
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse().ok()),
            });
        }

        if !status.is_success() {
            return Err(EmissionsError::RequestFailed(format!("HTTP {status}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| EmissionsError::ParseError(e.without_url().to_string()))?;

        let report = Self::parse_emissions_response(&body)?;
        debug!(estimate = %report.estimate, "Emissions estimate received");
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use domain::EmissionsEstimate;

    use super::*;

    #[test]
    fn test_parse_emissions_response() {
        let body = r#"{ "emissions": 42.5, "unit": "kg_co2e", "vehicle": "car" }"#;
        let report = HttpEmissionsClient::parse_emissions_response(body).unwrap();
        assert_eq!(report.estimate, EmissionsEstimate::Reported(42.5));
        assert_eq!(report.extra.len(), 2);
    }

    #[test]
    fn test_parse_integer_emissions() {
        let report = HttpEmissionsClient::parse_emissions_response(r#"{ "emissions": 30 }"#)
            .unwrap();
        assert_eq!(report.estimate, EmissionsEstimate::Reported(30.0));
    }

    #[test]
    fn test_parse_missing_emissions() {
        let report =
            HttpEmissionsClient::parse_emissions_response(r#"{ "unit": "kg_co2e" }"#).unwrap();
        assert_eq!(report.estimate, EmissionsEstimate::Missing);
    }

    #[test]
    fn test_parse_invalid_json() {
        let result = HttpEmissionsClient::parse_emissions_response("{ emissions: 1 ");
        assert!(matches!(result, Err(EmissionsError::ParseError(_))));
    }
}
