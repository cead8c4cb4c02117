//! Emissions service configuration

use std::fmt;

use serde::{Deserialize, Serialize};

/// Configuration for the emissions-estimation service
#[derive(Clone, Serialize, Deserialize)]
pub struct EmissionsConfig {
    /// Endpoint URL queried with `route` and `key`
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key sent as the `key` query parameter
    #[serde(default, skip_serializing)]
    pub api_key: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://environment.example.com/emissions".to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

impl Default for EmissionsConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl fmt::Debug for EmissionsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmissionsConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl EmissionsConfig {
    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            api_key: "test-key".to_string(),
            timeout_secs: 5,
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("base_url must not be empty".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        Ok(())
    }
}
