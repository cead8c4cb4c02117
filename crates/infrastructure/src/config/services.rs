//! Service configurations: traffic, emissions, default route.

use std::fmt;

use domain::Coordinates;
use secrecy::SecretString;
use serde::Deserialize;

// ==============================
// Traffic Configuration
// ==============================

/// Traffic service configuration
#[derive(Clone, Deserialize)]
pub struct TrafficAppConfig {
    /// Traffic endpoint URL
    #[serde(default = "default_traffic_base_url")]
    pub base_url: String,

    /// API key for this service only (falls back to the top-level `api_key`)
    #[serde(default)]
    pub api_key: Option<SecretString>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_traffic_base_url() -> String {
    "https://traffic.example.com/data".to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

impl Default for TrafficAppConfig {
    fn default() -> Self {
        Self {
            base_url: default_traffic_base_url(),
            api_key: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl fmt::Debug for TrafficAppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrafficAppConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

// ==============================
// Emissions Configuration
// ==============================

/// Emissions service configuration
#[derive(Clone, Deserialize)]
pub struct EmissionsAppConfig {
    /// Emissions endpoint URL
    #[serde(default = "default_emissions_base_url")]
    pub base_url: String,

    /// API key for this service only (falls back to the top-level `api_key`)
    #[serde(default)]
    pub api_key: Option<SecretString>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_emissions_base_url() -> String {
    "https://environment.example.com/emissions".to_string()
}

impl Default for EmissionsAppConfig {
    fn default() -> Self {
        Self {
            base_url: default_emissions_base_url(),
            api_key: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl fmt::Debug for EmissionsAppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmissionsAppConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

// ==============================
// Route Defaults
// ==============================

/// Origin and destination used when the CLI is given none
#[derive(Debug, Clone, Deserialize)]
pub struct RouteDefaults {
    /// Origin as `"lat,lon"`
    #[serde(default = "default_origin")]
    pub origin: String,

    /// Destination as `"lat,lon"`
    #[serde(default = "default_destination")]
    pub destination: String,
}

fn default_origin() -> String {
    Coordinates::bangalore().to_string()
}

fn default_destination() -> String {
    Coordinates::delhi().to_string()
}

impl Default for RouteDefaults {
    fn default() -> Self {
        Self {
            origin: default_origin(),
            destination: default_destination(),
        }
    }
}
