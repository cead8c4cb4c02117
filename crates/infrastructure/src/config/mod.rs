//! Application configuration
//!
//! Layered with the `config` crate, lowest precedence first:
//! - built-in defaults
//! - optional TOML file (`ecoroute.toml`, or an explicit path)
//! - environment variables, e.g. `ECOROUTE_API_KEY`, `ECOROUTE_TRAFFIC__BASE_URL`
//!
//! Split into focused sub-modules:
//! - `services`: traffic and emissions endpoints, default route

mod services;

use std::fmt;
use std::path::Path;

use integration_emissions::EmissionsConfig;
use integration_traffic::TrafficConfig;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use tracing::{debug, warn};

pub use services::{EmissionsAppConfig, RouteDefaults, TrafficAppConfig};

use crate::telemetry::TelemetryConfig;

/// Placeholder API key shipped as the default
pub const PLACEHOLDER_API_KEY: &str = "your_api_key_here";

/// Environment variable prefix
const ENV_PREFIX: &str = "ECOROUTE";

/// Config file looked up in the working directory when no path is given
const DEFAULT_CONFIG_FILE: &str = "ecoroute";

/// Root application configuration
#[derive(Clone, Deserialize)]
pub struct AppConfig {
    /// API key shared by both services unless a section overrides it
    #[serde(default = "default_api_key")]
    pub api_key: SecretString,

    /// Traffic service settings
    #[serde(default)]
    pub traffic: TrafficAppConfig,

    /// Emissions service settings
    #[serde(default)]
    pub emissions: EmissionsAppConfig,

    /// Default origin and destination
    #[serde(default)]
    pub route: RouteDefaults,

    /// Logging settings
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

fn default_api_key() -> SecretString {
    SecretString::from(PLACEHOLDER_API_KEY)
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: default_api_key(),
            traffic: TrafficAppConfig::default(),
            emissions: EmissionsAppConfig::default(),
            route: RouteDefaults::default(),
            telemetry: TelemetryConfig::default(),
        }
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_key", &"[REDACTED]")
            .field("traffic", &self.traffic)
            .field("emissions", &self.emissions)
            .field("route", &self.route)
            .field("telemetry", &self.telemetry)
            .finish()
    }
}

impl AppConfig {
    /// Load configuration from defaults, an optional file and the environment
    ///
    /// With `path = None`, `ecoroute.toml` in the working directory is read
    /// if present. An explicit path must exist.
    pub fn load(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        Self::load_with_env(path, None)
    }

    /// Same as [`AppConfig::load`], with the environment replaced by `env`
    /// when given (keys as they would appear in the process environment)
    pub fn load_with_env(
        path: Option<&Path>,
        env: Option<config::Map<String, String>>,
    ) -> Result<Self, config::ConfigError> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let builder = config::Config::builder()
            .add_source(file)
            // Override with environment variables (e.g., ECOROUTE_TRAFFIC__TIMEOUT_SECS)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(env),
            );

        let config: Self = builder.build()?.try_deserialize()?;
        debug!(?config, "Configuration loaded");
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error describing the first invalid setting.
    pub fn validate(&self) -> Result<(), String> {
        self.traffic_config()
            .validate()
            .map_err(|e| format!("traffic: {e}"))?;
        self.emissions_config()
            .validate()
            .map_err(|e| format!("emissions: {e}"))?;

        if self.route.origin.trim().is_empty() || self.route.destination.trim().is_empty() {
            return Err("route: origin and destination must not be empty".to_string());
        }

        if self.uses_placeholder_key() {
            warn!("API key is still the placeholder; set ECOROUTE_API_KEY or api_key in ecoroute.toml");
        }

        Ok(())
    }

    /// Whether any service would send the placeholder key
    pub fn uses_placeholder_key(&self) -> bool {
        self.traffic_config().api_key == PLACEHOLDER_API_KEY
            || self.emissions_config().api_key == PLACEHOLDER_API_KEY
    }

    /// Traffic client configuration with the effective API key
    pub fn traffic_config(&self) -> TrafficConfig {
        TrafficConfig {
            base_url: self.traffic.base_url.clone(),
            api_key: self.resolve_key(self.traffic.api_key.as_ref()),
            timeout_secs: self.traffic.timeout_secs,
        }
    }

    /// Emissions client configuration with the effective API key
    pub fn emissions_config(&self) -> EmissionsConfig {
        EmissionsConfig {
            base_url: self.emissions.base_url.clone(),
            api_key: self.resolve_key(self.emissions.api_key.as_ref()),
            timeout_secs: self.emissions.timeout_secs,
        }
    }

    fn resolve_key(&self, section_key: Option<&SecretString>) -> String {
        section_key
            .filter(|key| !key.expose_secret().is_empty())
            .unwrap_or(&self.api_key)
            .expose_secret()
            .to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_placeholder_key() {
        let config = AppConfig::default();
        assert!(config.uses_placeholder_key());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn shared_key_flows_to_both_services() {
        let config = AppConfig {
            api_key: SecretString::from("shared-key"),
            ..AppConfig::default()
        };
        assert_eq!(config.traffic_config().api_key, "shared-key");
        assert_eq!(config.emissions_config().api_key, "shared-key");
        assert!(!config.uses_placeholder_key());
    }

    #[test]
    fn section_key_overrides_shared_key() {
        let mut config = AppConfig {
            api_key: SecretString::from("shared-key"),
            ..AppConfig::default()
        };
        config.emissions.api_key = Some(SecretString::from("emissions-key"));

        assert_eq!(config.traffic_config().api_key, "shared-key");
        assert_eq!(config.emissions_config().api_key, "emissions-key");
    }

    #[test]
    fn empty_section_key_falls_back_to_shared_key() {
        let mut config = AppConfig {
            api_key: SecretString::from("shared-key"),
            ..AppConfig::default()
        };
        config.traffic.api_key = Some(SecretString::from(""));

        assert_eq!(config.traffic_config().api_key, "shared-key");
    }

    #[test]
    fn validation_rejects_zero_timeout() {
        let mut config = AppConfig::default();
        config.emissions.timeout_secs = 0;

        let err = config.validate().unwrap_err();
        assert!(err.starts_with("emissions:"));
    }

    #[test]
    fn validation_rejects_blank_route() {
        let mut config = AppConfig::default();
        config.route.origin = "  ".to_string();

        assert!(config.validate().is_err());
    }

    #[test]
    fn debug_output_redacts_keys() {
        let mut config = AppConfig {
            api_key: SecretString::from("top-secret"),
            ..AppConfig::default()
        };
        config.traffic.api_key = Some(SecretString::from("traffic-secret"));

        let debug = format!("{config:?}");
        assert!(!debug.contains("top-secret"));
        assert!(!debug.contains("traffic-secret"));
        assert!(debug.contains("[REDACTED]"));
    }
}
