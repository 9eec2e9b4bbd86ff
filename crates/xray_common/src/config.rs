//! Companion configuration.
//!
//! Endpoints are baked in at build time from `API_BASE_URL` and `WEBSOCKET_URL`
//! (the same variables the Trunk build sees), falling back to a local setup.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::messages::FRONTEND_HANDSHAKE;

/// Default values used when nothing else is configured.
pub mod defaults {
    pub const API_BASE_URL: &str = "http://localhost:5000";
    pub const WEBSOCKET_URL: &str = "ws://localhost:8080";

    pub const NAME_INTERVAL_MS: u64 = 200;
    pub const DESCRIPTION_INTERVAL_MS: u64 = 20;

    /// One connection per mount.
    pub const RECONNECT_LIMIT: u64 = 0;
}

/// Per-character delays of the reveal animation.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct RevealTiming {
    pub name_interval_ms: u64,
    pub description_interval_ms: u64,
}

impl RevealTiming {
    pub fn name_interval(&self) -> Duration {
        Duration::from_millis(self.name_interval_ms)
    }

    pub fn description_interval(&self) -> Duration {
        Duration::from_millis(self.description_interval_ms)
    }
}

impl Default for RevealTiming {
    fn default() -> Self {
        Self {
            name_interval_ms: defaults::NAME_INTERVAL_MS,
            description_interval_ms: defaults::DESCRIPTION_INTERVAL_MS,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct CompanionConfig {
    /// Base URL of the anatomy REST API.
    pub api_base_url: String,
    /// Relay the headset publishes selections to.
    pub websocket_url: String,
    /// Text sent once the socket opens.
    pub handshake: String,
    pub timing: RevealTiming,
    /// Also show the "headset disconnected" status when our own socket closes.
    pub status_on_close: bool,
    /// Automatic reconnection attempts after the socket drops.
    pub reconnect_limit: u64,
}

impl Default for CompanionConfig {
    fn default() -> Self {
        Self {
            api_base_url: defaults::API_BASE_URL.to_string(),
            websocket_url: defaults::WEBSOCKET_URL.to_string(),
            handshake: FRONTEND_HANDSHAKE.to_string(),
            timing: RevealTiming::default(),
            status_on_close: false,
            reconnect_limit: defaults::RECONNECT_LIMIT,
        }
    }
}

impl CompanionConfig {
    /// Configuration from the endpoints captured at compile time.
    pub fn from_build_env() -> Self {
        Self::from_endpoints(option_env!("API_BASE_URL"), option_env!("WEBSOCKET_URL"))
    }

    /// Override the default endpoints with whichever values are set and non-empty.
    pub fn from_endpoints(api_base_url: Option<&str>, websocket_url: Option<&str>) -> Self {
        let mut config = Self::default();
        match api_base_url.filter(|url| !url.trim().is_empty()) {
            Some(url) => config.api_base_url = url.trim().to_string(),
            None => log::warn!("API_BASE_URL not set, using {}", defaults::API_BASE_URL),
        }
        match websocket_url.filter(|url| !url.trim().is_empty()) {
            Some(url) => config.websocket_url = url.trim().to_string(),
            None => log::warn!("WEBSOCKET_URL not set, using {}", defaults::WEBSOCKET_URL),
        }
        config
    }

    /// Parse a JSON document; missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_scheme("api_base_url", &self.api_base_url, &["http://", "https://"])?;
        check_scheme("websocket_url", &self.websocket_url, &["ws://", "wss://"])?;
        Ok(())
    }
}

fn check_scheme(
    field: &'static str,
    value: &str,
    expected: &'static [&'static str],
) -> Result<(), ConfigError> {
    if expected.iter().any(|scheme| value.starts_with(scheme)) {
        Ok(())
    } else {
        Err(ConfigError::InvalidScheme {
            field,
            expected,
            value: value.to_string(),
        })
    }
}
