//! Weather provider settings

use integration_weather::WeatherConfig;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Default OpenWeatherMap API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

/// Weather provider configuration (`[weather]` section)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherAppConfig {
    /// API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// OpenWeatherMap API key (sensitive - uses SecretString)
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Unit system sent to the provider
    #[serde(default = "default_units")]
    pub units: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

fn default_units() -> String {
    "metric".to_string()
}

impl Default for WeatherAppConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            timeout_secs: default_timeout_secs(),
            units: default_units(),
        }
    }
}

impl WeatherAppConfig {
    /// Replace the configured key; blank overrides are ignored
    pub fn apply_api_key_override(&mut self, api_key: Option<&str>) {
        if let Some(key) = api_key.map(str::trim).filter(|k| !k.is_empty()) {
            self.api_key = Some(SecretString::from(key.to_owned()));
        }
    }

    /// Whether a non-blank key is configured
    pub fn has_api_key(&self) -> bool {
        self.api_key
            .as_ref()
            .is_some_and(|k| !k.expose_secret().trim().is_empty())
    }

    /// Convert to the HTTP client's configuration
    pub fn to_client_config(&self) -> WeatherConfig {
        WeatherConfig {
            base_url: self.base_url.clone(),
            api_key: self
                .api_key
                .as_ref()
                .map(|k| k.expose_secret().to_string()),
            timeout_secs: self.timeout_secs,
            units: self.units.clone(),
        }
    }
}
