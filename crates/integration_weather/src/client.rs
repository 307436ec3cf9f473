//! OpenWeatherMap client
//!
//! HTTP client for the OpenWeatherMap `/weather` and `/forecast` endpoints.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::models::{ApiErrorBody, CurrentResponse, ForecastResponse};

/// Weather client errors
#[derive(Debug, Error)]
pub enum WeatherError {
    /// No API key configured; no request was sent
    #[error("No OpenWeatherMap API key configured")]
    MissingApiKey,

    /// The provider does not know the requested city (HTTP 404)
    #[error("City not found: {0}")]
    CityNotFound(String),

    /// The provider rejected the API key (HTTP 401)
    #[error("Invalid API key")]
    InvalidApiKey,

    /// Connection to the weather service failed (DNS, connect, timeout)
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Any other non-success status
    #[error("Request failed with HTTP {status}: {message}")]
    RequestFailed {
        /// HTTP status code
        status: u16,
        /// Provider message, or `HTTP <status>` when the body has none
        message: String,
    },

    /// Failed to parse response from weather service
    #[error("Parse error: {0}")]
    ParseError(String),
}

/// Weather service configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// API base URL (default: <https://api.openweathermap.org/data/2.5>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key sent as the `appid` query parameter
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,

    /// Request timeout in seconds (default: 10)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Unit system passed as `units` (default: metric)
    #[serde(default = "default_units")]
    pub units: String,
}

impl std::fmt::Debug for WeatherConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("timeout_secs", &self.timeout_secs)
            .field("units", &self.units)
            .finish()
    }
}

fn default_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

const fn default_timeout() -> u64 {
    10
}

fn default_units() -> String {
    "metric".to_string()
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            timeout_secs: default_timeout(),
            units: default_units(),
        }
    }
}

/// Weather client trait for fetching raw provider data
#[async_trait]
pub trait WeatherClient: Send + Sync {
    /// Get current conditions for a city (`GET /weather`)
    async fn get_current(&self, city: &str) -> Result<CurrentResponse, WeatherError>;

    /// Get the 5 day / 3 hour forecast for a city (`GET /forecast`)
    async fn get_forecast(&self, city: &str) -> Result<ForecastResponse, WeatherError>;

    /// Whether an API key is configured
    fn is_configured(&self) -> bool;
}

/// OpenWeatherMap HTTP client implementation
#[derive(Debug)]
pub struct OpenWeatherClient {
    client: Client,
    config: WeatherConfig,
}

impl OpenWeatherClient {
    /// Create a new client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: WeatherConfig) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| WeatherError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// The configured key, rejecting blank values
    fn api_key(&self) -> Result<&str, WeatherError> {
        self.config
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or(WeatherError::MissingApiKey)
    }

    /// Build the endpoint URL (query parameters are attached separately)
    fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{endpoint}", self.config.base_url.trim_end_matches('/'))
    }

    /// Map a non-success status to an error, reading the provider message from the body
    fn status_error(status: StatusCode, city: &str, body: &str) -> WeatherError {
        match status {
            StatusCode::NOT_FOUND => WeatherError::CityNotFound(city.to_string()),
            StatusCode::UNAUTHORIZED => WeatherError::InvalidApiKey,
            _ => {
                let message = serde_json::from_str::<ApiErrorBody>(body)
                    .ok()
                    .and_then(|b| b.message)
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));
                WeatherError::RequestFailed {
                    status: status.as_u16(),
                    message,
                }
            },
        }
    }

    /// Issue a GET for `endpoint` and decode the JSON body
    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        city: &str,
    ) -> Result<T, WeatherError> {
        let api_key = self.api_key()?;
        let url = self.endpoint_url(endpoint);

        debug!(url = %url, city = %city, units = %self.config.units, "Requesting weather data");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", city),
                ("units", self.config.units.as_str()),
                ("appid", api_key),
            ])
            .send()
            .await
            .map_err(|e| WeatherError::ConnectionFailed(e.without_url().to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| WeatherError::ConnectionFailed(e.without_url().to_string()))?;

        if !status.is_success() {
            let err = Self::status_error(status, city, &body);
            warn!(status = status.as_u16(), error = %err, "Weather request rejected");
            return Err(err);
        }

        serde_json::from_str(&body).map_err(|e| WeatherError::ParseError(e.to_string()))
    }
}

#[async_trait]
impl WeatherClient for OpenWeatherClient {
    #[instrument(skip(self))]
    async fn get_current(&self, city: &str) -> Result<CurrentResponse, WeatherError> {
        self.get_json("weather", city).await
    }

    #[instrument(skip(self))]
    async fn get_forecast(&self, city: &str) -> Result<ForecastResponse, WeatherError> {
        let forecast: ForecastResponse = self.get_json("forecast", city).await?;
        debug!(samples = forecast.samples().len(), "Retrieved forecast samples");
        Ok(forecast)
    }

    fn is_configured(&self) -> bool {
        self.api_key().is_ok()
    }
}
