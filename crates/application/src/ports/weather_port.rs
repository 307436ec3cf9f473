//! Weather service port
//!
//! Defines the interface for weather data retrieval. Adapters hand back
//! provider readings with every field optional; normalization happens in
//! [`crate::services::WeatherService`].

use async_trait::async_trait;
use domain::CityName;
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::error::ApplicationError;

/// Current conditions as reported by the provider
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurrentObservation {
    /// Resolved city name
    pub city_name: Option<String>,
    /// ISO country code
    pub country: Option<String>,
    /// Observation time, unix seconds UTC
    pub observed_at: Option<i64>,
    /// Shift from UTC in seconds
    pub utc_offset_secs: Option<i32>,
    /// Temperature in °C
    pub temperature: Option<f64>,
    /// Feels-like temperature in °C
    pub feels_like: Option<f64>,
    /// Day's low in °C
    pub temp_min: Option<f64>,
    /// Day's high in °C
    pub temp_max: Option<f64>,
    /// Relative humidity in percent
    pub humidity: Option<f64>,
    /// Pressure in hPa
    pub pressure: Option<f64>,
    /// Cloudiness in percent
    pub cloud_cover: Option<f64>,
    /// Weather category, e.g. "Clear"
    pub category: Option<String>,
    /// Free-text description, e.g. "clear sky"
    pub description: Option<String>,
    /// Sunrise, unix seconds UTC
    pub sunrise: Option<i64>,
    /// Sunset, unix seconds UTC
    pub sunset: Option<i64>,
}

/// One 3-hour forecast sample
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForecastSample {
    /// Sample time, unix seconds UTC
    pub timestamp: i64,
    /// Point temperature in °C
    pub temperature: Option<f64>,
    /// Sample low in °C
    pub temp_min: Option<f64>,
    /// Sample high in °C
    pub temp_max: Option<f64>,
    /// Weather category
    pub category: Option<String>,
    /// Free-text description
    pub description: Option<String>,
}

/// The forecast series with the city's UTC offset
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForecastSeries {
    /// Samples in provider order
    pub samples: Vec<ForecastSample>,
    /// Shift from UTC in seconds, from the forecast's city block
    pub utc_offset_secs: Option<i32>,
}

/// Port for weather provider operations
#[allow(clippy::struct_field_names)] // automock generates struct with `get_*` prefixes
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherPort: Send + Sync {
    /// Whether a credential is configured; checked before any request
    fn is_configured(&self) -> bool;

    /// Get current conditions for a city
    async fn get_current_conditions(
        &self,
        city: &CityName,
    ) -> Result<CurrentObservation, ApplicationError>;

    /// Get the multi-day 3-hour forecast for a city
    async fn get_forecast(&self, city: &CityName) -> Result<ForecastSeries, ApplicationError>;
}
