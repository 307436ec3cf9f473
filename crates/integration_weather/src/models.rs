//! Weather data models
//!
//! Raw response shapes of the OpenWeatherMap API. Every field is optional and
//! deserialized leniently: a missing, `null` or wrongly-typed value becomes
//! `None` instead of failing the whole response.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// Deserialize any value, keeping it only if it has the expected type
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Temperature, humidity and pressure readings (`main` object)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MainReadings {
    /// Temperature in °C (metric units)
    #[serde(default, deserialize_with = "lenient")]
    pub temp: Option<f64>,
    /// Feels-like temperature in °C
    #[serde(default, deserialize_with = "lenient")]
    pub feels_like: Option<f64>,
    /// Minimum temperature in °C
    #[serde(default, deserialize_with = "lenient")]
    pub temp_min: Option<f64>,
    /// Maximum temperature in °C
    #[serde(default, deserialize_with = "lenient")]
    pub temp_max: Option<f64>,
    /// Relative humidity in percent
    #[serde(default, deserialize_with = "lenient")]
    pub humidity: Option<f64>,
    /// Sea-level pressure in hPa
    #[serde(default, deserialize_with = "lenient")]
    pub pressure: Option<f64>,
}

/// Weather category and description (`weather[]` entry)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherTag {
    /// Category, e.g. "Clouds"
    #[serde(default, deserialize_with = "lenient")]
    pub main: Option<String>,
    /// Free-text description, e.g. "scattered clouds"
    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<String>,
}

/// Cloud cover (`clouds` object)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CloudCover {
    /// Cloudiness in percent
    #[serde(default, deserialize_with = "lenient")]
    pub all: Option<f64>,
}

/// Country and sun times (`sys` object)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SunTimes {
    /// ISO country code
    #[serde(default, deserialize_with = "lenient")]
    pub country: Option<String>,
    /// Sunrise, unix seconds UTC
    #[serde(default, deserialize_with = "lenient")]
    pub sunrise: Option<i64>,
    /// Sunset, unix seconds UTC
    #[serde(default, deserialize_with = "lenient")]
    pub sunset: Option<i64>,
}

/// Response of `GET /weather`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurrentResponse {
    /// Resolved city name
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    /// Observation time, unix seconds UTC
    #[serde(default, deserialize_with = "lenient")]
    pub dt: Option<i64>,
    /// Shift from UTC in seconds
    #[serde(default, deserialize_with = "lenient")]
    pub timezone: Option<i32>,
    /// Readings
    #[serde(default, deserialize_with = "lenient")]
    pub main: Option<MainReadings>,
    /// Conditions, first entry is primary
    #[serde(default, deserialize_with = "lenient")]
    pub weather: Option<Vec<WeatherTag>>,
    /// Cloud cover
    #[serde(default, deserialize_with = "lenient")]
    pub clouds: Option<CloudCover>,
    /// Country and sun times
    #[serde(default, deserialize_with = "lenient")]
    pub sys: Option<SunTimes>,
}

impl CurrentResponse {
    /// Primary weather entry, if any
    #[must_use]
    pub fn primary_weather(&self) -> Option<&WeatherTag> {
        self.weather.as_ref().and_then(|w| w.first())
    }
}

/// One 3-hour forecast sample (`list[]` entry)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForecastItem {
    /// Sample time, unix seconds UTC
    #[serde(default, deserialize_with = "lenient")]
    pub dt: Option<i64>,
    /// Readings
    #[serde(default, deserialize_with = "lenient")]
    pub main: Option<MainReadings>,
    /// Conditions, first entry is primary
    #[serde(default, deserialize_with = "lenient")]
    pub weather: Option<Vec<WeatherTag>>,
    /// Cloud cover
    #[serde(default, deserialize_with = "lenient")]
    pub clouds: Option<CloudCover>,
}

impl ForecastItem {
    /// Primary weather entry, if any
    #[must_use]
    pub fn primary_weather(&self) -> Option<&WeatherTag> {
        self.weather.as_ref().and_then(|w| w.first())
    }
}

/// City block of the forecast response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityInfo {
    /// City name
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    /// ISO country code
    #[serde(default, deserialize_with = "lenient")]
    pub country: Option<String>,
    /// Shift from UTC in seconds
    #[serde(default, deserialize_with = "lenient")]
    pub timezone: Option<i32>,
}

/// Response of `GET /forecast`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForecastResponse {
    /// 3-hour samples in ascending time order
    #[serde(default, deserialize_with = "lenient")]
    pub list: Option<Vec<ForecastItem>>,
    /// City block
    #[serde(default, deserialize_with = "lenient")]
    pub city: Option<CityInfo>,
}

impl ForecastResponse {
    /// Samples, empty if the list was missing or malformed
    #[must_use]
    pub fn samples(&self) -> &[ForecastItem] {
        self.list.as_deref().unwrap_or_default()
    }
}

/// Error body returned on non-success statuses
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ApiErrorBody {
    #[serde(default, deserialize_with = "lenient")]
    pub message: Option<String>,
}
