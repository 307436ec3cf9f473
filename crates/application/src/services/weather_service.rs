//! Weather service
//!
//! Fetches current conditions and the forecast for a city and normalizes
//! them into a [`WeatherData`] report.

use std::sync::Arc;

use chrono::{DateTime, NaiveDateTime, NaiveTime, Utc};
use domain::value_objects::temperature::{daily_average, finite, whole_degrees};
use domain::{CityName, ConditionIcon, CurrentConditions, Humidity, UvIndex, WeatherData};
use tracing::{info, instrument, warn};

use super::forecast_aggregator;
use crate::error::ApplicationError;
use crate::ports::{CurrentObservation, ForecastSeries, WeatherPort};

/// Service producing normalized weather reports
pub struct WeatherService {
    weather: Arc<dyn WeatherPort>,
}

impl std::fmt::Debug for WeatherService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherService")
            .field("configured", &self.weather.is_configured())
            .finish()
    }
}

impl WeatherService {
    /// Create a new weather service
    pub fn new(weather: Arc<dyn WeatherPort>) -> Self {
        Self { weather }
    }

    /// Fetch and normalize the report for a city
    ///
    /// Fails with [`ApplicationError::MissingCredentials`] before any request
    /// when no credential is configured. The current conditions request
    /// completes before the forecast request is issued.
    #[instrument(skip(self, city), fields(city = %city))]
    pub async fn fetch(&self, city: &CityName) -> Result<WeatherData, ApplicationError> {
        if !self.weather.is_configured() {
            warn!("Weather provider has no credential configured");
            return Err(ApplicationError::MissingCredentials);
        }

        let current = self.weather.get_current_conditions(city).await?;
        let forecast = self.weather.get_forecast(city).await?;

        let report = build_report(city, &current, &forecast, Utc::now().timestamp());
        info!(
            location = %report.location,
            samples = forecast.samples.len(),
            "Weather report ready"
        );
        Ok(report)
    }
}

/// Normalize provider readings into a report
///
/// `now` (unix seconds) stands in for a missing observation time and
/// anchors padding when the forecast is empty.
#[must_use]
pub fn build_report(
    city: &CityName,
    current: &CurrentObservation,
    forecast: &ForecastSeries,
    now: i64,
) -> WeatherData {
    let offset = current.utc_offset_secs.unwrap_or(0);
    let forecast_offset = forecast.utc_offset_secs.unwrap_or(offset);

    WeatherData {
        location: location_label(city, current),
        date: date_label(current.observed_at.unwrap_or(now), offset),
        current: normalize_current(current, offset),
        week: forecast_aggregator::aggregate(&forecast.samples, forecast_offset, now),
    }
}

fn normalize_current(current: &CurrentObservation, offset: i32) -> CurrentConditions {
    let temp_max = finite(current.temp_max);
    let uv_input = temp_max.or_else(|| finite(current.temperature));

    CurrentConditions {
        temperature: whole_degrees(current.temperature),
        feels_like: whole_degrees(current.feels_like),
        average_temp: daily_average(current.temp_min, current.temp_max),
        icon: ConditionIcon::from_category(current.category.as_deref()),
        condition_text: current
            .description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(str::to_string),
        sunrise: current.sunrise.and_then(|ts| local_time(ts, offset)),
        sunset: current.sunset.and_then(|ts| local_time(ts, offset)),
        humidity: finite(current.humidity).and_then(Humidity::from_reading),
        pressure: finite(current.pressure),
        uv_index_estimate: UvIndex::estimate(uv_input, finite(current.cloud_cover)),
    }
}

/// "Paris, FR"; the queried city when the provider omits the name
fn location_label(city: &CityName, current: &CurrentObservation) -> String {
    let name = current
        .city_name
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| city.as_str());

    match current.country.as_deref().map(str::trim).filter(|c| !c.is_empty()) {
        Some(country) => format!("{name}, {country}"),
        None => name.to_string(),
    }
}

fn local_datetime(timestamp: i64, offset: i32) -> Option<NaiveDateTime> {
    DateTime::from_timestamp(timestamp.saturating_add(i64::from(offset)), 0)
        .map(|dt| dt.naive_utc())
}

fn local_time(timestamp: i64, offset: i32) -> Option<NaiveTime> {
    local_datetime(timestamp, offset).map(|dt| dt.time())
}

/// "Monday, September 21"
fn date_label(timestamp: i64, offset: i32) -> String {
    local_datetime(timestamp, offset)
        .map_or_else(String::new, |dt| dt.format("%A, %B %-d").to_string())
}
