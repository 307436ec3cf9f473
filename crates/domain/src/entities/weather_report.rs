//! Weather report
//!
//! The normalized record produced by one successful fetch. It is replaced
//! wholesale on the next fetch and never partially updated.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::Advisory;
use crate::value_objects::{ConditionIcon, Humidity, UvIndex};

/// Number of days in the forecast strip (provider coverage limit)
pub const FORECAST_DAYS: usize = 5;

/// Complete normalized weather report for one city
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherData {
    /// Display label, e.g. "Paris, FR"
    pub location: String,
    /// Local date label, e.g. "Monday, September 21"
    pub date: String,
    /// Current conditions panel
    pub current: CurrentConditions,
    /// Daily forecast, chronological, always [`FORECAST_DAYS`] entries
    pub week: Vec<DayForecast>,
}

impl WeatherData {
    /// Advisories triggered by the current conditions
    #[must_use]
    pub fn advisories(&self) -> Vec<Advisory> {
        Advisory::evaluate(&self.current)
    }
}

/// Current conditions; every numeric field is `None` when unknown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// Temperature in whole °C
    pub temperature: Option<i32>,
    /// Feels-like temperature in whole °C
    pub feels_like: Option<i32>,
    /// Mean of the day's min and max, one decimal place
    pub average_temp: Option<f64>,
    /// Icon for the current weather category
    pub icon: ConditionIcon,
    /// Provider's free-text description, e.g. "scattered clouds"
    pub condition_text: Option<String>,
    /// Local sunrise time
    pub sunrise: Option<NaiveTime>,
    /// Local sunset time
    pub sunset: Option<NaiveTime>,
    /// Relative humidity
    pub humidity: Option<Humidity>,
    /// Pressure in hPa (mbar)
    pub pressure: Option<f64>,
    /// Heuristic UV index estimate
    pub uv_index_estimate: Option<UvIndex>,
}

/// One day in the forecast strip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayForecast {
    /// Local calendar date; `None` for placeholder days
    pub date: Option<NaiveDate>,
    /// Weekday name, e.g. "Tuesday"
    pub day_name: String,
    /// Lowest temperature in whole °C
    pub min_temp: Option<i32>,
    /// Highest temperature in whole °C
    pub max_temp: Option<i32>,
    /// Icon for the day's most frequent category
    pub icon: ConditionIcon,
    /// Most frequent description
    pub condition_text: Option<String>,
}

impl DayForecast {
    /// A day the provider had no samples for
    #[must_use]
    pub fn placeholder(day_name: impl Into<String>) -> Self {
        Self {
            date: None,
            day_name: day_name.into(),
            min_temp: None,
            max_temp: None,
            icon: ConditionIcon::Unknown,
            condition_text: None,
        }
    }

    /// Whether this entry pads the strip rather than carrying data
    #[must_use]
    pub const fn is_placeholder(&self) -> bool {
        self.date.is_none()
    }

    /// Temperature used for the trend bar: max, falling back to min
    #[must_use]
    pub fn reference_temp(&self) -> Option<i32> {
        self.max_temp.or(self.min_temp)
    }

    /// Status text, `"Unknown"` when the provider gave none
    #[must_use]
    pub fn status_label(&self) -> &str {
        self.condition_text.as_deref().unwrap_or("Unknown")
    }
}
