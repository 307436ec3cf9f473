//! Humidity value object
//!
//! Relative humidity as reported with current conditions (0-100%).
//!
//! # Examples
//!
//! ```
//! use domain::Humidity;
//!
//! let h = Humidity::new(65).expect("valid humidity");
//! assert_eq!(h.to_string(), "65%");
//!
//! // Provider readings arrive as JSON numbers
//! assert_eq!(Humidity::from_reading(64.6).map(Humidity::value), Some(65));
//! assert!(Humidity::from_reading(f64::NAN).is_none());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error returned when a humidity value is out of range
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("invalid humidity: {0}% is out of range (must be 0-100)")]
pub struct InvalidHumidity(u8);

/// Relative humidity percentage (0-100%)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Humidity(u8);

impl Humidity {
    /// Maximum valid humidity percentage
    pub const MAX: u8 = 100;

    /// Create a new validated humidity value
    ///
    /// # Errors
    ///
    /// Returns `InvalidHumidity` if the value is greater than 100.
    pub const fn new(value: u8) -> Result<Self, InvalidHumidity> {
        if value > Self::MAX {
            Err(InvalidHumidity(value))
        } else {
            Ok(Self(value))
        }
    }

    /// Convert a raw provider reading, rounding and clamping into range
    ///
    /// Returns `None` for non-finite readings so they surface as unknown.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_reading(reading: f64) -> Option<Self> {
        if !reading.is_finite() {
            return None;
        }
        let rounded = reading.round().clamp(0.0, f64::from(Self::MAX));
        Some(Self(rounded as u8))
    }

    /// Get the humidity value as a u8
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Humidity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Custom deserialization that validates humidity values
impl<'de> Deserialize<'de> for Humidity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = u8::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_above_hundred() {
        let result = Humidity::new(101);
        assert_eq!(
            result.unwrap_err().to_string(),
            "invalid humidity: 101% is out of range (must be 0-100)"
        );
    }

    #[test]
    fn from_reading_rounds_and_clamps() {
        assert_eq!(Humidity::from_reading(59.5).map(Humidity::value), Some(60));
        assert_eq!(Humidity::from_reading(140.0).map(Humidity::value), Some(100));
        assert_eq!(Humidity::from_reading(-3.0).map(Humidity::value), Some(0));
    }

    #[test]
    fn from_reading_rejects_non_finite() {
        assert!(Humidity::from_reading(f64::INFINITY).is_none());
        assert!(Humidity::from_reading(f64::NAN).is_none());
    }

    #[test]
    fn display_has_percent_sign() {
        assert_eq!(format!("{}", Humidity::new(60).unwrap()), "60%");
    }

    #[test]
    fn serde_round_trip_validates() {
        let h: Humidity = serde_json::from_str("65").expect("deserialize");
        assert_eq!(serde_json::to_string(&h).unwrap(), "65");
        assert!(serde_json::from_str::<Humidity>("101").is_err());
    }
}
