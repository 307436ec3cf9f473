//! Condition icon value object
//!
//! Maps the provider's weather category (e.g. `"Clouds"`) to a fixed glyph.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Icon shown for a weather condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ConditionIcon {
    /// Thunderstorm
    Thunderstorm,
    /// Rain or drizzle
    Rain,
    /// Snow
    Snow,
    /// Clear sky
    Sun,
    /// Partly cloudy, also the fallback for unmatched categories
    #[default]
    PartlyCloudy,
    /// Mist, fog or haze
    Fog,
    /// No data at all (placeholder days)
    Unknown,
}

impl ConditionIcon {
    /// Look up the icon for a provider weather category
    ///
    /// Matching is exact and case-sensitive. Anything not in the table falls
    /// back to [`Self::PartlyCloudy`]. A missing category is treated the same
    /// way rather than as clear sky, so an observation without a category
    /// never shows the sun glyph.
    #[must_use]
    pub fn from_category(category: Option<&str>) -> Self {
        match category {
            Some("Thunderstorm") => Self::Thunderstorm,
            Some("Drizzle" | "Rain") => Self::Rain,
            Some("Snow") => Self::Snow,
            Some("Clear") => Self::Sun,
            Some("Clouds") => Self::PartlyCloudy,
            Some("Mist" | "Fog" | "Haze") => Self::Fog,
            _ => Self::PartlyCloudy,
        }
    }

    /// Emoji glyph for display
    #[must_use]
    pub const fn glyph(&self) -> &'static str {
        match self {
            Self::Thunderstorm => "⛈️",
            Self::Rain => "🌧️",
            Self::Snow => "🌨️",
            Self::Sun => "☀️",
            Self::PartlyCloudy => "🌤️",
            Self::Fog => "🌫️",
            Self::Unknown => "❔",
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Thunderstorm => "Thunderstorm",
            Self::Rain => "Rain",
            Self::Snow => "Snow",
            Self::Sun => "Clear",
            Self::PartlyCloudy => "Partly cloudy",
            Self::Fog => "Fog",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for ConditionIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}
