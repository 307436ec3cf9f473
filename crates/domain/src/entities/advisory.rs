//! Advisories derived from current conditions

use serde::{Deserialize, Serialize};

use super::CurrentConditions;
use crate::value_objects::UvIndex;

/// A banner shown under the current conditions panel
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Advisory {
    /// Daily average below [`Advisory::COLD_DAY_THRESHOLD_C`]
    ColdDay {
        /// The day's average temperature
        average_temp: f64,
    },
    /// Estimated UV index at or above [`UvIndex::HIGH_THRESHOLD`]
    HighUv {
        /// The estimated index
        index: UvIndex,
    },
    /// Neither advisory applies
    NoAdvisory,
}

impl Advisory {
    /// Average temperature (°C) below which the cold-day advisory is shown
    pub const COLD_DAY_THRESHOLD_C: f64 = 7.0;

    /// Evaluate all advisories; yields [`Advisory::NoAdvisory`] alone when none trigger
    #[must_use]
    pub fn evaluate(current: &CurrentConditions) -> Vec<Self> {
        let mut advisories = Vec::with_capacity(2);

        if let Some(average_temp) = current
            .average_temp
            .filter(|avg| *avg < Self::COLD_DAY_THRESHOLD_C)
        {
            advisories.push(Self::ColdDay { average_temp });
        }
        if let Some(index) = current.uv_index_estimate.filter(|uv| uv.is_high()) {
            advisories.push(Self::HighUv { index });
        }

        if advisories.is_empty() {
            advisories.push(Self::NoAdvisory);
        }
        advisories
    }

    /// User-facing banner text
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::ColdDay { .. } => format!(
                "Today's average temperature is below {:.0}°C. Winter tyres are recommended!",
                Self::COLD_DAY_THRESHOLD_C
            ),
            Self::HighUv { index } => format!(
                "High UV radiation expected today (UV index: {index}). Use sunscreen and wear a hat!"
            ),
            Self::NoAdvisory => "No special advisories for today.".to_string(),
        }
    }

    /// Banner glyph
    #[must_use]
    pub const fn glyph(&self) -> &'static str {
        match self {
            Self::ColdDay { .. } => "❄️",
            Self::HighUv { .. } => "🔆",
            Self::NoAdvisory => "ℹ️",
        }
    }
}
