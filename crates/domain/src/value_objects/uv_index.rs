//! UV index estimate
//!
//! The provider's free tier has no UV data, so the index is estimated from
//! the day's high temperature and cloud cover using a fixed four-tier table.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Estimated UV index
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UvIndex(u8);

impl UvIndex {
    /// Index at or above which the high-UV advisory is shown
    pub const HIGH_THRESHOLD: u8 = 7;

    /// Estimate the UV index from a reference temperature (°C) and cloud cover (%)
    ///
    /// | high temp | cloud cover | index |
    /// |-----------|-------------|-------|
    /// | ≥ 25      | ≤ 20        | 8     |
    /// | ≥ 15      | ≤ 50        | 6     |
    /// | ≥ 10      | any         | 4     |
    /// | otherwise |             | 2     |
    ///
    /// Unknown (not a default tier) if either input is unknown.
    #[must_use]
    pub fn estimate(high_temp: Option<f64>, cloud_cover: Option<f64>) -> Option<Self> {
        let temp = high_temp.filter(|t| t.is_finite())?;
        let clouds = cloud_cover.filter(|c| c.is_finite())?;

        let index = if temp >= 25.0 && clouds <= 20.0 {
            8
        } else if temp >= 15.0 && clouds <= 50.0 {
            6
        } else if temp >= 10.0 {
            4
        } else {
            2
        };
        Some(Self(index))
    }

    /// Get the index value
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Whether this index warrants a high-UV advisory
    #[must_use]
    pub const fn is_high(self) -> bool {
        self.0 >= Self::HIGH_THRESHOLD
    }
}

impl fmt::Display for UvIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", f64::from(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn estimate(temp: f64, clouds: f64) -> u8 {
        UvIndex::estimate(Some(temp), Some(clouds)).unwrap().value()
    }

    #[test]
    fn top_tier_boundary() {
        assert_eq!(estimate(25.0, 20.0), 8);
        assert_eq!(estimate(24.9, 20.0), 6);
        assert_eq!(estimate(25.0, 21.0), 6);
    }

    #[test]
    fn second_tier_boundary() {
        assert_eq!(estimate(15.0, 50.0), 6);
        assert_eq!(estimate(15.0, 51.0), 4);
        assert_eq!(estimate(14.9, 0.0), 4);
    }

    #[test]
    fn third_tier_ignores_clouds() {
        assert_eq!(estimate(10.0, 100.0), 4);
        assert_eq!(estimate(30.0, 90.0), 4);
    }

    #[test]
    fn bottom_tier() {
        assert_eq!(estimate(9.9, 0.0), 2);
        assert_eq!(estimate(-15.0, 100.0), 2);
    }

    #[test]
    fn unknown_inputs_give_unknown() {
        assert!(UvIndex::estimate(None, Some(10.0)).is_none());
        assert!(UvIndex::estimate(Some(30.0), None).is_none());
        assert!(UvIndex::estimate(Some(f64::NAN), Some(10.0)).is_none());
    }

    #[test]
    fn high_threshold() {
        assert!(UvIndex(8).is_high());
        assert!(UvIndex(7).is_high());
        assert!(!UvIndex(6).is_high());
    }

    #[test]
    fn displays_one_decimal() {
        assert_eq!(UvIndex(8).to_string(), "8.0");
    }
}
