//! City name value object
//!
//! The free-text search query a user types to look up weather.
//!
//! # Examples
//!
//! ```
//! use domain::CityName;
//!
//! let city = CityName::new("  Paris ").unwrap();
//! assert_eq!(city.as_str(), "Paris");
//!
//! // Too short to trigger a search
//! assert!(CityName::new("P").is_err());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A trimmed city name long enough to be searched for
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CityName(String);

impl CityName {
    /// Minimum number of characters before a search is triggered
    pub const MIN_LEN: usize = 2;

    /// Maximum accepted length in characters
    pub const MAX_LEN: usize = 100;

    /// Create a new city name, trimming surrounding whitespace
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCityName` if the trimmed input is shorter
    /// than [`Self::MIN_LEN`] or longer than [`Self::MAX_LEN`] characters.
    pub fn new(name: impl AsRef<str>) -> Result<Self, DomainError> {
        let trimmed = name.as_ref().trim();
        let len = trimmed.chars().count();

        if len < Self::MIN_LEN {
            return Err(DomainError::InvalidCityName(format!(
                "'{trimmed}' is shorter than {} characters",
                Self::MIN_LEN
            )));
        }
        if len > Self::MAX_LEN {
            return Err(DomainError::InvalidCityName(format!(
                "name is longer than {} characters",
                Self::MAX_LEN
            )));
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Get the city name as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for CityName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CityName> for String {
    fn from(city: CityName) -> Self {
        city.0
    }
}

impl std::str::FromStr for CityName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_whitespace() {
        let city = CityName::new("  Tokyo\n").unwrap();
        assert_eq!(city.as_str(), "Tokyo");
    }

    #[test]
    fn rejects_empty() {
        assert!(CityName::new("").is_err());
        assert!(CityName::new("   ").is_err());
    }

    #[test]
    fn rejects_single_character() {
        let err = CityName::new("L").unwrap_err();
        assert!(matches!(err, DomainError::InvalidCityName(_)));
    }

    #[test]
    fn accepts_two_characters() {
        assert!(CityName::new("Ay").is_ok());
    }

    #[test]
    fn counts_characters_not_bytes() {
        // One character, two bytes
        assert!(CityName::new("é").is_err());
        assert!(CityName::new("Łódź").is_ok());
    }

    #[test]
    fn rejects_overlong_names() {
        let long = "a".repeat(CityName::MAX_LEN + 1);
        assert!(CityName::new(long).is_err());
    }

    #[test]
    fn display_and_parse() {
        let city: CityName = "London".parse().unwrap();
        assert_eq!(city.to_string(), "London");
    }

    #[test]
    fn serde_validates() {
        let city: CityName = serde_json::from_str("\"Berlin\"").unwrap();
        assert_eq!(city.as_str(), "Berlin");
        assert!(serde_json::from_str::<CityName>("\"B\"").is_err());
        assert_eq!(serde_json::to_string(&city).unwrap(), "\"Berlin\"");
    }
}
