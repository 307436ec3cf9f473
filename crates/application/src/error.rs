//! Application-level errors

use domain::DomainError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// No provider credential is configured
    #[error("No weather API key configured")]
    MissingCredentials,

    /// The provider does not know the city
    #[error("City not found: {0}")]
    CityNotFound(String),

    /// The provider rejected the credential
    #[error("Invalid weather API key")]
    InvalidCredentials,

    /// The provider could not be reached
    #[error("Network unreachable: {0}")]
    NetworkUnreachable(String),

    /// The provider answered with a body that could not be decoded
    #[error("Malformed provider response: {0}")]
    MalformedResponse(String),

    /// Any other provider failure, carrying the provider's message
    #[error("Weather provider error: {0}")]
    Provider(String),

    /// Settings could not be read or written
    #[error("Storage error: {0}")]
    Storage(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ApplicationError {
    /// Classify this error into the taxonomy shown to users
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingCredentials => ErrorKind::MissingCredentials,
            Self::CityNotFound(_) => ErrorKind::CityNotFound,
            Self::InvalidCredentials => ErrorKind::InvalidCredentials,
            Self::NetworkUnreachable(_) => ErrorKind::NetworkUnreachable,
            Self::Domain(_)
            | Self::MalformedResponse(_)
            | Self::Provider(_)
            | Self::Storage(_)
            | Self::Configuration(_) => ErrorKind::Unknown,
        }
    }

    /// The fixed message for this error's kind
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        self.kind().user_message()
    }
}

/// User-visible failure categories, each with one fixed message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// No API key configured
    MissingCredentials,
    /// Unknown city
    CityNotFound,
    /// API key rejected
    InvalidCredentials,
    /// Provider unreachable
    NetworkUnreachable,
    /// Anything else
    Unknown,
}

impl ErrorKind {
    /// Message shown in place of the dashboard
    #[must_use]
    pub const fn user_message(self) -> &'static str {
        match self {
            Self::MissingCredentials => {
                "No OpenWeatherMap API key is configured. Set OPENWEATHER_API_KEY or pass --api-key."
            },
            Self::CityNotFound => "City not found. Please check the spelling and try again.",
            Self::InvalidCredentials => "The OpenWeatherMap API key was rejected. Please check it.",
            Self::NetworkUnreachable => {
                "Could not reach the weather service. Please check your connection."
            },
            Self::Unknown => "Failed to fetch weather data. Please try again later.",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.user_message())
    }
}
