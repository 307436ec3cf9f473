//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// City name is empty or too short to search for
    #[error("Invalid city name: {0}")]
    InvalidCityName(String),

    /// Unrecognised theme name
    #[error("Invalid theme: {0}")]
    InvalidTheme(String),
}
