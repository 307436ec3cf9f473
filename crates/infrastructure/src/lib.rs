//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer: the OpenWeatherMap
//! adapter, the TOML theme store, and configuration loading.

pub mod adapters;
pub mod config;

pub use adapters::*;
pub use config::{AppConfig, DisplayConfig, WeatherAppConfig};
