//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod toml_settings_store;
mod weather_adapter;

pub use toml_settings_store::TomlSettingsStore;
pub use weather_adapter::WeatherAdapter;
