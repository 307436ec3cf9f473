//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod settings_store;
mod weather_port;

#[cfg(test)]
pub use settings_store::MockSettingsStorePort;
pub use settings_store::SettingsStorePort;
#[cfg(test)]
pub use weather_port::MockWeatherPort;
pub use weather_port::{CurrentObservation, ForecastSample, ForecastSeries, WeatherPort};
