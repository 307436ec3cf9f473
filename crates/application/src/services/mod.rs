//! Application services - Use case implementations

mod dashboard_session;
pub mod forecast_aggregator;
mod settings_service;
mod weather_service;

pub use dashboard_session::{DashboardSession, DashboardState, RequestToken};
pub use forecast_aggregator::aggregate;
pub use settings_service::{SettingsService, ThemeSource};
pub use weather_service::{WeatherService, build_report};
