//! Domain entities - The weather report and the rules evaluated over it

mod advisory;
mod weather_report;

pub use advisory::Advisory;
pub use weather_report::{CurrentConditions, DayForecast, FORECAST_DAYS, WeatherData};
