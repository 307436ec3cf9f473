//! OpenWeatherMap weather integration
//!
//! Client for the free tier of the OpenWeatherMap API (<https://openweathermap.org/api>).
//! Only the `/weather` (current conditions) and `/forecast` (5 day / 3 hour)
//! endpoints are used; both require an API key.

pub mod client;
mod models;

pub use client::{OpenWeatherClient, WeatherClient, WeatherConfig, WeatherError};
pub use models::{
    CityInfo, CloudCover, CurrentResponse, ForecastItem, ForecastResponse, MainReadings,
    SunTimes, WeatherTag,
};
