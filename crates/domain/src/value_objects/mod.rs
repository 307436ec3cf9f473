//! Value Objects - Immutable, identity-less domain primitives

mod city_name;
mod condition_icon;
mod humidity;
pub mod temperature;
mod theme;
mod uv_index;

pub use city_name::CityName;
pub use condition_icon::ConditionIcon;
pub use humidity::{Humidity, InvalidHumidity};
pub use theme::Theme;
pub use uv_index::UvIndex;
