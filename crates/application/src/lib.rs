//! Application layer - Use cases and orchestration
//!
//! Contains the fetch-and-normalize use case, daily forecast aggregation,
//! the dashboard session with request supersession, the theme settings
//! object, and the ports adapters implement.

pub mod error;
pub mod ports;
pub mod services;

pub use error::{ApplicationError, ErrorKind};
pub use ports::*;
pub use services::*;
