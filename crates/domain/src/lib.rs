//! Domain layer for Wetterblick
//!
//! Contains the value objects produced by a weather search and the
//! weather code lookup table. This layer performs no I/O.

pub mod errors;
pub mod value_objects;
pub mod weather_code;

pub use errors::DomainError;
pub use value_objects::*;
pub use weather_code::{Classification, WeatherIcon, classify, describe};
