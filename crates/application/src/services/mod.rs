//! Application services - Use case implementations

mod presenter;
mod weather_search_service;

pub use presenter::{DisplayState, PLACEHOLDER, format_location, format_temperature};
pub use weather_search_service::{SearchConfig, SearchOutcome, SearchState, WeatherSearchService};
