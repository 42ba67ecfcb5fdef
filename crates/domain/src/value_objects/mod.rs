//! Value Objects - Immutable, identity-less domain primitives

mod geo_location;
mod location_record;
mod search_query;
mod weather_record;

pub use geo_location::GeoLocation;
pub use location_record::{LocationRecord, PlaceNames};
pub use search_query::SearchQuery;
pub use weather_record::WeatherRecord;
