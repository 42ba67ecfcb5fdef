//! Nominatim geocoding integration
//!
//! Resolves a city name and/or postal code to coordinates and
//! administrative names using [Nominatim/OpenStreetMap](https://nominatim.openstreetmap.org).
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_geocoding::{GeocodingClient, NominatimClient, NominatimConfig};
//!
//! let client = NominatimClient::new(&NominatimConfig::default())?;
//! let location = client.resolve("Linz", "").await?;
//! assert_eq!(location.city_name(), Some("Linz"));
//! ```

mod client;
mod config;
mod error;
mod models;

pub use client::{GeocodingClient, GeocodingQuery, NominatimClient};
pub use config::NominatimConfig;
pub use error::GeocodingError;
