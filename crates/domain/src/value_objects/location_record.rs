//! Resolved location value object

use serde::{Deserialize, Serialize};

use super::GeoLocation;
use crate::errors::DomainError;

/// Administrative names attached to a geocoding match
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceNames {
    /// City, town, village or county name
    pub city: Option<String>,
    /// State or region name
    pub state: Option<String>,
    /// Country name
    pub country: Option<String>,
    /// Postal code
    pub postal_code: Option<String>,
}

/// Result of resolving a city and/or postal code
///
/// Built once per search and replaced wholesale by the next one. When both
/// coordinates are present they stem from the same geocoding match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationRecord {
    latitude: Option<f64>,
    longitude: Option<f64>,
    names: PlaceNames,
}

impl LocationRecord {
    /// Create a location record from a single geocoding match
    #[must_use]
    pub const fn new(latitude: Option<f64>, longitude: Option<f64>, names: PlaceNames) -> Self {
        Self {
            latitude,
            longitude,
            names,
        }
    }

    /// Latitude in degrees, if the match carried one
    #[must_use]
    pub const fn latitude(&self) -> Option<f64> {
        self.latitude
    }

    /// Longitude in degrees, if the match carried one
    #[must_use]
    pub const fn longitude(&self) -> Option<f64> {
        self.longitude
    }

    #[must_use]
    pub fn city_name(&self) -> Option<&str> {
        self.names.city.as_deref()
    }

    #[must_use]
    pub fn state_name(&self) -> Option<&str> {
        self.names.state.as_deref()
    }

    #[must_use]
    pub fn country_name(&self) -> Option<&str> {
        self.names.country.as_deref()
    }

    #[must_use]
    pub fn postal_code(&self) -> Option<&str> {
        self.names.postal_code.as_deref()
    }

    /// Validated coordinates of this location
    ///
    /// # Errors
    ///
    /// Returns `DomainError::MissingCoordinates` if either coordinate is absent
    /// and `DomainError::InvalidCoordinates` if they are out of range.
    pub fn coordinates(&self) -> Result<GeoLocation, DomainError> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => GeoLocation::new(lat, lon),
            _ => Err(DomainError::MissingCoordinates),
        }
    }
}
