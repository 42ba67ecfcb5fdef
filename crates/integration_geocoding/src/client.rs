//! Nominatim geocoding client
//!
//! Converts a city name and/or postal code to a [`LocationRecord`] using
//! the Nominatim `/search` endpoint with address details enabled.

use std::time::Duration;

use async_trait::async_trait;
use domain::LocationRecord;
use reqwest::Client;
use tracing::{debug, instrument};

use crate::config::NominatimConfig;
use crate::error::GeocodingError;
use crate::models::NominatimCandidate;

/// Query sent to the geocoding service
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeocodingQuery {
    /// Free-text search for a city name
    City(String),
    /// Structured search led by a postal code, optionally narrowed by city
    PostalCode {
        /// Postal code as entered
        postal_code: String,
        /// City name, if one was entered too
        city: Option<String>,
    },
}

impl GeocodingQuery {
    /// Build a query from user input
    ///
    /// A postal code takes precedence and is combined with the city.
    ///
    /// # Errors
    ///
    /// Returns `GeocodingError::InvalidInput` if both inputs are blank.
    pub fn from_inputs(city: &str, postal_code: &str) -> Result<Self, GeocodingError> {
        let city = city.trim();
        let postal_code = postal_code.trim();

        match (city.is_empty(), postal_code.is_empty()) {
            (true, true) => Err(GeocodingError::InvalidInput),
            (_, false) => Ok(Self::PostalCode {
                postal_code: postal_code.to_string(),
                city: (!city.is_empty()).then(|| city.to_string()),
            }),
            (false, true) => Ok(Self::City(city.to_string())),
        }
    }

    /// Text for the `q` parameter
    #[must_use]
    pub fn text(&self) -> String {
        match self {
            Self::City(city) => city.clone(),
            Self::PostalCode { postal_code, city } => match city {
                Some(city) => format!("{postal_code} {city}").trim().to_string(),
                None => postal_code.clone(),
            },
        }
    }

    /// Postal code the user asked for, if any
    #[must_use]
    pub fn postal_code(&self) -> Option<&str> {
        match self {
            Self::City(_) => None,
            Self::PostalCode { postal_code, .. } => Some(postal_code),
        }
    }
}

/// Trait for geocoding clients
#[async_trait]
pub trait GeocodingClient: Send + Sync {
    /// Resolve a city and/or postal code to a location
    ///
    /// Empty strings mean "not given".
    async fn resolve(
        &self,
        city: &str,
        postal_code: &str,
    ) -> Result<LocationRecord, GeocodingError>;
}

/// Nominatim-based geocoding client
#[derive(Debug)]
pub struct NominatimClient {
    client: Client,
    config: NominatimConfig,
}

impl NominatimClient {
    /// Create a new Nominatim geocoding client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &NominatimConfig) -> Result<Self, GeocodingError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| GeocodingError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Create a new client with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_defaults() -> Result<Self, GeocodingError> {
        Self::new(&NominatimConfig::default())
    }

    fn search_url(&self) -> String {
        format!("{}/search", self.config.base_url.trim_end_matches('/'))
    }

    fn query_params(&self, query: &GeocodingQuery) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("format", "json".to_string()),
            ("limit", "1".to_string()),
            ("addressdetails", "1".to_string()),
            ("q", query.text()),
        ];

        if !self.config.accept_language.is_empty() {
            params.push(("accept-language", self.config.accept_language.clone()));
        }

        params
    }
}

fn map_transport_error(e: &reqwest::Error) -> GeocodingError {
    if e.is_timeout() {
        GeocodingError::Timeout
    } else {
        GeocodingError::ConnectionFailed(e.to_string())
    }
}

#[async_trait]
impl GeocodingClient for NominatimClient {
    #[instrument(skip(self))]
    async fn resolve(
        &self,
        city: &str,
        postal_code: &str,
    ) -> Result<LocationRecord, GeocodingError> {
        let query = GeocodingQuery::from_inputs(city, postal_code)?;

        debug!(q = %query.text(), "Geocoding location");

        let response = self
            .client
            .get(self.search_url())
            .query(&self.query_params(&query))
            .send()
            .await
            .map_err(|e| map_transport_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GeocodingError::UpstreamError {
                status: status.as_u16(),
            });
        }

        let body: serde_json::Value = response.json().await.map_err(|e| {
            if e.is_timeout() {
                GeocodingError::Timeout
            } else {
                GeocodingError::ParseError(e.to_string())
            }
        })?;

        let first = match body {
            serde_json::Value::Array(candidates) => candidates.into_iter().next(),
            _ => None,
        }
        .ok_or_else(|| GeocodingError::NotFound(query.text()))?;

        let record =
            NominatimCandidate::from_value(first).into_location_record(query.postal_code());
        debug!(
            lat = ?record.latitude(),
            lon = ?record.longitude(),
            city = ?record.city_name(),
            "Geocoded location"
        );

        Ok(record)
    }
}
