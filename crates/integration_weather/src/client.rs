//! Open-Meteo weather client
//!
//! HTTP client for the Open-Meteo Weather API.

use std::time::Duration;

use async_trait::async_trait;
use domain::{DomainError, GeoLocation, LocationRecord, WeatherRecord};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::weather_record_from_body;

/// Weather client errors
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Location lacks coordinates or they are out of range
    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(#[from] DomainError),

    /// Weather service answered with a non-success status
    #[error("Weather service returned HTTP {status}")]
    UpstreamError {
        /// HTTP status code
        status: u16,
    },

    /// Connection to the weather service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Failed to parse response from weather service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Request timeout
    #[error("Weather request timed out")]
    Timeout,
}

/// Weather service configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Open-Meteo API base URL (default: <https://api.open-meteo.com/v1>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds (default: 10)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.open-meteo.com/v1".to_string()
}

const fn default_timeout() -> u64 {
    10
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

/// Weather client trait for fetching weather data
#[async_trait]
pub trait WeatherClient: Send + Sync {
    /// Get current weather for a resolved location
    ///
    /// Fails with `WeatherError::InvalidCoordinates` before any request is
    /// sent if the location lacks usable coordinates.
    async fn fetch_current(
        &self,
        location: &LocationRecord,
    ) -> Result<WeatherRecord, WeatherError>;
}

/// Open-Meteo HTTP client implementation
#[derive(Debug)]
pub struct OpenMeteoClient {
    client: Client,
    config: WeatherConfig,
}

impl OpenMeteoClient {
    /// Create a new Open-Meteo client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: WeatherConfig) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| WeatherError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Create a new client with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_defaults() -> Result<Self, WeatherError> {
        Self::new(WeatherConfig::default())
    }

    fn forecast_url(&self) -> String {
        format!("{}/forecast", self.config.base_url.trim_end_matches('/'))
    }

    fn query_params(coordinates: GeoLocation) -> [(&'static str, String); 3] {
        [
            ("current_weather", "true".to_string()),
            ("latitude", coordinates.latitude().to_string()),
            ("longitude", coordinates.longitude().to_string()),
        ]
    }
}

#[async_trait]
impl WeatherClient for OpenMeteoClient {
    #[instrument(skip(self, location), fields(lat = ?location.latitude(), lon = ?location.longitude()))]
    async fn fetch_current(
        &self,
        location: &LocationRecord,
    ) -> Result<WeatherRecord, WeatherError> {
        let coordinates = location.coordinates()?;

        debug!(%coordinates, "Fetching current weather");

        let response = self
            .client
            .get(self.forecast_url())
            .query(&Self::query_params(coordinates))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    WeatherError::Timeout
                } else {
                    WeatherError::ConnectionFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(WeatherError::UpstreamError {
                status: status.as_u16(),
            });
        }

        let body: serde_json::Value = response.json().await.map_err(|e| {
            if e.is_timeout() {
                WeatherError::Timeout
            } else {
                WeatherError::ParseError(e.to_string())
            }
        })?;

        let record = weather_record_from_body(body);
        debug!(
            temperature = ?record.temperature(),
            weather_code = ?record.weather_code(),
            "Fetched current weather"
        );

        Ok(record)
    }
}
