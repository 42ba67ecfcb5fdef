//! Weather adapter - Implements WeatherPort using integration_weather

use application::{error::ApplicationError, ports::WeatherPort};
use async_trait::async_trait;
use domain::{LocationRecord, WeatherRecord};
use integration_weather::{OpenMeteoClient, WeatherClient, WeatherConfig, WeatherError};
use tracing::{debug, instrument};

/// Adapter for weather services using Open-Meteo API
pub struct WeatherAdapter {
    client: OpenMeteoClient,
    timeout_secs: u64,
}

impl std::fmt::Debug for WeatherAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherAdapter")
            .field("client", &"OpenMeteoClient")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl WeatherAdapter {
    /// Create a new adapter with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new() -> Result<Self, ApplicationError> {
        Self::with_config(WeatherConfig::default())
    }

    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: WeatherConfig) -> Result<Self, ApplicationError> {
        let timeout_secs = config.timeout_secs;
        let client =
            OpenMeteoClient::new(config).map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self {
            client,
            timeout_secs,
        })
    }

    /// Map integration weather error to application error
    fn map_error(&self, err: WeatherError) -> ApplicationError {
        match err {
            WeatherError::InvalidCoordinates(e) => {
                ApplicationError::InvalidCoordinates(e.to_string())
            },
            WeatherError::UpstreamError { .. } => ApplicationError::UpstreamError(err.to_string()),
            WeatherError::ConnectionFailed(e) => ApplicationError::ExternalService(e),
            WeatherError::ParseError(e) => ApplicationError::Internal(e),
            WeatherError::Timeout => ApplicationError::Timeout {
                step: "weather",
                timeout_secs: self.timeout_secs,
            },
        }
    }
}

#[async_trait]
impl WeatherPort for WeatherAdapter {
    #[instrument(skip(self, location), fields(lat = ?location.latitude(), lon = ?location.longitude()))]
    async fn fetch_current(
        &self,
        location: &LocationRecord,
    ) -> Result<WeatherRecord, ApplicationError> {
        let result = self
            .client
            .fetch_current(location)
            .await
            .map_err(|e| self.map_error(e));

        match &result {
            Ok(weather) => {
                debug!(
                    temperature = ?weather.temperature(),
                    weather_code = ?weather.weather_code(),
                    "Retrieved current weather"
                );
            },
            Err(e) => {
                debug!(error = %e, "Failed to get current weather");
            },
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use domain::{DomainError, PlaceNames};

    use super::*;

    fn adapter() -> WeatherAdapter {
        WeatherAdapter::with_config(WeatherConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            timeout_secs: 2,
        })
        .unwrap()
    }

    #[test]
    fn maps_invalid_coordinates() {
        let err = adapter().map_error(WeatherError::InvalidCoordinates(
            DomainError::MissingCoordinates,
        ));
        assert!(matches!(err, ApplicationError::InvalidCoordinates(_)));
    }

    #[test]
    fn maps_upstream_status() {
        let err = adapter().map_error(WeatherError::UpstreamError { status: 500 });
        assert!(matches!(err, ApplicationError::UpstreamError(ref msg) if msg.contains("500")));
    }

    #[test]
    fn maps_timeout_with_configured_duration() {
        let err = adapter().map_error(WeatherError::Timeout);
        assert!(matches!(
            err,
            ApplicationError::Timeout {
                step: "weather",
                timeout_secs: 2
            }
        ));
    }

    #[test]
    fn missing_coordinates_fail_without_server() {
        let location = LocationRecord::new(None, Some(14.3), PlaceNames::default());
        let result = tokio_test::block_on(adapter().fetch_current(&location));
        assert!(matches!(result, Err(ApplicationError::InvalidCoordinates(_))));
    }
}
