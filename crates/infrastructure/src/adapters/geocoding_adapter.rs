//! Geocoding adapter - Implements GeocodingPort using integration_geocoding

use application::{error::ApplicationError, ports::GeocodingPort};
use async_trait::async_trait;
use domain::{LocationRecord, SearchQuery};
use integration_geocoding::{GeocodingClient, GeocodingError, NominatimClient, NominatimConfig};
use tracing::{debug, instrument};

/// Adapter for location resolution using Nominatim
pub struct GeocodingAdapter {
    client: NominatimClient,
    timeout_secs: u64,
}

impl std::fmt::Debug for GeocodingAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeocodingAdapter")
            .field("client", &"NominatimClient")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl GeocodingAdapter {
    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: &NominatimConfig) -> Result<Self, ApplicationError> {
        let client =
            NominatimClient::new(config).map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self {
            client,
            timeout_secs: config.timeout_secs,
        })
    }

    /// Create a new adapter with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new() -> Result<Self, ApplicationError> {
        Self::with_config(&NominatimConfig::default())
    }

    /// Map integration geocoding error to application error
    fn map_error(&self, err: GeocodingError) -> ApplicationError {
        match err {
            GeocodingError::InvalidInput => ApplicationError::InvalidInput(err.to_string()),
            GeocodingError::UpstreamError { .. } => {
                ApplicationError::UpstreamError(err.to_string())
            },
            GeocodingError::NotFound(query) => ApplicationError::NotFound(query),
            GeocodingError::ConnectionFailed(e) => ApplicationError::ExternalService(e),
            GeocodingError::ParseError(e) => ApplicationError::Internal(e),
            GeocodingError::Timeout => ApplicationError::Timeout {
                step: "geocoding",
                timeout_secs: self.timeout_secs,
            },
        }
    }
}

#[async_trait]
impl GeocodingPort for GeocodingAdapter {
    #[instrument(skip(self))]
    async fn resolve(&self, query: &SearchQuery) -> Result<LocationRecord, ApplicationError> {
        let result = self
            .client
            .resolve(
                query.city().unwrap_or_default(),
                query.postal_code().unwrap_or_default(),
            )
            .await
            .map_err(|e| self.map_error(e));

        if let Err(e) = &result {
            debug!(error = %e, "Failed to resolve location");
        }

        result
    }
}
