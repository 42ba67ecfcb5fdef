//! Geocoding error types

use thiserror::Error;

/// Errors that can occur during geocoding
#[derive(Debug, Error)]
pub enum GeocodingError {
    /// Neither a city nor a postal code was given
    #[error("No city or postal code given")]
    InvalidInput,

    /// Geocoding service answered with a non-success status
    #[error("Geocoding service returned HTTP {status}")]
    UpstreamError {
        /// HTTP status code
        status: u16,
    },

    /// No candidate matched the query
    #[error("Location not found: {0}")]
    NotFound(String),

    /// Connection to geocoding service failed
    #[error("Geocoding connection failed: {0}")]
    ConnectionFailed(String),

    /// Failed to parse geocoding response
    #[error("Geocoding parse error: {0}")]
    ParseError(String),

    /// Request timeout
    #[error("Geocoding request timed out")]
    Timeout,
}
