//! Application-level errors

use thiserror::Error;

/// Errors that can end a weather search
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// No city and no postal code given
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// An external service answered with a non-success status
    #[error("Upstream error: {0}")]
    UpstreamError(String),

    /// Geocoding returned no candidates
    #[error("Not found: {0}")]
    NotFound(String),

    /// Resolved location lacks usable coordinates
    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    /// A search step did not finish in time
    #[error("{step} timed out after {timeout_secs} seconds")]
    Timeout {
        /// Name of the step that timed out
        step: &'static str,
        /// The timeout duration in seconds
        timeout_secs: u64,
    },

    /// External service could not be reached
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_message_names_step() {
        let err = ApplicationError::Timeout {
            step: "geocoding",
            timeout_secs: 15,
        };
        assert_eq!(err.to_string(), "geocoding timed out after 15 seconds");
    }

    #[test]
    fn not_found_message() {
        let err = ApplicationError::NotFound("Atlantis".to_string());
        assert_eq!(err.to_string(), "Not found: Atlantis");
    }

    #[test]
    fn upstream_message() {
        let err = ApplicationError::UpstreamError("HTTP 503".to_string());
        assert_eq!(err.to_string(), "Upstream error: HTTP 503");
    }
}
