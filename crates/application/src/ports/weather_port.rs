//! Weather service port
//!
//! Defines the interface for current weather retrieval.

use async_trait::async_trait;
use domain::{LocationRecord, WeatherRecord};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for weather operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherPort: Send + Sync {
    /// Get current weather for a resolved location
    ///
    /// Fails with `ApplicationError::InvalidCoordinates` without contacting
    /// the weather service if the location has no usable coordinates.
    async fn fetch_current(
        &self,
        location: &LocationRecord,
    ) -> Result<WeatherRecord, ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn WeatherPort) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn WeatherPort>();
    }
}
