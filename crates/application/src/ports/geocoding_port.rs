//! Geocoding service port
//!
//! Defines the interface for resolving user input to a location.

use async_trait::async_trait;
use domain::{LocationRecord, SearchQuery};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for location resolution
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeocodingPort: Send + Sync {
    /// Resolve a city and/or postal code to a location
    ///
    /// Fails with `ApplicationError::InvalidInput` if the query is empty and
    /// with `ApplicationError::NotFound` if nothing matched.
    async fn resolve(&self, query: &SearchQuery) -> Result<LocationRecord, ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn GeocodingPort) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn GeocodingPort>();
    }
}
