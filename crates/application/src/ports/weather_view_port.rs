//! Presentation port
//!
//! The search service writes display fields through this trait; it never
//! owns how or where they are shown.

#[cfg(test)]
use mockall::automock;

use crate::services::DisplayState;

/// Output surface for the location, temperature, icon and description fields
#[cfg_attr(test, automock)]
pub trait WeatherView: Send + Sync {
    /// Replace all display fields with `display`
    fn render(&self, display: &DisplayState);
}
