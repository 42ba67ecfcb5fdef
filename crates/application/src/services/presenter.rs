//! Display composition
//!
//! Turns the records of a finished search into the four display fields.

use domain::{LocationRecord, WeatherIcon, WeatherRecord};
use serde::Serialize;

/// Text shown when a field has no value
pub const PLACEHOLDER: &str = "-";

/// Contents of the display fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayState {
    /// "City, State, Country" or the placeholder
    pub location: String,
    /// "<value> °C" or the placeholder
    pub temperature: String,
    /// Icon for the weather code, `None` clears the icon field
    pub icon: Option<WeatherIcon>,
    /// Description for the weather code, empty if no code was reported
    pub description: String,
}

impl DisplayState {
    /// Fallback shown after a failed search
    ///
    /// All four fields are reset together.
    #[must_use]
    pub fn placeholder() -> Self {
        Self {
            location: PLACEHOLDER.to_string(),
            temperature: PLACEHOLDER.to_string(),
            icon: None,
            description: String::new(),
        }
    }

    /// Compose the display for a successful search
    #[must_use]
    pub fn from_records(location: &LocationRecord, weather: &WeatherRecord) -> Self {
        let classification = weather.classification();

        Self {
            location: format_location(location),
            temperature: format_temperature(weather.temperature()),
            icon: classification.map(|c| c.icon),
            description: classification
                .map(|c| c.description.to_string())
                .unwrap_or_default(),
        }
    }

    /// HTML markup for the icon field, empty if there is no icon
    #[must_use]
    pub fn icon_markup(&self) -> String {
        self.icon.map(|icon| icon.markup()).unwrap_or_default()
    }
}

/// Join city, state and country, skipping absent parts
#[must_use]
pub fn format_location(location: &LocationRecord) -> String {
    let parts: Vec<&str> = [
        location.city_name(),
        location.state_name(),
        location.country_name(),
    ]
    .into_iter()
    .flatten()
    .collect();

    if parts.is_empty() {
        PLACEHOLDER.to_string()
    } else {
        parts.join(", ")
    }
}

/// Format a temperature as "<value> °C"
#[must_use]
pub fn format_temperature(temperature: Option<f64>) -> String {
    match temperature {
        // -0.0 would print as "-0"
        Some(t) if t == 0.0 => "0 °C".to_string(),
        Some(t) => format!("{t} °C"),
        None => PLACEHOLDER.to_string(),
    }
}
