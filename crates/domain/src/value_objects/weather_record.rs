//! Current weather value object

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::weather_code::{Classification, classify};

/// Current weather for one location
///
/// Fields the weather service did not deliver stay `None`; a temperature of
/// zero is a real reading, not a missing one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherRecord {
    temperature: Option<f64>,
    weather_code: Option<i64>,
    observed_at: Option<DateTime<Utc>>,
    raw: serde_json::Value,
}

impl WeatherRecord {
    #[must_use]
    pub const fn new(
        temperature: Option<f64>,
        weather_code: Option<i64>,
        observed_at: Option<DateTime<Utc>>,
        raw: serde_json::Value,
    ) -> Self {
        Self {
            temperature,
            weather_code,
            observed_at,
            raw,
        }
    }

    /// Temperature in Celsius
    #[must_use]
    pub const fn temperature(&self) -> Option<f64> {
        self.temperature
    }

    /// WMO weather code
    #[must_use]
    pub const fn weather_code(&self) -> Option<i64> {
        self.weather_code
    }

    /// Observation time reported by the weather service
    #[must_use]
    pub const fn observed_at(&self) -> Option<DateTime<Utc>> {
        self.observed_at
    }

    /// Full decoded response body, kept for diagnostics
    #[must_use]
    pub const fn raw(&self) -> &serde_json::Value {
        &self.raw
    }

    /// Lookup table entry for the weather code, if one was reported
    #[must_use]
    pub fn classification(&self) -> Option<Classification> {
        self.weather_code.map(classify)
    }
}
