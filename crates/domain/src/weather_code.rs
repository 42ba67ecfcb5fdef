//! WMO weather code lookup
//!
//! Maps the integer codes reported by Open-Meteo to a German description
//! and one of seven icon categories. Every integer has an entry; codes
//! outside the WMO table fall back to "Unbekannt" and the unknown icon.
//!
//! See: <https://open-meteo.com/en/docs> for the WMO code reference

use serde::{Deserialize, Serialize};
use std::fmt;

/// Description used for codes outside the table
pub const UNKNOWN_DESCRIPTION: &str = "Unbekannt";

/// Icon category derived from a WMO weather code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherIcon {
    /// Clear sky (WMO 0)
    Clear,
    /// Mainly clear to overcast (WMO 1-3)
    PartlyCloudy,
    /// Fog (WMO 45, 48)
    Fog,
    /// Drizzle, rain and rain showers, including freezing variants
    Rain,
    /// Snowfall, snow grains and snow showers
    Snow,
    /// Thunderstorm with or without hail (WMO 95, 96, 99)
    Thunderstorm,
    /// Any code not covered above
    Unknown,
}

impl WeatherIcon {
    /// Convert WMO weather code to its icon category
    #[must_use]
    pub const fn from_code(code: i64) -> Self {
        match code {
            0 => Self::Clear,
            1..=3 => Self::PartlyCloudy,
            45 | 48 => Self::Fog,
            51 | 53 | 55 | 56 | 57 | 61 | 63 | 65 | 66 | 67 | 80..=82 => Self::Rain,
            71 | 73 | 75 | 77 | 85 | 86 => Self::Snow,
            95 | 96 | 99 => Self::Thunderstorm,
            _ => Self::Unknown,
        }
    }

    /// Icon identifier, also the asset file stem
    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::Clear => "clear-day",
            Self::PartlyCloudy => "partly-cloudy-day",
            Self::Fog => "fog",
            Self::Rain => "rain",
            Self::Snow => "snow",
            Self::Thunderstorm => "thunderstorms",
            Self::Unknown => "unknown",
        }
    }

    /// Relative path of the SVG asset
    #[must_use]
    pub fn asset_path(&self) -> String {
        format!("icons/{}.svg", self.id())
    }

    /// HTML image markup for the icon display field
    #[must_use]
    pub fn markup(&self) -> String {
        format!(r#"<img src="{}" alt="Wetter Icon">"#, self.asset_path())
    }

    /// Get an emoji representation for terminal output
    #[must_use]
    pub const fn emoji(&self) -> &'static str {
        match self {
            Self::Clear => "☀️",
            Self::PartlyCloudy => "⛅",
            Self::Fog => "🌫️",
            Self::Rain => "🌧️",
            Self::Snow => "❄️",
            Self::Thunderstorm => "⛈️",
            Self::Unknown => "❓",
        }
    }
}

impl fmt::Display for WeatherIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// German description of a WMO weather code
#[must_use]
pub const fn describe(code: i64) -> &'static str {
    match code {
        0 => "Klarer Himmel",
        1 => "Leicht bewölkt",
        2 => "Teilweise bewölkt",
        3 => "Bewölkt",
        45 => "Nebel",
        48 => "Ablagerungsnebel",
        51 => "Leichter Nieselregen",
        53 => "Mäßiger Nieselregen",
        55 => "Starker Nieselregen",
        56 => "Leichter gefrierender Nieselregen",
        57 => "Starker gefrierender Nieselregen",
        61 => "Leichter Regen",
        63 => "Mäßiger Regen",
        65 => "Starker Regen",
        66 => "Leichter gefrierender Regen",
        67 => "Starker gefrierender Regen",
        71 => "Leichter Schneefall",
        73 => "Mäßiger Schneefall",
        75 => "Starker Schneefall",
        77 => "Schneeregen",
        80 => "Leichte Regenschauer",
        81 => "Mäßige Regenschauer",
        82 => "Starke Regenschauer",
        85 => "Leichte Schneeschauer",
        86 => "Starke Schneeschauer",
        95 => "Gewitter",
        96 => "Gewitter mit Hagel",
        99 => "Gewitter mit starkem Hagel",
        _ => UNKNOWN_DESCRIPTION,
    }
}

/// Description and icon for one weather code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    /// Human-readable description (German)
    pub description: &'static str,
    /// Icon category
    pub icon: WeatherIcon,
}

/// Look up the description and icon for a weather code
#[must_use]
pub const fn classify(code: i64) -> Classification {
    Classification {
        description: describe(code),
        icon: WeatherIcon::from_code(code),
    }
}
