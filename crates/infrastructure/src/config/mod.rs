//! Application configuration
//!
//! Layered with the `config` crate: serde defaults, then an optional
//! `wetterblick.toml`, then `WETTERBLICK_<SECTION>__<KEY>` environment
//! variables.

use std::{collections::HashMap, path::Path};

use application::SearchConfig;
use integration_geocoding::NominatimConfig;
use integration_weather::WeatherConfig;
use serde::{Deserialize, Serialize};

use crate::telemetry::TelemetryConfig;

/// Config file looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "wetterblick";

/// Prefix of configuration environment variables
pub const ENV_PREFIX: &str = "WETTERBLICK";

/// Root configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Nominatim client settings
    #[serde(default)]
    pub geocoding: NominatimConfig,

    /// Open-Meteo client settings
    #[serde(default)]
    pub weather: WeatherConfig,

    /// Search orchestration settings
    #[serde(default)]
    pub search: SearchConfig,

    /// Log output settings
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from file and environment
    ///
    /// With `path`, that file must exist. Without it, `wetterblick.toml` in
    /// the working directory is read if present.
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be read or a value has the wrong type.
    pub fn load(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        Self::load_with_env(path, None)
    }

    /// Load configuration with an explicit environment map
    ///
    /// `None` reads the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be read or a value has the wrong type.
    pub fn load_with_env(
        path: Option<&Path>,
        env: Option<HashMap<String, String>>,
    ) -> Result<Self, config::ConfigError> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let config = config::Config::builder()
            .add_source(file)
            // e.g. WETTERBLICK_SEARCH__TIMEOUT_SECS=5
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(env),
            )
            .build()?;

        config.try_deserialize()
    }
}
