//! Infrastructure layer - Adapters for external systems
//!
//! Implements the application ports on top of the Nominatim and Open-Meteo
//! clients, and owns configuration loading and log setup.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::*;
pub use config::AppConfig;
pub use telemetry::{TelemetryConfig, TelemetryError, init_telemetry};
