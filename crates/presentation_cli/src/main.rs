//! Wetterblick CLI
//!
//! Looks up the current weather for a city and/or postal code.

#![allow(clippy::print_stdout, clippy::print_stderr)]

mod view;

use std::{io::Write, path::PathBuf, sync::Arc};

use anyhow::Context;
use application::{WeatherSearchService, WeatherView};
use clap::{Parser, Subcommand};
use domain::classify;
use infrastructure::{AppConfig, GeocodingAdapter, WeatherAdapter, init_telemetry};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use view::{OutputFormat, TerminalView, render_classification};

/// Wetterblick CLI
#[derive(Parser)]
#[command(name = "wetterblick")]
#[command(author, version, about = "Current weather for a city or postal code", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Configuration file (default: ./wetterblick.toml if present)
    #[arg(short, long, global = true, env = "WETTERBLICK_CONFIG_FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up the current weather once
    ///
    /// Exits with status 1 if the search failed.
    /// Example: wetterblick search --city Linz --plz 4020
    Search {
        /// City name
        #[arg(long, default_value = "")]
        city: String,

        /// Postal code
        #[arg(long, default_value = "")]
        plz: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Read city and postal code from stdin, one search per pair
    ///
    /// Enter "quit" or send EOF to stop.
    Interactive {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Show description and icon for a WMO weather code
    Classify {
        /// Weather code
        #[arg(allow_negative_numbers = true)]
        code: i64,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Print the effective configuration as TOML
    Config,
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn build_service(config: &AppConfig, format: OutputFormat) -> anyhow::Result<WeatherSearchService> {
    let geocoding = GeocodingAdapter::with_config(&config.geocoding)
        .context("Failed to create geocoding client")?;
    let weather = WeatherAdapter::with_config(config.weather.clone())
        .context("Failed to create weather client")?;
    let view: Arc<dyn WeatherView> = Arc::new(TerminalView::new(format));

    Ok(WeatherSearchService::new(
        Arc::new(geocoding),
        Arc::new(weather),
        view,
        config.search.clone(),
    ))
}

fn is_quit(line: &str) -> bool {
    line.trim().eq_ignore_ascii_case("quit")
}

fn prompt(label: &str, format: OutputFormat) {
    if format == OutputFormat::Text {
        eprint!("{label}: ");
        let _ = std::io::stderr().flush();
    }
}

async fn run_interactive(service: &WeatherSearchService, format: OutputFormat) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        prompt("Stadt", format);
        let Some(city) = lines.next_line().await.context("Failed to read city")? else {
            break;
        };
        if is_quit(&city) {
            break;
        }

        prompt("PLZ", format);
        let Some(postal_code) = lines.next_line().await.context("Failed to read postal code")?
        else {
            break;
        };
        if is_quit(&postal_code) {
            break;
        }

        service.submit(&city, &postal_code).await;
    }

    info!("Interactive session ended");
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config =
        AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    // -v overrides the configured filter; RUST_LOG still wins over both
    if cli.verbose > 0 {
        config.telemetry.log_filter = log_filter_from_verbosity(cli.verbose).to_string();
    }
    init_telemetry(&config.telemetry).context("Failed to initialize logging")?;

    match cli.command {
        Commands::Search { city, plz, format } => {
            let service = build_service(&config, format)?;
            let outcome = service.submit(&city, &plz).await;
            if !outcome.is_completed() {
                std::process::exit(1);
            }
        },

        Commands::Interactive { format } => {
            let service = build_service(&config, format)?;
            run_interactive(&service, format).await?;
        },

        Commands::Classify { code, format } => {
            let output = render_classification(code, classify(code), format)
                .context("Failed to render classification")?;
            println!("{output}");
        },

        Commands::Config => {
            let output =
                toml::to_string_pretty(&config).context("Failed to serialize configuration")?;
            print!("{output}");
        },
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_filter_verbosity_zero() {
        assert_eq!(log_filter_from_verbosity(0), "warn");
    }

    #[test]
    fn log_filter_verbosity_one() {
        assert_eq!(log_filter_from_verbosity(1), "info");
    }

    #[test]
    fn log_filter_verbosity_two() {
        assert_eq!(log_filter_from_verbosity(2), "debug");
    }

    #[test]
    fn log_filter_verbosity_three_or_more() {
        assert_eq!(log_filter_from_verbosity(3), "trace");
        assert_eq!(log_filter_from_verbosity(10), "trace");
    }

    #[test]
    fn quit_is_case_insensitive() {
        assert!(is_quit("quit"));
        assert!(is_quit("  QUIT \n"));
        assert!(!is_quit("Quito"));
        assert!(!is_quit(""));
    }

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn default_config_serializes_to_toml() {
        let output = toml::to_string_pretty(&AppConfig::default()).unwrap();
        assert!(output.contains("[geocoding]"));
        assert!(output.contains("[search]"));
        assert!(output.contains("timeout_secs = 15"));
    }

    #[test]
    fn service_builds_from_default_config() {
        let service = build_service(&AppConfig::default(), OutputFormat::Json).unwrap();
        assert_eq!(service.state(), application::SearchState::Idle);
    }
}
