//! Terminal rendering of search results

use application::{DisplayState, WeatherView};
use domain::Classification;
use serde::Serialize;
use tera::{Context, Tera};
use thiserror::Error;
use tracing::error;

/// HTML fragment with the four display fields
const DISPLAY_TEMPLATE: &str = r#"<div id="location">{{ location }}</div>
<div id="temperature">{{ temperature }}</div>
<div id="weatherIcon">{{ icon_markup | safe }}</div>
<div id="weatherDescription">{{ description }}</div>"#;

const CLASSIFICATION_TEMPLATE: &str = r#"<div id="weatherIcon">{{ icon_markup | safe }}</div>
<div id="weatherDescription">{{ description }}</div>"#;

/// Error type for output rendering
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Template rendering failed: {0}")]
    Template(#[from] tera::Error),
}

/// Output format for rendered results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Aligned label/value lines
    #[default]
    Text,
    /// One JSON object per result
    Json,
    /// HTML fragment with one element per display field
    Html,
}

/// Writes every rendered display to stdout
#[derive(Debug)]
pub struct TerminalView {
    format: OutputFormat,
}

impl TerminalView {
    pub const fn new(format: OutputFormat) -> Self {
        Self { format }
    }
}

impl WeatherView for TerminalView {
    fn render(&self, display: &DisplayState) {
        match render_to_string(display, self.format) {
            Ok(output) => println!("{output}"),
            Err(e) => error!(error = %e, "Failed to render display"),
        }
    }
}

/// Render the display fields in the given format
pub fn render_to_string(display: &DisplayState, format: OutputFormat) -> Result<String, RenderError> {
    match format {
        OutputFormat::Text => Ok(render_text(display)),
        OutputFormat::Json => Ok(serde_json::to_string(display)?),
        OutputFormat::Html => {
            let mut context = Context::from_serialize(display)?;
            context.insert("icon_markup", &display.icon_markup());
            Ok(Tera::one_off(DISPLAY_TEMPLATE, &context, true)?)
        },
    }
}

fn render_text(display: &DisplayState) -> String {
    let weather = match display.icon {
        Some(icon) if display.description.is_empty() => icon.emoji().to_string(),
        Some(icon) => format!("{} {}", icon.emoji(), display.description),
        None => display.description.clone(),
    };

    format!(
        "Ort:         {}\nTemperatur:  {}\nWetter:      {}",
        display.location, display.temperature, weather
    )
}

#[derive(Serialize)]
struct ClassificationOutput {
    code: i64,
    description: &'static str,
    icon: &'static str,
    asset: String,
}

/// Render one lookup-table entry
pub fn render_classification(
    code: i64,
    classification: Classification,
    format: OutputFormat,
) -> Result<String, RenderError> {
    let icon = classification.icon;
    match format {
        OutputFormat::Text => Ok(format!(
            "{code}: {} {} ({})",
            icon.emoji(),
            classification.description,
            icon.id()
        )),
        OutputFormat::Json => Ok(serde_json::to_string(&ClassificationOutput {
            code,
            description: classification.description,
            icon: icon.id(),
            asset: icon.asset_path(),
        })?),
        OutputFormat::Html => {
            let mut context = Context::new();
            context.insert("icon_markup", &icon.markup());
            context.insert("description", classification.description);
            Ok(Tera::one_off(CLASSIFICATION_TEMPLATE, &context, true)?)
        },
    }
}
