//! Open-Meteo response extraction
//!
//! The body is kept as untyped JSON so that it can be stored verbatim in the
//! weather record; only the `current_weather` fields are read from it.

use chrono::{DateTime, TimeZone, Utc};
use domain::WeatherRecord;
use serde_json::Value;

/// Build a weather record from a decoded `/forecast?current_weather=true` body
///
/// Missing or mistyped fields stay absent; zero readings are kept.
pub(crate) fn weather_record_from_body(body: Value) -> WeatherRecord {
    let current = body.get("current_weather");

    let temperature = current
        .and_then(|cw| cw.get("temperature"))
        .and_then(Value::as_f64);

    let weather_code = current
        .and_then(|cw| cw.get("weathercode"))
        .and_then(integer_code);

    let observed_at = current
        .and_then(|cw| cw.get("time"))
        .and_then(Value::as_str)
        .and_then(parse_datetime);

    WeatherRecord::new(temperature, weather_code, observed_at, body)
}

/// Read a weather code given as integer or as integral float
#[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
fn integer_code(value: &Value) -> Option<i64> {
    value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.fract() == 0.0 && f.abs() < 1e15)
            .map(|f| f as i64)
    })
}

/// Parse an Open-Meteo timestamp (GMT unless a timezone was requested)
fn parse_datetime(s: &str) -> Option<DateTime<Utc>> {
    // ISO 8601 without seconds (2026-02-05T14:00)
    if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M") {
        return Some(Utc.from_utc_datetime(&dt));
    }

    if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        return Some(Utc.from_utc_datetime(&dt));
    }

    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}
