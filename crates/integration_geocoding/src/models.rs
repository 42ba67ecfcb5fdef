//! Raw Nominatim response models

use domain::{LocationRecord, PlaceNames};
use serde::{Deserialize, Deserializer};

/// One candidate of a `/search` response
///
/// Every field is read on its own. A missing or mistyped field is absent.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct NominatimCandidate {
    #[serde(default, deserialize_with = "lenient_coordinate")]
    lat: Option<f64>,
    #[serde(default, deserialize_with = "lenient_coordinate")]
    lon: Option<f64>,
    #[serde(default, deserialize_with = "lenient_address")]
    address: Option<NominatimAddress>,
}

/// Address breakdown requested with `addressdetails=1`
#[derive(Debug, Default, Deserialize)]
pub(crate) struct NominatimAddress {
    #[serde(default, deserialize_with = "lenient_text")]
    city: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    town: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    village: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    county: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    state: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    country: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    postcode: Option<String>,
}

impl NominatimCandidate {
    /// Read a candidate from one element of the response array
    ///
    /// Anything but a JSON object yields a candidate with every field absent.
    pub(crate) fn from_value(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Object(_) => serde_json::from_value(value).unwrap_or_default(),
            _ => Self::default(),
        }
    }

    /// Convert into a location record
    ///
    /// `requested_postal_code` fills in the postal code when the address
    /// breakdown has none.
    pub(crate) fn into_location_record(self, requested_postal_code: Option<&str>) -> LocationRecord {
        let address = self.address.unwrap_or_default();

        let city = [address.city, address.town, address.village, address.county]
            .into_iter()
            .find_map(present);

        let postal_code = present(address.postcode).or_else(|| {
            requested_postal_code
                .filter(|p| !p.is_empty())
                .map(str::to_string)
        });

        LocationRecord::new(
            self.lat,
            self.lon,
            PlaceNames {
                city,
                state: present(address.state),
                country: present(address.country),
                postal_code,
            },
        )
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Accept a coordinate given as numeric string or JSON number
///
/// Unparsable values become `None` instead of failing the whole response.
fn lenient_coordinate<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
        serde_json::Value::Number(n) => n.as_f64(),
        _ => None,
    })
    .filter(|f| f.is_finite()))
}

/// Accept a place name given as string or JSON number
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }))
}

fn lenient_address<'de, D>(deserializer: D) -> Result<Option<NominatimAddress>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value
        .filter(serde_json::Value::is_object)
        .and_then(|v| serde_json::from_value(v).ok()))
}
