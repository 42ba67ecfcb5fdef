//! User search input

use serde::{Deserialize, Serialize};

/// City and postal code as entered by the user
///
/// Inputs are trimmed; a blank input is stored as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    city: Option<String>,
    postal_code: Option<String>,
}

impl SearchQuery {
    /// Build a query from raw input field values
    #[must_use]
    pub fn from_inputs(city: &str, postal_code: &str) -> Self {
        Self {
            city: non_blank(city),
            postal_code: non_blank(postal_code),
        }
    }

    #[must_use]
    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    #[must_use]
    pub fn postal_code(&self) -> Option<&str> {
        self.postal_code.as_deref()
    }

    /// True if neither a city nor a postal code was given
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.city.is_none() && self.postal_code.is_none()
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
