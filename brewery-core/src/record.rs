use serde::{Deserialize, Serialize};

/// One item from the upstream brewery listing.
/// Unknown upstream fields are ignored; everything but the name may be null.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BreweryRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub brewery_type: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub street: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub website_url: Option<String>,
}

impl BreweryRecord {
    /// Type label used for breakdowns
    pub fn type_label(&self) -> &str {
        self.brewery_type.as_deref().unwrap_or("unknown")
    }

    /// City label used for breakdowns
    pub fn city_label(&self) -> &str {
        self.city.as_deref().unwrap_or("Unknown")
    }
}
