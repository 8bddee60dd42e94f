use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize};

/// A single catalog item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Wine {
    /// Identity, unique within a fetched set.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Unit price in the store currency.
    pub price: f64,
    /// Categorical type ("Red", "White", ...).
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub wine_type: Option<String>,
    /// Grape varietal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub varietal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vintage: Option<Vintage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub producer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub food_pairing: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drinking_window: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_type: Option<String>,
    /// Link to the product page at the source shop.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_url: Option<String>,
    /// Bottle size, e.g. "750ml".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    /// Where the record was scraped from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// Vintage year. Scraped data carries it as text, the database as a number
/// (integer or float).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Vintage {
    #[serde(deserialize_with = "year_from_number")]
    Year(i64),
    Label(String),
}

/// Accept `2015` and `2015.0` alike; fractional years round to the nearest.
fn year_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let year = f64::deserialize(deserializer)?;
    if !year.is_finite() || year.abs() > i32::MAX as f64 {
        return Err(de::Error::custom(format!("invalid vintage year: {}", year)));
    }
    Ok(year.round() as i64)
}

impl fmt::Display for Vintage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Vintage::Year(year) => write!(f, "{}", year),
            Vintage::Label(label) => write!(f, "{}", label.trim()),
        }
    }
}

impl Vintage {
    /// A zero year or blank label means "no vintage".
    pub fn is_blank(&self) -> bool {
        match self {
            Vintage::Year(year) => *year == 0,
            Vintage::Label(label) => label.trim().is_empty(),
        }
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

impl Wine {
    /// Create a record with only the required fields set.
    pub fn new(id: i64, name: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            wine_type: None,
            varietal: None,
            vintage: None,
            region: None,
            country: None,
            description: None,
            image_url: None,
            producer: None,
            sub_region: None,
            food_pairing: None,
            drinking_window: None,
            body_type: None,
            product_url: None,
            size: None,
            source: None,
        }
    }

    pub fn with_type(mut self, wine_type: impl Into<String>) -> Self {
        self.wine_type = Some(wine_type.into());
        self
    }

    pub fn with_varietal(mut self, varietal: impl Into<String>) -> Self {
        self.varietal = Some(varietal.into());
        self
    }

    pub fn with_vintage(mut self, vintage: Vintage) -> Self {
        self.vintage = Some(vintage);
        self
    }

    pub fn with_origin(mut self, region: impl Into<String>, country: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self.country = Some(country.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    pub fn wine_type(&self) -> Option<&str> {
        non_blank(&self.wine_type)
    }

    pub fn varietal(&self) -> Option<&str> {
        non_blank(&self.varietal)
    }

    pub fn region(&self) -> Option<&str> {
        non_blank(&self.region)
    }

    pub fn country(&self) -> Option<&str> {
        non_blank(&self.country)
    }

    pub fn description(&self) -> Option<&str> {
        non_blank(&self.description)
    }

    pub fn image_url(&self) -> Option<&str> {
        non_blank(&self.image_url)
    }

    /// Vintage as display text, `None` when absent or blank.
    pub fn vintage_label(&self) -> Option<String> {
        self.vintage
            .as_ref()
            .filter(|v| !v.is_blank())
            .map(|v| v.to_string())
    }
}
