use crate::utils::error::{CompareError, Result};
use serde::{Deserialize, Serialize};

/// One priced offer for a part, as returned by the pricing service.
///
/// `unit_price` and `total_price` are only meaningful together with the
/// `volume` they were quoted at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    pub manufacturer_part_number: String,
    #[serde(default)]
    pub manufacturer: String,
    #[serde(default)]
    pub data_provider: String,
    pub volume: f64,
    pub unit_price: f64,
    pub total_price: f64,
}

impl Offer {
    pub fn new(
        manufacturer_part_number: impl Into<String>,
        manufacturer: impl Into<String>,
        data_provider: impl Into<String>,
        volume: f64,
        unit_price: f64,
        total_price: f64,
    ) -> Self {
        Self {
            manufacturer_part_number: manufacturer_part_number.into(),
            manufacturer: manufacturer.into(),
            data_provider: data_provider.into(),
            volume,
            unit_price,
            total_price,
        }
    }
}

/// A cart entry. `volume` is edited by the user; prices are derived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineItem {
    pub manufacturer_part_number: String,
    pub manufacturer: String,
    pub data_provider: String,
    pub volume: f64,
    pub unit_price: f64,
    pub total_price: f64,
}

/// Per-unit and total price for a given quantity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuote {
    pub unit_price: f64,
    pub total_price: f64,
}

/// Body of the compare request. Both fields are sent as text, trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub part_number: String,
    pub volume: String,
}

/// How results and the cart are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Tsv,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = CompareError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "csv" => Ok(Self::Csv),
            "tsv" => Ok(Self::Tsv),
            "json" => Ok(Self::Json),
            other => Err(CompareError::InvalidConfigValueError {
                field: "display.format".to_string(),
                value: other.to_string(),
                reason: "Valid formats: table, csv, tsv, json".to_string(),
            }),
        }
    }
}
