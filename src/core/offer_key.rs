//! Identity relations over offers.
//!
//! Search results and the cart use different notions of "the same offer":
//! a listing is identified by every field, a cart line by part number only.

use crate::domain::model::{CartLineItem, Offer};

/// Full structural identity of a search result row.
///
/// Floats are compared by value: `-0.0` equals `0.0` and every NaN equals
/// every other NaN, so the key is usable in a `HashSet`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ListingKey {
    manufacturer_part_number: String,
    manufacturer: String,
    data_provider: String,
    volume: u64,
    unit_price: u64,
    total_price: u64,
}

impl ListingKey {
    pub fn of(offer: &Offer) -> Self {
        Self {
            manufacturer_part_number: offer.manufacturer_part_number.clone(),
            manufacturer: offer.manufacturer.clone(),
            data_provider: offer.data_provider.clone(),
            volume: float_bits(offer.volume),
            unit_price: float_bits(offer.unit_price),
            total_price: float_bits(offer.total_price),
        }
    }
}

fn float_bits(value: f64) -> u64 {
    if value.is_nan() {
        f64::NAN.to_bits()
    } else if value == 0.0 {
        0.0f64.to_bits()
    } else {
        value.to_bits()
    }
}

/// Cart identity: one line per manufacturer part number.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CartKey(String);

impl CartKey {
    pub fn new(part_number: impl Into<String>) -> Self {
        Self(part_number.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&Offer> for CartKey {
    fn from(offer: &Offer) -> Self {
        Self(offer.manufacturer_part_number.clone())
    }
}

impl From<&CartLineItem> for CartKey {
    fn from(line: &CartLineItem) -> Self {
        Self(line.manufacturer_part_number.clone())
    }
}

impl std::fmt::Display for CartKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
