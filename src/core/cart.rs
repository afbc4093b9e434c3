//! In-memory cart, one line per manufacturer part number.

use crate::core::offer_key::CartKey;
use crate::core::price;
use crate::domain::model::{CartLineItem, Offer};
use crate::utils::error::{CompareError, Result};
use crate::utils::validation::{is_valid_quantity, parse_quantity};

/// What a cart operation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartChange {
    /// A new line was appended at this position.
    Added(usize),
    /// The line at this position was modified in place.
    Updated(usize),
    /// The line at this position was deleted.
    Removed(usize),
    /// Input was not usable; nothing changed.
    Ignored,
}

/// Ordered cart lines. Order is insertion order and edits never move a line.
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    lines: Vec<CartLineItem>,
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLineItem] {
        &self.lines
    }

    pub fn get(&self, index: usize) -> Option<&CartLineItem> {
        self.lines.get(index)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn position(&self, key: &CartKey) -> Option<usize> {
        self.lines
            .iter()
            .position(|line| line.manufacturer_part_number == key.as_str())
    }

    /// Sum of all line totals.
    pub fn total(&self) -> f64 {
        self.lines.iter().map(|line| line.total_price).sum()
    }

    /// Adds `offer` at its quoted volume.
    ///
    /// Re-adding a part already in the cart resets that line to the new
    /// offer's volume and price; quantities are not summed.
    pub fn add(&mut self, offer: &Offer) -> Result<CartChange> {
        let quote = price::quote(offer, offer.volume)?;
        let key = CartKey::from(offer);

        match self.position(&key) {
            Some(index) => {
                let line = &mut self.lines[index];
                line.volume = offer.volume;
                line.unit_price = quote.unit_price;
                line.total_price = quote.total_price;
                tracing::debug!(part = %key, index, volume = offer.volume, "Cart line reset");
                Ok(CartChange::Updated(index))
            }
            None => {
                self.lines.push(CartLineItem {
                    manufacturer_part_number: offer.manufacturer_part_number.clone(),
                    manufacturer: offer.manufacturer.clone(),
                    data_provider: offer.data_provider.clone(),
                    volume: offer.volume,
                    unit_price: quote.unit_price,
                    total_price: quote.total_price,
                });
                let index = self.lines.len() - 1;
                tracing::debug!(part = %key, index, volume = offer.volume, "Cart line added");
                Ok(CartChange::Added(index))
            }
        }
    }

    /// Sets the quantity of a line, keeping its per-unit price.
    ///
    /// A quantity that is not positive and finite is ignored.
    pub fn update_quantity(&mut self, index: usize, volume: f64) -> Result<CartChange> {
        let line = self
            .lines
            .get_mut(index)
            .ok_or(CompareError::LineNotFound { index })?;

        if !is_valid_quantity(volume) {
            tracing::debug!(index, volume, "Ignoring unusable quantity");
            return Ok(CartChange::Ignored);
        }

        let quote = price::reprice(line.unit_price, volume)?;
        line.volume = volume;
        line.total_price = quote.total_price;
        Ok(CartChange::Updated(index))
    }

    /// Same as [`update_quantity`](Self::update_quantity) for the raw text of
    /// a quantity field; unparsable text is ignored.
    pub fn update_quantity_input(&mut self, index: usize, raw: &str) -> Result<CartChange> {
        match parse_quantity(raw) {
            Ok(volume) => self.update_quantity(index, volume),
            Err(_) => {
                if index >= self.lines.len() {
                    return Err(CompareError::LineNotFound { index });
                }
                Ok(CartChange::Ignored)
            }
        }
    }

    pub fn remove(&mut self, index: usize) -> Result<CartLineItem> {
        if index >= self.lines.len() {
            return Err(CompareError::LineNotFound { index });
        }
        Ok(self.lines.remove(index))
    }

    pub fn remove_part(&mut self, key: &CartKey) -> Option<CartLineItem> {
        let index = self.position(key)?;
        Some(self.lines.remove(index))
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}
