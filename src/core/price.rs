use crate::domain::model::{Offer, PriceQuote};
use crate::utils::error::{CompareError, Result};
use crate::utils::validation::validate_quantity;

/// Per-unit price of a quoted offer.
///
/// Kept as two steps, divide by the quoted volume and multiply back, so the
/// result is bit-identical to the figures users already see in their carts.
pub fn unit_price_of(offer: &Offer) -> Result<f64> {
    let volume = validate_quantity(offer.volume)?;
    Ok((offer.unit_price / volume) * volume)
}

/// Prices `offer` for `quantity` units.
pub fn quote(offer: &Offer, quantity: f64) -> Result<PriceQuote> {
    let unit_price = unit_price_of(offer)?;
    reprice(unit_price, quantity)
}

/// Recomputes the total for an already fixed per-unit price.
///
/// A total that overflows to infinity is refused like a bad quantity.
pub fn reprice(unit_price: f64, quantity: f64) -> Result<PriceQuote> {
    let quantity = validate_quantity(quantity)?;
    let total_price = unit_price * quantity;
    if !total_price.is_finite() {
        return Err(CompareError::invalid_quantity(quantity));
    }

    Ok(PriceQuote {
        unit_price,
        total_price,
    })
}
