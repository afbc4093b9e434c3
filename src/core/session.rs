use crate::core::cart::{CartChange, CartStore};
use crate::core::dedupe::dedupe;
use crate::domain::model::{CartLineItem, Offer, SearchRequest};
use crate::domain::ports::PricingService;
use crate::utils::error::{CompareError, Result};

/// State behind one interactive session: the latest search results and the
/// cart. These methods are the only way either changes.
pub struct CompareSession<P: PricingService> {
    service: P,
    results: Vec<Offer>,
    cart: CartStore,
}

impl<P: PricingService> CompareSession<P> {
    pub fn new(service: P) -> Self {
        Self {
            service,
            results: Vec::new(),
            cart: CartStore::new(),
        }
    }

    pub fn results(&self) -> &[Offer] {
        &self.results
    }

    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    pub fn cart_lines(&self) -> &[CartLineItem] {
        self.cart.lines()
    }

    /// Looks up offers and replaces the current results with the
    /// deduplicated response. On failure the previous results are kept.
    pub async fn submit_search(&mut self, part_number: &str, volume: &str) -> Result<&[Offer]> {
        let part_number = part_number.trim();
        let volume = volume.trim();

        if part_number.is_empty() || volume.is_empty() {
            return Err(CompareError::MissingSearchInput);
        }

        let request = SearchRequest {
            part_number: part_number.to_string(),
            volume: volume.to_string(),
        };

        tracing::info!(part_number, volume, "🔎 Searching offers");
        let offers = self.service.fetch_offers(&request).await.map_err(|e| {
            tracing::warn!(error = %e, "Search failed, keeping previous results");
            match e {
                CompareError::SearchFailed { .. } => e,
                other => CompareError::search_failed(other.to_string()),
            }
        })?;

        let received = offers.len();
        self.results = dedupe(offers);
        tracing::info!(
            received,
            unique = self.results.len(),
            "✅ Search completed"
        );

        Ok(&self.results)
    }

    /// Adds the result row at `row` to the cart.
    pub fn select_offer(&mut self, row: usize) -> Result<CartChange> {
        let offer = self
            .results
            .get(row)
            .ok_or(CompareError::ResultNotFound { index: row })?;
        self.cart.add(offer)
    }

    /// Adds any offer to the cart, whether or not it came from the results.
    pub fn select(&mut self, offer: &Offer) -> Result<CartChange> {
        self.cart.add(offer)
    }

    pub fn edit_cart_quantity(&mut self, index: usize, raw: &str) -> Result<CartChange> {
        self.cart.update_quantity_input(index, raw)
    }

    pub fn remove_cart_item(&mut self, index: usize) -> Result<CartChange> {
        let removed = self.cart.remove(index)?;
        tracing::debug!(part = %removed.manufacturer_part_number, "Removed from cart");
        Ok(CartChange::Removed(index))
    }

    pub fn clear_cart(&mut self) {
        self.cart.clear();
    }
}
