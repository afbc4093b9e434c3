use crate::core::offer_key::ListingKey;
use crate::domain::model::Offer;
use std::collections::HashSet;

/// Yields the first occurrence of each distinct listing, in input order.
pub fn dedupe_iter<I>(offers: I) -> impl Iterator<Item = Offer>
where
    I: IntoIterator<Item = Offer>,
{
    let mut seen = HashSet::new();
    offers
        .into_iter()
        .filter(move |offer| seen.insert(ListingKey::of(offer)))
}

pub fn dedupe(offers: Vec<Offer>) -> Vec<Offer> {
    let before = offers.len();
    let unique: Vec<Offer> = dedupe_iter(offers).collect();

    if unique.len() < before {
        tracing::debug!("Dropped {} duplicate offers", before - unique.len());
    }

    unique
}

#[cfg(test)]
mod tests {
    use super::*;

    fn a1(provider: &str) -> Offer {
        Offer::new("A1", "X", provider, 10.0, 2.0, 20.0)
    }

    #[test]
    fn test_identical_offers_collapse() {
        let result = dedupe(vec![a1("P1"), a1("P1")]);
        assert_eq!(result, vec![a1("P1")]);
    }

    #[test]
    fn test_first_seen_order_is_kept() {
        let input = vec![a1("P2"), a1("P1"), a1("P2"), a1("P3"), a1("P1")];
        let result = dedupe(input);
        let providers: Vec<&str> = result.iter().map(|o| o.data_provider.as_str()).collect();
        assert_eq!(providers, vec!["P2", "P1", "P3"]);
    }

    #[test]
    fn test_same_part_different_volume_is_kept() {
        let mut bigger = a1("P1");
        bigger.volume = 100.0;
        bigger.total_price = 200.0;
        assert_eq!(dedupe(vec![a1("P1"), bigger.clone()]).len(), 2);
    }

    #[test]
    fn test_idempotent() {
        let input = vec![a1("P1"), a1("P2"), a1("P1"), a1("P3"), a1("P3")];
        let once = dedupe(input);
        let twice = dedupe(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_empty_input() {
        assert!(dedupe(Vec::new()).is_empty());
    }

    #[test]
    fn test_iterator_is_lazy_and_ordered() {
        let mut iter = dedupe_iter(vec![a1("P1"), a1("P1"), a1("P2")]);
        assert_eq!(iter.next().unwrap().data_provider, "P1");
        assert_eq!(iter.next().unwrap().data_provider, "P2");
        assert!(iter.next().is_none());
    }
}
