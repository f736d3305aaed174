//! Fixed in-memory property catalog.

use {
    async_trait::async_trait,
    casita_dialog::{Listing, ListingQuery, ProviderResult},
};

/// Serves listing queries from a list held in memory, typically loaded from
/// the `[listings]` config section.
pub struct ListingCatalog {
    entries: Vec<Listing>,
}

impl Default for ListingCatalog {
    fn default() -> Self {
        Self::new(default_entries())
    }
}

impl ListingCatalog {
    #[must_use]
    pub fn new(entries: Vec<Listing>) -> Self {
        Self { entries }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl ListingQuery for ListingCatalog {
    async fn query(&self, location: &str, max_price: u64) -> ProviderResult<Vec<Listing>> {
        let needle = location.to_lowercase();
        Ok(self
            .entries
            .iter()
            .filter(|l| l.location.to_lowercase().contains(&needle) && l.price <= max_price)
            .cloned()
            .collect())
    }
}

fn listing(kind: &str, location: &str, price: u64) -> Listing {
    Listing {
        kind: kind.to_string(),
        location: location.to_string(),
        price,
    }
}

fn default_entries() -> Vec<Listing> {
    vec![
        listing("Apartment", "New York", 500_000),
        listing("House", "New York", 850_000),
        listing("Condo", "Miami", 420_000),
        listing("House", "Austin", 390_000),
        listing("Apartment", "San Francisco", 760_000),
        listing("Townhouse", "Chicago", 310_000),
    ]
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn filters_by_location_substring_case_insensitively() {
        let catalog = ListingCatalog::default();
        let results = catalog.query("new york", 1_000_000).await.unwrap();
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|l| l.location == "New York"));
    }

    #[tokio::test]
    async fn partial_location_matches() {
        let catalog = ListingCatalog::default();
        let results = catalog.query("york", 1_000_000).await.unwrap();
        assert_eq!(results.len(), 2);
    }

    #[tokio::test]
    async fn price_ceiling_is_inclusive() {
        let catalog = ListingCatalog::new(vec![listing("Apartment", "New York", 500_000)]);
        assert_eq!(catalog.query("New York", 500_000).await.unwrap().len(), 1);
        assert!(catalog.query("New York", 499_999).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn budget_filters_out_expensive_listings() {
        let catalog = ListingCatalog::default();
        let results = catalog.query("New York", 600_000).await.unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].kind, "Apartment");
        assert_eq!(results[0].price, 500_000);
    }

    #[tokio::test]
    async fn unknown_location_returns_nothing() {
        let catalog = ListingCatalog::default();
        assert!(catalog.query("Atlantis", u64::MAX).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn empty_location_matches_everything_under_budget() {
        let catalog = ListingCatalog::default();
        let results = catalog.query("", 400_000).await.unwrap();
        assert_eq!(results.len(), 2);
    }
}
