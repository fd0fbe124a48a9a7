use crate::models::{PreferenceSubmission, Price, Recommendation};

use super::{ProviderResult, RecommendationProvider};

/// Stand-in provider that always answers with the same two products
///
/// The submission is ignored entirely.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderProvider;

impl PlaceholderProvider {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl RecommendationProvider for PlaceholderProvider {
    async fn recommend(
        &self,
        _submission: &PreferenceSubmission,
    ) -> ProviderResult<Vec<Recommendation>> {
        Ok(vec![
            Recommendation::new(
                "Product 1",
                Price::from_cents(9999),
                "A great product for your needs.",
                "https://example.com/product1",
            )?,
            Recommendation::new(
                "Product 2",
                Price::from_cents(14999),
                "Another excellent choice.",
                "https://example.com/product2",
            )?,
        ])
    }

    fn name(&self) -> &'static str {
        "placeholder"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_returns_two_fixed_products() {
        let provider = PlaceholderProvider::new();
        let recs = tokio_test::block_on(provider.recommend(&PreferenceSubmission::new())).unwrap();

        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0].name, "Product 1");
        assert_eq!(recs[0].price, Price::from_cents(9999));
        assert_eq!(recs[0].url.as_str(), "https://example.com/product1");
        assert_eq!(recs[1].name, "Product 2");
        assert_eq!(recs[1].price, Price::from_cents(14999));
        assert_eq!(recs[1].description, "Another excellent choice.");
    }

    #[test]
    fn test_ignores_submission() {
        let provider = PlaceholderProvider::new();
        let empty = tokio_test::block_on(provider.recommend(&PreferenceSubmission::new())).unwrap();

        let submission: PreferenceSubmission =
            [("category", "kitchen"), ("budget", "10")].into_iter().collect();
        let filled = tokio_test::block_on(provider.recommend(&submission)).unwrap();

        assert_eq!(empty, filled);
    }
}
