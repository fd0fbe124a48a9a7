pub mod providers;
pub mod recommendations;

pub use providers::{PlaceholderProvider, ProviderError, RecommendationProvider};
