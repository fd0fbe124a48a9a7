//! Recommendation provider abstraction
//!
//! The web layer only ever talks to a `RecommendationProvider`. Today the
//! only implementation is a fixed placeholder; a real backend (an inference
//! or recommendation service) plugs in here without touching the handlers.

use crate::models::{PreferenceSubmission, Recommendation};

pub mod placeholder;

pub use placeholder::PlaceholderProvider;

/// Failures a provider can report back to the web layer
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ProviderError {
    #[error("Recommendation service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Submission rejected: {0}")]
    InvalidInput(String),

    /// The backend answered with a record that cannot be represented
    #[error("Malformed recommendation: {0}")]
    MalformedRecord(String),
}

impl From<url::ParseError> for ProviderError {
    fn from(err: url::ParseError) -> Self {
        ProviderError::MalformedRecord(err.to_string())
    }
}

pub type ProviderResult<T> = Result<T, ProviderError>;

/// Trait for recommendation backends
///
/// Submission in, ordered recommendation list out.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait RecommendationProvider: Send + Sync {
    /// Turns a preference submission into an ordered list of recommendations
    async fn recommend(
        &self,
        submission: &PreferenceSubmission,
    ) -> ProviderResult<Vec<Recommendation>>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
