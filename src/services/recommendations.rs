use std::sync::Arc;

use tracing::instrument;

use crate::{
    error::AppResult,
    models::{PreferenceSubmission, Recommendation},
    services::providers::RecommendationProvider,
};

/// Produces product recommendations for a preference submission
///
/// Delegates to the configured RecommendationProvider, keeping HTTP routing
/// apart from whatever backend does the actual work. Provider failures are
/// converted into application errors.
#[instrument(skip_all, fields(provider = provider.name(), field_count = submission.len()))]
pub async fn get_recommendations(
    provider: Arc<dyn RecommendationProvider>,
    submission: &PreferenceSubmission,
) -> AppResult<Vec<Recommendation>> {
    tracing::debug!(fields = ?submission, "Requesting recommendations");

    let recommendations = provider.recommend(submission).await.map_err(|e| {
        tracing::error!(error = %e, "Recommendation provider failed");
        e
    })?;

    tracing::info!(count = recommendations.len(), "Recommendations ready");
    Ok(recommendations)
}
