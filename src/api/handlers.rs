use axum::{extract::State, response::Html};

use crate::{error::AppResult, models::PreferenceSubmission, services::recommendations};

use super::AppState;

/// Home page with the preference form and no recommendations
pub async fn home(State(state): State<AppState>) -> AppResult<Html<String>> {
    let page = state.templates.render_home(None)?;
    Ok(Html(page))
}

/// Renders the home page again, this time with recommendations for the
/// submitted preferences
pub async fn recommend(
    State(state): State<AppState>,
    submission: PreferenceSubmission,
) -> AppResult<Html<String>> {
    let recommendations =
        recommendations::get_recommendations(state.provider.clone(), &submission).await?;
    let page = state.templates.render_home(Some(&recommendations))?;
    Ok(Html(page))
}
