use std::sync::Arc;

use crate::{
    config::Config,
    error::AppResult,
    services::providers::{PlaceholderProvider, RecommendationProvider},
    templates::Templates,
};

/// Shared application state
///
/// Built once at startup and handed to the router. Nothing in it is
/// mutated after construction, so no locking is involved.
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn RecommendationProvider>,
    pub templates: Arc<Templates>,
}

impl AppState {
    pub fn new(provider: Arc<dyn RecommendationProvider>, templates: Templates) -> Self {
        Self {
            provider,
            templates: Arc::new(templates),
        }
    }

    /// State for the shipped server: placeholder provider plus the
    /// configured templates
    pub fn from_config(config: &Config) -> AppResult<Self> {
        let templates = Templates::from_config(config)?;
        Ok(Self::new(Arc::new(PlaceholderProvider::new()), templates))
    }
}
