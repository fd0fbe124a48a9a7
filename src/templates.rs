use std::path::Path;

use handlebars::Handlebars;
use serde::Serialize;

use crate::{config::Config, error::AppResult, models::Recommendation};

/// Name the home page template is registered under
pub const INDEX_TEMPLATE: &str = "index";

const EMBEDDED_INDEX: &str = include_str!("../templates/index.html");

/// Data bound to the `index` template
#[derive(Debug, Serialize)]
struct HomePage<'a> {
    /// Whether a submission was made, so an empty list can be told apart
    /// from no request at all
    searched: bool,
    recommendations: Option<&'a [Recommendation]>,
}

/// Handlebars registry holding the page templates
pub struct Templates {
    registry: Handlebars<'static>,
}

impl Templates {
    /// Registry backed by the template compiled into the binary
    pub fn embedded() -> AppResult<Self> {
        let mut registry = Handlebars::new();
        registry.register_template_string(INDEX_TEMPLATE, EMBEDDED_INDEX)?;
        Ok(Self { registry })
    }

    /// Registry backed by a template file on disk
    ///
    /// With `reload` set the file is re-read on every render.
    pub fn from_file(path: impl AsRef<Path>, reload: bool) -> AppResult<Self> {
        let mut registry = Handlebars::new();
        registry.set_dev_mode(reload);
        registry.register_template_file(INDEX_TEMPLATE, path.as_ref())?;
        Ok(Self { registry })
    }

    pub fn from_config(config: &Config) -> AppResult<Self> {
        match &config.template_path {
            Some(path) => {
                tracing::info!(path = %path, reload = config.debug, "Loading index template from file");
                Self::from_file(path, config.debug)
            }
            None => Self::embedded(),
        }
    }

    /// Renders the home page, with or without a recommendation list
    pub fn render_home(&self, recommendations: Option<&[Recommendation]>) -> AppResult<String> {
        let page = HomePage {
            searched: recommendations.is_some(),
            recommendations,
        };
        Ok(self.registry.render(INDEX_TEMPLATE, &page)?)
    }
}
