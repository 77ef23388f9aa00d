//! Server-side HTML rendering.
//!
//! Templates are parsed once at startup from a single directory and shared read-only
//! across requests. Autoescaping is enabled for `.html` files, so values from the
//! database are escaped when interpolated.

use std::path::Path;

use axum::response::Html;
use serde::Serialize;
use tera::{Context, Tera};

use crate::server::error::{template::TemplateError, AppError};

pub const AIRPORTS_TEMPLATE: &str = "airports.html";
pub const FLIGHTS_TEMPLATE: &str = "flights.html";
pub const AIRCRAFTS_TEMPLATE: &str = "aircrafts.html";
pub const RESULTS_TEMPLATE: &str = "results.html";

/// Templates the page handlers render; startup fails if any is missing.
const REQUIRED_TEMPLATES: [&str; 4] = [
    AIRPORTS_TEMPLATE,
    FLIGHTS_TEMPLATE,
    AIRCRAFTS_TEMPLATE,
    RESULTS_TEMPLATE,
];

/// Parsed template set.
pub struct Templates {
    tera: Tera,
}

impl Templates {
    /// Loads every `*.html` template from `dir`.
    ///
    /// # Arguments
    /// - `dir` - Directory containing the page templates
    ///
    /// # Returns
    /// - `Ok(Templates)` - All templates parsed and every required page present
    /// - `Err(TemplateError::Load)` - A template failed to parse
    /// - `Err(TemplateError::MissingTemplate)` - A required page template is absent
    pub fn load(dir: impl AsRef<Path>) -> Result<Self, TemplateError> {
        let dir = dir.as_ref().display().to_string();
        let glob = format!("{}/*.html", dir.trim_end_matches('/'));

        let tera = Tera::new(&glob).map_err(|source| TemplateError::Load {
            dir: dir.clone(),
            source,
        })?;

        let loaded: Vec<&str> = tera.get_template_names().collect();
        if let Some(missing) = REQUIRED_TEMPLATES
            .iter()
            .find(|name| !loaded.contains(name))
        {
            return Err(TemplateError::MissingTemplate {
                name: missing.to_string(),
                dir,
            });
        }

        tracing::debug!("Loaded {} templates from {}", loaded.len(), dir);

        Ok(Self { tera })
    }

    /// Renders the named template with `data` as its context.
    ///
    /// `data` must serialize to a map; its fields become the template's variables.
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<Html<String>, AppError> {
        let context = Context::from_serialize(data)?;

        self.render_context(name, &context)
    }

    /// Renders a template that takes no data.
    pub fn render_static(&self, name: &str) -> Result<Html<String>, AppError> {
        self.render_context(name, &Context::new())
    }

    fn render_context(&self, name: &str, context: &Context) -> Result<Html<String>, AppError> {
        Ok(Html(self.tera.render(name, context)?))
    }
}
