//! Theme engine with Tera templates and suggestion resolution.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use dashmap::DashMap;
use tera::Tera;
use tracing::debug;

use super::markup::Markup;
use crate::routes::helpers::html_escape;

/// Theme engine for rendering templates.
pub struct ThemeEngine {
    /// Tera template engine instance.
    tera: Tera,
    /// Cache mapping suggestion lists to resolved template names.
    suggestion_cache: DashMap<String, String>,
}

impl ThemeEngine {
    /// Create a new theme engine loading templates from the given directory.
    pub fn new(template_dir: &Path) -> Result<Self> {
        let pattern = template_dir.join("**/*.html");
        let pattern_str = pattern
            .to_str()
            .context("invalid template directory path")?;

        let mut tera = Tera::new(pattern_str).context("failed to initialize Tera templates")?;
        tera.set_escape_fn(html_escape);

        let template_count = tera.get_template_names().count();
        debug!(count = template_count, dir = %template_dir.display(), "loaded templates");

        Ok(Self {
            tera,
            suggestion_cache: DashMap::new(),
        })
    }

    /// Create a theme engine with no templates (for testing).
    pub fn empty() -> Result<Self> {
        let mut tera = Tera::default();
        tera.set_escape_fn(html_escape);
        Ok(Self {
            tera,
            suggestion_cache: DashMap::new(),
        })
    }

    /// Get a mutable reference to Tera (for adding templates at runtime).
    pub fn tera_mut(&mut self) -> &mut Tera {
        &mut self.tera
    }

    /// Number of loaded templates.
    pub fn template_count(&self) -> usize {
        self.tera.get_template_names().count()
    }

    /// Resolve the best template from a list of suggestions.
    ///
    /// Templates are tried in order; the first one that exists is returned.
    /// Results are cached for performance.
    ///
    /// Example suggestions: `["page--search--results", "page--search", "page"]`
    pub fn resolve_template(&self, suggestions: &[&str]) -> Option<String> {
        if suggestions.is_empty() {
            return None;
        }

        let cache_key = suggestions.join("|");

        if let Some(cached) = self.suggestion_cache.get(&cache_key) {
            return Some(cached.clone());
        }

        for suggestion in suggestions {
            let template_name = format!("{suggestion}.html");
            if self.tera.get_template(&template_name).is_ok() {
                self.suggestion_cache
                    .insert(cache_key, template_name.clone());
                return Some(template_name);
            }

            // Also try without .html extension (in case suggestion already has it)
            if self.tera.get_template(suggestion).is_ok() {
                let name = (*suggestion).to_string();
                self.suggestion_cache.insert(cache_key, name.clone());
                return Some(name);
            }
        }

        None
    }

    /// Get page template suggestions based on path.
    ///
    /// `/search/results` yields `page--search--results`, `page--search`,
    /// `page`. Empty segments are ignored so `/search/` behaves like
    /// `/search`.
    pub fn page_suggestions(path: &str) -> Vec<String> {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        let mut suggestions: Vec<String> = (1..=segments.len())
            .rev()
            .map(|n| format!("page--{}", segments[..n].join("--")))
            .collect();

        suggestions.push("page".to_string());
        suggestions
    }

    /// Render a component template to a [`Markup`] fragment.
    ///
    /// The newline a template file ends with is dropped so fragments nest
    /// without stray whitespace.
    pub fn render(&self, template: &str, context: &tera::Context) -> Result<Markup> {
        self.tera
            .render(template, context)
            .map(|html| Markup::raw(html.trim_end_matches('\n').to_string()))
            .with_context(|| format!("failed to render template: {template}"))
    }

    /// Render a full HTML document around an already-rendered page body.
    pub fn render_page(
        &self,
        path: &str,
        title: &str,
        body: &Markup,
        context: &mut tera::Context,
    ) -> Result<String> {
        let suggestions = Self::page_suggestions(path);
        let suggestion_refs: Vec<&str> = suggestions.iter().map(|s| s.as_str()).collect();

        let template = self
            .resolve_template(&suggestion_refs)
            .unwrap_or_else(|| "page.html".to_string());

        context.insert("title", title);
        context.insert("body", body.as_str());
        context.insert("path", path);

        self.tera
            .render(&template, context)
            .context("failed to render page template")
    }
}

impl std::fmt::Debug for ThemeEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeEngine")
            .field("template_count", &self.template_count())
            .field("cache_size", &self.suggestion_cache.len())
            .finish()
    }
}

/// Wrap ThemeEngine in Arc for sharing across handlers.
pub type SharedThemeEngine = Arc<ThemeEngine>;
