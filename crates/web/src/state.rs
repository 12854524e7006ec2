//! Application state shared across all handlers.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use crate::config::Config;
use crate::metrics::Metrics;
use crate::models::User;
use crate::theme::{SharedThemeEngine, ThemeEngine};

/// Shared application state.
///
/// Wrapped in Arc internally so Clone is cheap. Nothing in it changes after
/// startup except the theme's suggestion cache and the metric counters.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    /// Site name for titles and the logo.
    site_name: String,

    /// Identity shown in the user menu.
    user: User,

    /// Directory `/assets/*` is served from.
    static_dir: PathBuf,

    /// Theme engine for template rendering.
    theme: SharedThemeEngine,

    /// Prometheus metrics.
    metrics: Arc<Metrics>,
}

impl AppState {
    /// Load templates and build the state from `config`.
    pub fn new(config: &Config) -> Result<Self> {
        let theme = ThemeEngine::new(&config.templates_dir).with_context(|| {
            format!(
                "failed to load templates from {}",
                config.templates_dir.display()
            )
        })?;

        info!(
            templates = theme.template_count(),
            dir = %config.templates_dir.display(),
            "Theme engine initialized"
        );

        Ok(Self::with_theme(config, theme))
    }

    /// Build the state around an already-loaded theme engine.
    pub fn with_theme(config: &Config, theme: ThemeEngine) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                site_name: config.site_name.clone(),
                user: config.display_user.clone(),
                static_dir: config.static_dir.join("assets"),
                theme: Arc::new(theme),
                metrics: Arc::new(Metrics::new()),
            }),
        }
    }

    pub fn site_name(&self) -> &str {
        &self.inner.site_name
    }

    /// Get the display user.
    pub fn user(&self) -> &User {
        &self.inner.user
    }

    /// Get the directory static assets are served from.
    pub fn assets_dir(&self) -> &PathBuf {
        &self.inner.static_dir
    }

    /// Get the theme engine.
    pub fn theme(&self) -> &SharedThemeEngine {
        &self.inner.theme
    }

    /// Get the metrics registry.
    pub fn metrics(&self) -> &Arc<Metrics> {
        &self.inner.metrics
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("site_name", &self.inner.site_name)
            .field("user", &self.inner.user.name)
            .field("theme", &self.inner.theme)
            .finish()
    }
}
