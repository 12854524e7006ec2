//! Theme engine and template rendering.
//!
//! Provides Tera-based template rendering with page template suggestion
//! resolution, the [`Markup`] type components exchange, and class-list
//! composition for the UI primitives.

mod classes;
mod engine;
mod markup;

pub use classes::class_names;
pub use engine::{SharedThemeEngine, ThemeEngine};
pub use markup::Markup;

/// Theme engine over the repository's `templates/` directory.
#[cfg(test)]
#[allow(clippy::expect_used)]
pub(crate) fn test_engine() -> ThemeEngine {
    let dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../../templates");
    ThemeEngine::new(&dir).expect("failed to load repository templates")
}
