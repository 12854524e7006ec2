//! Page shell: header above a centered content container.

use anyhow::Result;
use serde::Serialize;

use super::header::Header;
use crate::theme::{Markup, ThemeEngine};

/// Wraps page content under the site header.
#[derive(Debug, Clone)]
pub struct PageLayout<'a> {
    header: Header<'a>,
    content: Markup,
}

#[derive(Serialize)]
struct LayoutView {
    header: String,
    content: String,
}

impl<'a> PageLayout<'a> {
    /// `content` is placed unchanged inside the container.
    pub fn new(header: Header<'a>, content: impl Into<Markup>) -> Self {
        Self {
            header,
            content: content.into(),
        }
    }

    pub fn render(&self, theme: &ThemeEngine) -> Result<Markup> {
        let view = LayoutView {
            header: self.header.render(theme)?.into_string(),
            content: self.content.to_string(),
        };

        let mut context = tera::Context::new();
        context.insert("layout", &view);
        theme.render("components/layout.html", &context)
    }
}
