//! Shared route helpers for page rendering.

use axum::response::Html;

use crate::components::{Header, PageLayout};
use crate::error::AppResult;
use crate::state::AppState;
use crate::theme::Markup;

/// Inject site-wide context variables into a Tera context.
///
/// Adds: `site_name`, `user`
pub fn inject_site_context(state: &AppState, context: &mut tera::Context) {
    context.insert("site_name", state.site_name());
    context.insert("user", state.user());
}

/// Render `content` inside the page layout and wrap it in a full document.
///
/// `page` names the page in the render metrics.
pub fn render_in_layout(
    state: &AppState,
    path: &str,
    title: &str,
    page: &str,
    content: Markup,
) -> AppResult<Html<String>> {
    let theme = state.theme();
    let header = Header::new(state.site_name(), state.user(), Some(path));
    let body = PageLayout::new(header, content).render(theme)?;

    render_document(state, path, title, page, &body)
}

/// Wrap an already-rendered body in a full document.
pub fn render_document(
    state: &AppState,
    path: &str,
    title: &str,
    page: &str,
    body: &Markup,
) -> AppResult<Html<String>> {
    let mut context = tera::Context::new();
    inject_site_context(state, &mut context);

    let html = state.theme().render_page(path, title, body, &mut context)?;
    state.metrics().record_page_render(page);

    Ok(Html(html))
}

/// HTML-escape a string for safe output.
///
/// `/` is left alone so URLs in attributes stay readable.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
