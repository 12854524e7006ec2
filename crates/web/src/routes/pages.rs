//! Dashboard and section pages.

use axum::extract::State;
use axum::http::Uri;
use axum::response::Html;
use axum::routing::get;
use axum::Router;
use serde::Serialize;
use tracing::debug;

use super::helpers::render_in_layout;
use crate::error::{AppError, AppResult};
use crate::nav::{NavEntry, find_by_href};
use crate::state::AppState;

/// Create the pages router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(dashboard))
        .route("/search", get(search))
        .route("/search/", get(search))
        .route("/search/{*rest}", get(search))
        .route("/watchlist", get(watchlist))
        .route("/watchlist/", get(watchlist))
        .route("/watchlist/{*rest}", get(watchlist))
}

#[derive(Serialize)]
struct SectionView<'a> {
    label: &'a str,
    rest: Option<&'a str>,
}

async fn dashboard(State(state): State<AppState>, uri: Uri) -> AppResult<Html<String>> {
    let content = state
        .theme()
        .render("pages/home.html", &tera::Context::new())?;
    render_in_layout(&state, uri.path(), "Dashboard", "dashboard", content)
}

async fn search(State(state): State<AppState>, uri: Uri) -> AppResult<Html<String>> {
    section_page(&state, &uri, "/search")
}

async fn watchlist(State(state): State<AppState>, uri: Uri) -> AppResult<Html<String>> {
    section_page(&state, &uri, "/watchlist")
}

fn section_page(state: &AppState, uri: &Uri, href: &str) -> AppResult<Html<String>> {
    let entry: &NavEntry = find_by_href(href).ok_or(AppError::NotFound)?;
    let path = uri.path();
    let rest = sub_path(path, entry.href);
    debug!(section = entry.label, rest = ?rest, "rendering section page");

    let mut context = tera::Context::new();
    context.insert(
        "section",
        &SectionView {
            label: entry.label,
            rest,
        },
    );
    let content = state.theme().render("pages/section.html", &context)?;

    let page = entry.label.to_lowercase();
    render_in_layout(state, path, entry.label, &page, content)
}

/// The part of `path` below `href`, without surrounding slashes.
fn sub_path<'a>(path: &'a str, href: &str) -> Option<&'a str> {
    path.strip_prefix(href)
        .map(|rest| rest.trim_matches('/'))
        .filter(|rest| !rest.is_empty())
}
