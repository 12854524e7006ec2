//! Sign-in placeholder and sign-out.
//!
//! There is no authentication: signing out only sends the browser to the
//! sign-in page.

use axum::extract::State;
use axum::http::Uri;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::Router;
use tracing::info;

use super::helpers::{inject_site_context, render_document};
use crate::components::UserMenu;
use crate::error::AppResult;
use crate::nav::{RequestNavigator, SIGN_IN_PATH, SIGN_OUT_PATH};
use crate::state::AppState;

/// Create the auth router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(SIGN_IN_PATH, get(sign_in))
        .route(SIGN_OUT_PATH, post(sign_out))
}

/// Signed-out page. Rendered without the header.
async fn sign_in(State(state): State<AppState>, uri: Uri) -> AppResult<Html<String>> {
    let mut context = tera::Context::new();
    inject_site_context(&state, &mut context);
    let body = state.theme().render("pages/sign-in.html", &context)?;

    render_document(&state, uri.path(), "Sign in", "sign-in", &body)
}

/// Run the user menu's sign-out action and follow it.
async fn sign_out(State(state): State<AppState>, uri: Uri) -> Response {
    let navigator = RequestNavigator::from_uri(&uri);
    UserMenu::sign_out(Some(&navigator));

    state.metrics().record_sign_out();
    info!(user = %state.user().name, "user signed out");

    navigator
        .into_redirect()
        .unwrap_or_else(|| Redirect::to(SIGN_IN_PATH))
        .into_response()
}
