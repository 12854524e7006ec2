//! HTTP route handlers.

pub mod auth;
pub mod health;
pub mod helpers;
pub mod metrics;
pub mod pages;
pub mod static_files;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::error::AppError;
use crate::state::AppState;

/// Build the application router.
///
/// Middleware order (last added runs first): TraceLayer, then metrics, then
/// the route.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(pages::router())
        .merge(auth::router())
        .merge(health::router())
        .merge(metrics::router())
        .merge(static_files::router())
        .fallback(not_found)
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            crate::middleware::track_metrics,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn not_found() -> AppError {
    AppError::NotFound
}
