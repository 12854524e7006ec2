//! Signalist web shell.
//!
//! Server-rendered header, navigation and user menu for the Signalist
//! dashboard. The `signalist` binary serves it; the library is exposed for
//! integration testing.

pub mod components;
pub mod config;
pub mod error;
pub mod metrics;
pub mod middleware;
pub mod models;
pub mod nav;
pub mod routes;
pub mod state;
pub mod theme;
pub mod ui;

pub use config::Config;
pub use state::AppState;
