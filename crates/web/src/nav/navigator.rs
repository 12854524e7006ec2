//! Navigator seam between components and whatever performs navigation.

use axum::http::Uri;
use axum::response::Redirect;
use parking_lot::Mutex;
use tracing::debug;

/// Where the sign-out action sends the user.
pub const SIGN_IN_PATH: &str = "/sign-in";

/// Endpoint the user menu's sign-out item submits to.
pub const SIGN_OUT_PATH: &str = "/sign-out";

/// Exposes the current location and accepts navigation requests.
///
/// Components only read the current path and issue requests; performing the
/// navigation is the implementor's business.
pub trait Navigator {
    /// Path currently being displayed, if known.
    fn current_path(&self) -> Option<&str>;

    /// Request navigation to `path`.
    fn navigate(&self, path: &str);
}

/// Navigator bound to a single HTTP request.
///
/// A navigation request is remembered and turned into a `303 See Other`
/// response by [`RequestNavigator::into_redirect`]. Later requests replace
/// earlier ones.
#[derive(Debug)]
pub struct RequestNavigator {
    current_path: String,
    destination: Mutex<Option<String>>,
}

impl RequestNavigator {
    /// Create a navigator for a request to `path`.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            current_path: path.into(),
            destination: Mutex::new(None),
        }
    }

    /// Create a navigator from a request URI. The query string is ignored.
    pub fn from_uri(uri: &Uri) -> Self {
        Self::new(uri.path())
    }

    /// The pending navigation destination.
    pub fn destination(&self) -> Option<String> {
        self.destination.lock().clone()
    }

    /// Consume the navigator, producing a redirect if navigation was requested.
    pub fn into_redirect(self) -> Option<Redirect> {
        self.destination
            .into_inner()
            .map(|path| Redirect::to(&path))
    }
}

impl Navigator for RequestNavigator {
    fn current_path(&self) -> Option<&str> {
        Some(&self.current_path)
    }

    fn navigate(&self, path: &str) {
        debug!(from = %self.current_path, to = %path, "navigation requested");
        *self.destination.lock() = Some(path.to_string());
    }
}
