//! Signalist test utilities.
//!
//! Helpers for integration testing: fixtures, a recording navigator, and
//! assertions for inspecting rendered HTML.

use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use signalist_web::Config;
use signalist_web::models::User;
use signalist_web::nav::Navigator;

/// Repository root, two levels above a crate's manifest directory.
pub fn project_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .and_then(Path::parent)
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// The display user the header shows by default.
pub fn test_user() -> User {
    User::new("Toji", "tojifushigiro@jjk.com").with_avatar("https://example.com/toji.jpg")
}

/// Configuration pointing at the repository's templates and static files.
pub fn test_config() -> Config {
    let root = project_root();
    Config {
        templates_dir: root.join("templates"),
        static_dir: root.join("static"),
        display_user: test_user(),
        ..Config::default()
    }
}

/// Navigator that records every navigation request.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    current_path: Option<String>,
    calls: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    /// A navigator currently showing `path`.
    pub fn at(path: &str) -> Self {
        Self {
            current_path: Some(path.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Navigation requests in the order they were issued.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }
}

impl Navigator for RecordingNavigator {
    fn current_path(&self) -> Option<&str> {
        self.current_path.as_deref()
    }

    fn navigate(&self, path: &str) {
        self.calls.lock().push(path.to_string());
    }
}

/// Non-overlapping occurrences of `needle` in `html`.
pub fn count_occurrences(html: &str, needle: &str) -> usize {
    html.matches(needle).count()
}

/// Assert that each needle appears in `html`, in the given order.
///
/// # Panics
///
/// Panics naming the first needle that is missing or out of order.
pub fn assert_in_order(html: &str, needles: &[&str]) {
    let mut offset = 0;
    for needle in needles {
        match html[offset..].find(needle) {
            Some(pos) => offset += pos + needle.len(),
            None => panic!("{needle:?} not found after byte {offset} in:\n{html}"),
        }
    }
}

/// The opening tag of the first element carrying `marker`, e.g. a
/// `data-slot` attribute.
pub fn opening_tag<'a>(html: &'a str, marker: &str) -> Option<&'a str> {
    let at = html.find(marker)?;
    let start = html[..at].rfind('<')?;
    let end = at + html[at..].find('>')?;
    Some(&html[start..=end])
}
