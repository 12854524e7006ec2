//! Active-route matching.

/// Root path. Only ever matches itself.
const ROOT: &str = "/";

/// Decide whether the navigation entry at `href` is the active route for
/// `current_path`.
///
/// The root entry is active only on the root path itself, otherwise it would
/// be highlighted on every page. Other entries match their own path and any
/// path below it on a segment boundary: `/search/results` activates
/// `/search`, `/search-foo` does not.
///
/// A missing or empty current path matches nothing but the root check, which
/// it also fails.
pub fn is_active(current_path: Option<&str>, href: &str) -> bool {
    let Some(path) = current_path else {
        return false;
    };

    if href == ROOT {
        return path == ROOT;
    }

    match path.strip_prefix(href) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}
