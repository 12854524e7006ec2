//! Navigation registry - the fixed, ordered list of top-level destinations.

use serde::Serialize;

use super::active::is_active;

/// A navigation destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    /// Link text. Non-empty and unique within the registry.
    pub label: &'static str,
    /// Target path. Starts with `/` and is unique within the registry.
    pub href: &'static str,
}

/// Top-level navigation, in display order.
pub static NAV_ITEMS: &[NavEntry] = &[
    NavEntry {
        label: "Dashboard",
        href: "/",
    },
    NavEntry {
        label: "Search",
        href: "/search",
    },
    NavEntry {
        label: "Watchlist",
        href: "/watchlist",
    },
];

/// Look up an entry by its exact href.
pub fn find_by_href(href: &str) -> Option<&'static NavEntry> {
    NAV_ITEMS.iter().find(|entry| entry.href == href)
}

/// The entry that is active for `current_path`, if any.
pub fn active_entry(current_path: Option<&str>) -> Option<&'static NavEntry> {
    NAV_ITEMS
        .iter()
        .find(|entry| is_active(current_path, entry.href))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn has_three_entries_in_order() {
        let labels: Vec<_> = NAV_ITEMS.iter().map(|e| e.label).collect();
        assert_eq!(labels, vec!["Dashboard", "Search", "Watchlist"]);

        let hrefs: Vec<_> = NAV_ITEMS.iter().map(|e| e.href).collect();
        assert_eq!(hrefs, vec!["/", "/search", "/watchlist"]);
    }

    #[test]
    fn labels_and_hrefs_are_unique() {
        let labels: HashSet<_> = NAV_ITEMS.iter().map(|e| e.label).collect();
        let hrefs: HashSet<_> = NAV_ITEMS.iter().map(|e| e.href).collect();
        assert_eq!(labels.len(), NAV_ITEMS.len());
        assert_eq!(hrefs.len(), NAV_ITEMS.len());
    }

    #[test]
    fn entries_are_well_formed() {
        for entry in NAV_ITEMS {
            assert!(!entry.label.is_empty());
            assert!(entry.href.starts_with('/'));
        }
    }

    #[test]
    fn find_by_href_exact() {
        assert_eq!(find_by_href("/search").map(|e| e.label), Some("Search"));
        assert!(find_by_href("/search/results").is_none());
    }

    #[test]
    fn at_most_one_active_entry() {
        let paths = [
            Some("/"),
            Some("/search"),
            Some("/search/results"),
            Some("/watchlist/123"),
            Some("/search-foo"),
            Some(""),
            None,
        ];
        for path in paths {
            let count = NAV_ITEMS
                .iter()
                .filter(|e| is_active(path, e.href))
                .count();
            assert!(count <= 1, "{path:?} activated {count} entries");
        }
    }

    #[test]
    fn active_entry_resolution() {
        assert_eq!(active_entry(Some("/")).map(|e| e.label), Some("Dashboard"));
        assert_eq!(
            active_entry(Some("/watchlist/42")).map(|e| e.label),
            Some("Watchlist")
        );
        assert!(active_entry(Some("/sign-in")).is_none());
        assert!(active_entry(None).is_none());
    }
}
