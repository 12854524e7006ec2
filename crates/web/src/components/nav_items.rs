//! Navigation list.

use anyhow::Result;
use serde::Serialize;

use crate::nav::{NAV_ITEMS, NavEntry, is_active};
use crate::theme::{Markup, ThemeEngine, class_names};

const LIST_CLASSES: &str = "flex flex-col sm:flex-row p-2 gap-3 sm:gap-10 font-medium";
const LINK_CLASSES: &str = "hover:text-yellow-500 transition-colors";
const ACTIVE_CLASSES: &str = "text-grey-100";

/// One rendered link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
    pub active: bool,
    pub class: String,
}

/// The navigation entries as a list of links, the active one highlighted.
#[derive(Debug, Clone, Copy)]
pub struct NavItems<'a> {
    entries: &'static [NavEntry],
    current_path: Option<&'a str>,
}

#[derive(Serialize)]
struct NavItemsView {
    class: &'static str,
    links: Vec<NavLink>,
}

impl<'a> NavItems<'a> {
    /// The site navigation for a page at `current_path`.
    pub fn new(current_path: Option<&'a str>) -> Self {
        Self::with_entries(NAV_ITEMS, current_path)
    }

    pub fn with_entries(entries: &'static [NavEntry], current_path: Option<&'a str>) -> Self {
        Self {
            entries,
            current_path,
        }
    }

    /// Links in registry order.
    pub fn links(&self) -> Vec<NavLink> {
        self.entries
            .iter()
            .map(|entry| {
                let active = is_active(self.current_path, entry.href);
                let class = if active {
                    class_names([LINK_CLASSES, ACTIVE_CLASSES])
                } else {
                    LINK_CLASSES.to_string()
                };
                NavLink {
                    label: entry.label,
                    href: entry.href,
                    active,
                    class,
                }
            })
            .collect()
    }

    pub fn render(&self, theme: &ThemeEngine) -> Result<Markup> {
        let view = NavItemsView {
            class: LIST_CLASSES,
            links: self.links(),
        };

        let mut context = tera::Context::new();
        context.insert("nav", &view);
        theme.render("components/nav-items.html", &context)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::theme::test_engine;

    fn active_labels(path: Option<&str>) -> Vec<&'static str> {
        NavItems::new(path)
            .links()
            .into_iter()
            .filter(|l| l.active)
            .map(|l| l.label)
            .collect()
    }

    #[test]
    fn links_follow_registry_order() {
        let labels: Vec<_> = NavItems::new(Some("/")).links().iter().map(|l| l.label).collect();
        assert_eq!(labels, vec!["Dashboard", "Search", "Watchlist"]);
    }

    #[test]
    fn highlights_matching_entry() {
        assert_eq!(active_labels(Some("/")), vec!["Dashboard"]);
        assert_eq!(active_labels(Some("/search")), vec!["Search"]);
        assert_eq!(active_labels(Some("/search/results")), vec!["Search"]);
        assert_eq!(active_labels(Some("/watchlist")), vec!["Watchlist"]);
        assert_eq!(active_labels(Some("/watchlist/123")), vec!["Watchlist"]);
    }

    #[test]
    fn nothing_highlighted_without_path() {
        assert!(active_labels(None).is_empty());
        assert!(active_labels(Some("")).is_empty());
        assert!(active_labels(Some("/sign-in")).is_empty());
    }

    #[test]
    fn active_link_classes() {
        let links = NavItems::new(Some("/search")).links();
        assert_eq!(links[0].class, "hover:text-yellow-500 transition-colors");
        assert_eq!(
            links[1].class,
            "hover:text-yellow-500 transition-colors text-grey-100"
        );
    }

    #[test]
    fn renders_list_of_links() {
        let html = NavItems::new(Some("/search"))
            .render(&test_engine())
            .unwrap()
            .into_string();

        assert!(html.contains(r#"<ul class="flex flex-col sm:flex-row p-2 gap-3 sm:gap-10 font-medium">"#));
        assert_eq!(html.matches("<li>").count(), 3);
        assert!(html.contains(r#"<a href="/" class="hover:text-yellow-500 transition-colors">Dashboard</a>"#));
        assert!(html.contains(
            r#"<a href="/search" class="hover:text-yellow-500 transition-colors text-grey-100" aria-current="page">Search</a>"#
        ));
        assert!(html.contains(r#"<a href="/watchlist" class="hover:text-yellow-500 transition-colors">Watchlist</a>"#));
        assert_eq!(html.matches(r#"aria-current="page""#).count(), 1);
    }

    #[test]
    fn renders_without_path() {
        let html = NavItems::new(None).render(&test_engine()).unwrap();
        assert!(!html.as_str().contains("aria-current"));
        assert_eq!(html.as_str().matches("<a ").count(), 3);
    }

    #[test]
    fn very_long_path_renders() {
        let path = format!("/search/{}", "a".repeat(1000));
        let html = NavItems::new(Some(&path)).render(&test_engine()).unwrap();
        assert_eq!(html.as_str().matches(r#"aria-current="page""#).count(), 1);
    }
}
